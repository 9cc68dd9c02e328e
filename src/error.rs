use thiserror::Error;

/// Errors raised while renaming keys.
///
/// Splitting and joining never fail; these only surface from the structure
/// walker and from parsing user-supplied identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unsupported case style '{0}' (expected one of: {styles})", styles = crate::case::style_names())]
    UnsupportedCaseStyle(String),

    #[error("key collision at {path}: more than one key maps to '{key}'")]
    KeyCollision { key: String, path: String },

    #[error("nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
