pub mod case;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod transform;

pub use case::{split_words, split_words_with, CaseStyle, SplitPolicy};
pub use config::Config;
pub use error::{Error, Result};
pub use transform::{CollisionPolicy, Options, Transformable};

/// Rename every object key in `value` to `style`, with default options.
pub fn transform_keys<T: Transformable>(value: &T, style: CaseStyle) -> Result<T> {
    transform_keys_with(value, style, &Options::default())
}

/// Rename every object key in `value` to `style`, with explicit split, collision and depth options.
pub fn transform_keys_with<T: Transformable>(
    value: &T,
    style: CaseStyle,
    options: &Options,
) -> Result<T> {
    log::debug!(
        "renaming keys to {} (split: {}, collisions: {})",
        style,
        options.split_policy,
        options.on_collision
    );
    value.transform(style, options)
}

/// Like [`transform_keys`], but takes the style by name.
///
/// The name is validated before any traversal happens.
pub fn transform_keys_as<T: Transformable>(value: &T, style: &str) -> Result<T> {
    let style: CaseStyle = style.parse()?;
    transform_keys(value, style)
}

/// Convert a single key, e.g. `convert_key("user-age", CaseStyle::CamelCase)`.
pub fn convert_key(key: &str, style: CaseStyle) -> String {
    style.convert(key, SplitPolicy::Legacy)
}
