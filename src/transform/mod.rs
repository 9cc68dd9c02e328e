mod json;
mod table;

use crate::case::{CaseStyle, SplitPolicy};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when two keys of one object rename to the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// The later entry replaces the earlier value; the key keeps its first position.
    #[default]
    Overwrite,
    /// Overwrite, and log a warning naming the key.
    Warn,
    /// Abort with [`Error::KeyCollision`].
    Error,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            "warn" => Ok(CollisionPolicy::Warn),
            "error" => Ok(CollisionPolicy::Error),
            _ => Err(format!("Unknown collision policy: {}", s)),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Overwrite => write!(f, "overwrite"),
            CollisionPolicy::Warn => write!(f, "warn"),
            CollisionPolicy::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub split_policy: SplitPolicy,
    pub on_collision: CollisionPolicy,
    /// Maximum number of nested containers, the outermost one included.
    /// `None` recurses without limit.
    pub max_depth: Option<usize>,
}

/// A value whose object keys can be renamed.
///
/// Implementations rebuild the whole structure: arrays keep their length and
/// order, primitives are copied unchanged, and only object keys differ.
pub trait Transformable: Sized {
    fn transform(&self, style: CaseStyle, options: &Options) -> Result<Self>;
}

/// Where the walker currently is, for collision reports.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Location<'a> {
    Root,
    Key(&'a Location<'a>, &'a str),
    Index(&'a Location<'a>, usize),
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Root => f.write_str("$"),
            Location::Key(parent, key) => write!(f, "{}.{}", parent, key),
            Location::Index(parent, index) => write!(f, "{}[{}]", parent, index),
        }
    }
}

/// Shared state of one traversal. The per-format recursion lives in the
/// `json` and `table` modules.
pub(crate) struct Walker<'o> {
    style: CaseStyle,
    options: &'o Options,
}

impl<'o> Walker<'o> {
    pub(crate) fn new(style: CaseStyle, options: &'o Options) -> Self {
        Self { style, options }
    }

    fn rename(&self, key: &str) -> String {
        self.style.convert(key, self.options.split_policy)
    }

    /// Check the depth limit before entering a container at `depth`
    /// and return the depth of its children.
    fn descend(&self, depth: usize) -> Result<usize> {
        let inner = depth + 1;
        match self.options.max_depth {
            Some(limit) if inner > limit => Err(Error::DepthExceeded { limit }),
            _ => Ok(inner),
        }
    }

    /// Called before inserting `key` into an object that already holds it.
    fn collide(&self, key: &str, at: &Location<'_>) -> Result<()> {
        match self.options.on_collision {
            CollisionPolicy::Overwrite => Ok(()),
            CollisionPolicy::Warn => {
                log::warn!("key collision at {}: '{}' overwritten by a later entry", at, key);
                Ok(())
            }
            CollisionPolicy::Error => Err(Error::KeyCollision {
                key: key.to_string(),
                path: at.to_string(),
            }),
        }
    }
}
