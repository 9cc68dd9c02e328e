use crate::{CaseStyle, CollisionPolicy, Options, SplitPolicy};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".keycase.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub case_style: CaseStyle,
    pub split_policy: SplitPolicy,
    pub on_collision: CollisionPolicy,
    pub max_depth: Option<usize>,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_style: CaseStyle::CamelCase,
            split_policy: SplitPolicy::Legacy,
            on_collision: CollisionPolicy::Overwrite,
            max_depth: None,
            pretty: true,
        }
    }
}

/// A config layer: a file on disk or the command line. Unset fields leave
/// lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    pub case_style: Option<CaseStyle>,
    pub split_policy: Option<SplitPolicy>,
    pub on_collision: Option<CollisionPolicy>,
    pub max_depth: Option<usize>,
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli: PartialConfig) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        Ok(config.merge(cli))
    }

    pub fn from_file(path: &Path) -> Result<PartialConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let layer = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(layer)
    }

    pub fn merge(mut self, layer: PartialConfig) -> Self {
        if let Some(style) = layer.case_style {
            self.case_style = style;
        }
        if let Some(policy) = layer.split_policy {
            self.split_policy = policy;
        }
        if let Some(policy) = layer.on_collision {
            self.on_collision = policy;
        }
        if layer.max_depth.is_some() {
            self.max_depth = layer.max_depth;
        }
        if let Some(pretty) = layer.pretty {
            self.pretty = pretty;
        }
        self
    }

    pub fn options(&self) -> Options {
        Options {
            split_policy: self.split_policy,
            on_collision: self.on_collision,
            max_depth: self.max_depth,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "keycase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
