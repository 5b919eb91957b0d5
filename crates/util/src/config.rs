//! Generator configuration.
//!
//! A small JSON file providing defaults for where and how documents are
//! written. Command-line flags take precedence over anything set here.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::expand_tilde;

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "SWAGMODEL_CONFIG_PATH";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory documents are written to. Tilde-expanded on use.
    #[serde(default)]
    pub output_dir: Option<String>,
    /// File extension for written documents, without the dot.
    #[serde(default)]
    pub extension: Option<String>,
}

impl GeneratorConfig {
    /// Loads the configuration from [`default_config_path`].
    pub fn load() -> Self {
        Self::load_from_path(&default_config_path())
    }

    /// Loads the configuration from `path`. A missing or malformed file
    /// yields the defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path)
            && let Ok(config) = serde_json::from_str(&content)
        {
            return config;
        }
        debug!(path = %path.display(), "no usable generator config; using defaults");
        GeneratorConfig::default()
    }

    /// Configured output directory, tilde-expanded.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir.as_deref().map(expand_tilde)
    }
}

/// Get the default path for the generator configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swagmodel")
        .join("config.json")
}
