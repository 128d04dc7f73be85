//! Optional configuration file
//!
//! Looked up at `$REPO_STATUS_CONFIG`, then `<config dir>/repo-status/config.toml`.
//! Every key is optional; command-line flags override whatever is set here.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "REPO_STATUS_CONFIG";
const CONFIG_DIR_NAME: &str = "repo-status";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Extra ignore patterns, added to the defaults unless `default_ignore = false`
    pub ignore: Vec<String>,
    pub default_ignore: Option<bool>,
    pub max_depth: Option<usize>,
    pub jobs: Option<usize>,
    pub verbose: Option<bool>,
}

impl FileConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration file")
    }

    /// Loads the configuration file
    ///
    /// An explicit path must exist. The implicit locations are optional: when no file
    /// is there, defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))
    }
}

/// Location of the implicit configuration file, if one can be determined
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
