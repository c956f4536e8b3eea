//! Configuration loading
//!
//! Reads `~/.config/autofill/config.toml`. A missing file yields defaults; a
//! malformed one yields defaults plus a warning shown in the footer.

mod types;

pub use types::{Config, ThemeConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AutofillError;

const CONFIG_DIR: &str = "autofill";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and any problem encountered while loading it
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load from `path`; never fails
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config error: {}", e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, AutofillError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, AutofillError> {
    toml::from_str(contents).map_err(|e| AutofillError::InvalidConfig(e.message().to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
