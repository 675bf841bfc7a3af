//! Configuration loading
//!
//! Settings come from an optional TOML file; GitHub credentials come from the
//! environment. A missing file yields defaults silently, a broken one yields
//! defaults plus a warning that the app shows as an alert on start-up.

mod credentials;
pub mod types;

use std::path::{Path, PathBuf};

pub use credentials::{BuildEnv, Credentials};
pub use types::{AlertConfig, Config, SearchConfig};

use crate::error::GhSuggestError;

/// Loaded configuration plus an optional warning for the user
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location: `<config dir>/ghsuggest/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ghsuggest").join("config.toml"))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match default_config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load configuration from `path`, falling back to defaults on any problem
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} (using defaults)", e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, GhSuggestError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| GhSuggestError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
