#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration for the `driftctl` harness.
//!
//! Layered the way the rest of the ambient stack is: hard-coded
//! defaults, then an optional `~/.config/drift/config.toml`, then
//! `DRIFT_`-prefixed environment variables, each layer overriding the
//! last. The core planning and execution crates never read this
//! configuration themselves; only the CLI harness loads it and threads
//! the resulting values in as plain arguments.

mod logging;
mod planning;
mod providers;

pub use logging::{LogFormat, LoggingConfig};
pub use planning::{PlanningConfig, TieBreak};
pub use providers::ProvidersConfig;

use drift_errors::{ConfigError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Top-level configuration for the `driftctl` harness.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub planning: PlanningConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// The default config file path: `~/.config/drift/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let home = dirs::home_dir().ok_or_else(|| ConfigError::Io {
            message: "could not determine home directory".to_string(),
        })?;
        Ok(home.join(".config").join("drift").join("config.toml"))
    }

    /// Load configuration from a specific file, without layering
    /// environment overrides on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid
    /// TOML, or if a value fails validation (see [`PlanningConfig`]).
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Io { message: e.to_string() })?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.planning.validate()?;
        Ok(config)
    }

    /// Load the full layered configuration: defaults, then the file at
    /// `path` if given (falling back to [`Config::default_path`] if it
    /// exists), then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly-given file is missing or
    /// malformed, or if an environment override names an invalid value.
    /// A missing *default* path is not an error: defaults apply instead.
    pub async fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path).await?,
            None => match Self::default_path() {
                Ok(default_path) if default_path.exists() => Self::load_from_file(&default_path).await?,
                _ => Self::default(),
            },
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Persist this configuration as TOML to `path`, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the
    /// file cannot be written, or serialization fails.
    pub async fn save_to_file(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::Io { message: e.to_string() })?;
        }
        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        fs::write(path, contents)
            .await
            .map_err(|e| ConfigError::Io { message: e.to_string() })?;
        Ok(())
    }

    /// Override fields from `DRIFT_`-prefixed environment variables.
    ///
    /// Recognized: `DRIFT_LOG_LEVEL`, `DRIFT_LOG_FORMAT`,
    /// `DRIFT_PROVIDER_PATH` (`:`-separated list of directories).
    fn apply_env_overrides(&mut self) -> Result<(), Error> {
        if let Ok(level) = std::env::var("DRIFT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DRIFT_LOG_FORMAT") {
            self.logging.format = format.parse().map_err(|()| ConfigError::InvalidValue {
                field: "DRIFT_LOG_FORMAT".to_string(),
                value: format,
            })?;
        }
        if let Ok(path_list) = std::env::var("DRIFT_PROVIDER_PATH") {
            self.providers.search_paths = std::env::split_paths(&path_list).collect();
        }
        self.planning.validate()?;
        Ok(())
    }
}
