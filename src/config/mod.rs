//! TOML configuration for the mock services and logging.
//!
//! Looked up at `<config dir>/roster/config.toml` unless a path is given.
//! Every key is optional; a missing default file means all defaults.

mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;

use crate::service::MockApi;

pub use error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub mock_api: MockApiConfig,
    pub logging: LoggingConfig,
}

/// Behaviour of the in-process name validator and location service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MockApiConfig {
    pub validation_delay_ms: u64,
    pub locations_delay_ms: u64,
    pub locations: Vec<String>,
    /// Names the validator rejects (exact match).
    pub invalid_names: Vec<String>,
    /// When set, names must match this regex to be valid.
    pub name_pattern: Option<String>,
    pub fail_validation: bool,
    pub fail_locations: bool,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            validation_delay_ms: 300,
            locations_delay_ms: 150,
            locations: ["Canada", "China", "USA", "Brazil"]
                .map(String::from)
                .to_vec(),
            invalid_names: vec!["invalid name".to_string()],
            name_pattern: None,
            fail_validation: false,
            fail_locations: false,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Log file; defaults to `<data dir>/roster/roster.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Returns `<config dir>/roster/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("roster").join("config.toml"))
    }

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields [`Config::default`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.name_pattern()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    fn name_pattern(&self) -> Result<Option<Regex>, ConfigError> {
        self.mock_api
            .name_pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(Into::into)
    }

    /// Builds the mock service described by `[mock_api]`.
    pub fn mock_api(&self) -> Result<MockApi, ConfigError> {
        let cfg = &self.mock_api;
        let mut api = MockApi::new(cfg.locations.clone())
            .with_invalid_names(cfg.invalid_names.clone())
            .with_delays(
                Duration::from_millis(cfg.validation_delay_ms),
                Duration::from_millis(cfg.locations_delay_ms),
            );
        if let Some(pattern) = self.name_pattern()? {
            api = api.with_name_pattern(pattern);
        }
        if cfg.fail_validation {
            api = api.failing_validation();
        }
        if cfg.fail_locations {
            api = api.failing_locations();
        }
        Ok(api)
    }

    /// Resolves the log file path.
    pub fn log_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.logging.file {
            Some(file) => Ok(file.clone()),
            None => dirs::data_dir()
                .map(|d| d.join("roster").join("roster.log"))
                .ok_or(ConfigError::NoDataDir),
        }
    }
}
