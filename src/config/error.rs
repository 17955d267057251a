use std::path::PathBuf;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file {path}: {source}")]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`Config`](super::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `mock_api.name_pattern` is not a valid regular expression.
    #[error("invalid name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The platform does not provide a data directory for the log file.
    #[error("could not determine data directory")]
    NoDataDir,
}
