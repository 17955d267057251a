//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr. `RUST_LOG` overrides the configured level.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    /// The log file or its directory could not be opened.
    #[error("could not open log file: {0}")]
    Io(#[from] std::io::Error),

    /// The configured level is not a valid filter directive.
    #[error("invalid log level: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialised: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Builds the filter: `RUST_LOG` when set, otherwise `level`.
pub fn filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))
}

/// Installs a global subscriber appending to `path`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(level: &str, path: &Path) -> Result<(), LogInitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
