//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Collect names and locations into a table.
#[derive(Debug, Parser)]
#[command(name = "roster", version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
