//! CLI error handling

use std::fmt;
use std::path::PathBuf;

/// CLI-specific error type, wrapping the core library's errors with the
/// process-level concerns (argument validation, file I/O) the core
/// itself never needs to know about.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error
    Config(drift_errors::ConfigError),
    /// Planning error (diff/graph)
    Plan(drift_errors::PlanError),
    /// Execution halted on a step failure
    Exec {
        moniker: String,
        message: String,
    },
    /// A snapshot file could not be read
    SnapshotRead { path: PathBuf, source: std::io::Error },
    /// A snapshot file was not valid JSON for our schema
    SnapshotParse { path: PathBuf, source: serde_json::Error },
    /// Invalid command arguments
    InvalidArguments(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "configuration error: {e}"),
            CliError::Plan(e) => write!(f, "planning failed: {e}"),
            CliError::Exec { moniker, message } => {
                write!(f, "execution halted on {moniker}: {message}")
            }
            CliError::SnapshotRead { path, source } => {
                write!(f, "could not read snapshot {}: {source}", path.display())
            }
            CliError::SnapshotParse { path, source } => {
                write!(f, "could not parse snapshot {}: {source}", path.display())
            }
            CliError::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Plan(e) => Some(e),
            CliError::SnapshotRead { source, .. } => Some(source),
            CliError::SnapshotParse { source, .. } => Some(source),
            CliError::Exec { .. } | CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<drift_errors::ConfigError> for CliError {
    fn from(e: drift_errors::ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<drift_errors::Error> for CliError {
    fn from(e: drift_errors::Error) -> Self {
        match e {
            drift_errors::Error::Config(e) => CliError::Config(e),
            other => CliError::InvalidArguments(other.to_string()),
        }
    }
}

impl From<drift_errors::PlanError> for CliError {
    fn from(e: drift_errors::PlanError) -> Self {
        CliError::Plan(e)
    }
}
