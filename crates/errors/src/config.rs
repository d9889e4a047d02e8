//! Configuration error types

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ConfigError {
    #[error("I/O error reading config: {message}")]
    Io { message: String },

    #[error("failed to parse config: {message}")]
    Parse { message: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}
