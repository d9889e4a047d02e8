#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for the drift deployment planner
//!
//! Fine-grained error enums organized by domain, following the
//! planner/executor component split. All error types implement `Clone`
//! so the same error can be returned to a caller and re-emitted to a
//! progress observer.

pub mod config;
pub mod diff;
pub mod exec;
pub mod graph;
pub mod plan;
pub mod registry;

pub use config::ConfigError;
pub use diff::DiffError;
pub use exec::ExecError;
pub use graph::GraphError;
pub use plan::PlanError;
pub use registry::RegistryError;

use thiserror::Error;

/// Generic error type for cross-crate boundaries.
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    #[error("planning error: {0}")]
    Plan(#[from] PlanError),

    #[error("execution error: {0}")]
    Exec(#[from] ExecError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an internal error with a message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Config(ConfigError::Io {
            message: err.to_string(),
        })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON error: {err}"))
    }
}

/// Result type alias for drift operations.
pub type Result<T> = std::result::Result<T, Error>;
