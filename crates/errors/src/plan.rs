//! Planning error types
//!
//! A planning error aborts plan construction entirely; no partial plan
//! is ever returned to the caller.

use crate::{DiffError, GraphError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanError {
    #[error("diff error: {0}")]
    Diff(#[from] DiffError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}
