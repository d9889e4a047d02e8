//! Diff engine error types

use thiserror::Error;

/// Errors raised while joining an old and new snapshot on moniker.
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DiffError {
    /// The same moniker names resources of two different types across snapshots.
    #[error("moniker {moniker} changed type from {old_type} to {new_type}")]
    TypeMismatch {
        moniker: String,
        old_type: String,
        new_type: String,
    },
}
