//! Executor error types
//!
//! Execution errors halt the step-apply loop. Unlike planning errors they
//! are attached to a specific step and carry the provider's last-known
//! resource state alongside the error (see `drift_plan::ExecutionOutcome`).

use crate::RegistryError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecError {
    #[error("provider unavailable: {0}")]
    Provider(#[from] RegistryError),

    #[error("provider operation failed for {moniker}: {message}")]
    ProviderFailure { moniker: String, message: String },

    /// A step precondition was violated (e.g. a create step whose input
    /// resource already carries an ID). This indicates a defect in the
    /// planner itself; it is returned rather than panicking so a caller
    /// can still report a clean diagnostic.
    #[error("invariant violation: {reason}")]
    InvariantViolation { reason: String },
}
