//! Provider registry error types

use thiserror::Error;

/// Errors raised while resolving a provider for a resource type's package.
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum RegistryError {
    /// The registry has no acquisition strategy registered for this package.
    #[error("no provider registered for package {package}")]
    Unavailable { package: String },

    /// A strategy is registered but acquiring the provider handle failed.
    #[error("failed to acquire provider for package {package}: {reason}")]
    AcquisitionFailed { package: String, reason: String },
}
