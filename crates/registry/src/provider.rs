//! The provider contract consumed by the executor

use async_trait::async_trait;
use drift_types::{PropertyBag, ResourceType};
use std::fmt;

/// Opaque health signal returned by a provider alongside every call's
/// outcome. The executor forwards it verbatim; it never alters control
/// flow beyond being returned to the caller on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceState {
    Ok,
    #[default]
    Unknown,
    Pending,
    Corrupt,
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ok => "ok",
            Self::Unknown => "unknown",
            Self::Pending => "pending",
            Self::Corrupt => "corrupt",
        };
        write!(f, "{s}")
    }
}

/// Error message returned by a provider operation. Providers are
/// external collaborators (possibly out-of-process plugins reached
/// over an unspecified IPC mechanism); the core trusts their verdict
/// and does not attempt to reinterpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError(pub String);

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ProviderError {}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The result of one provider call: a fallible payload plus the
/// resource's state as the provider observed it, reported unconditionally.
#[derive(Debug, Clone)]
pub struct ProviderOutcome<T> {
    pub result: Result<T, ProviderError>,
    pub state: ResourceState,
}

impl<T> ProviderOutcome<T> {
    #[must_use]
    pub fn ok(value: T, state: ResourceState) -> Self {
        Self {
            result: Ok(value),
            state,
        }
    }

    #[must_use]
    pub fn err(message: impl Into<String>, state: ResourceState) -> Self {
        Self {
            result: Err(ProviderError::new(message)),
            state,
        }
    }
}

/// A pluggable component that performs create/update/delete against a
/// real system for one package.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Create a resource. Must return a non-empty ID on success.
    async fn create(
        &self,
        resource_type: &ResourceType,
        properties: &PropertyBag,
    ) -> ProviderOutcome<String>;

    /// Update a resource in place, or signal a replacement by returning
    /// `Some(new_id)` instead of `None`.
    async fn update(
        &self,
        id: &str,
        resource_type: &ResourceType,
        old_properties: &PropertyBag,
        new_properties: &PropertyBag,
    ) -> ProviderOutcome<Option<String>>;

    /// Delete a resource by ID.
    async fn delete(&self, id: &str, resource_type: &ResourceType) -> ProviderOutcome<()>;
}
