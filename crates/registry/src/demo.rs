//! An in-memory provider and fixtures for demonstrating and testing the
//! executor without a real backing system.
//!
//! Gated behind the `demo-provider` feature (always available under
//! `#[cfg(test)]`) so a production build of the planner never links it
//! in by accident.

use crate::{Provider, ProviderError, ProviderFactory, ProviderOutcome, ProviderRegistry, ResourceState};
use async_trait::async_trait;
use drift_errors::RegistryError;
use drift_types::{PropertyBag, PropertyValue, ResourceType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Assigns monotonically increasing IDs on create. Updates apply in
/// place unless the new properties set `force_replace` to `true`, in
/// which case the provider signals a replacement with a fresh ID.
/// Deletes always succeed.
#[derive(Default)]
pub struct DemoProvider {
    next_id: AtomicU64,
}

impl DemoProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&self) -> String {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("demo-{id}")
    }
}

#[async_trait]
impl Provider for DemoProvider {
    async fn create(&self, _resource_type: &ResourceType, _properties: &PropertyBag) -> ProviderOutcome<String> {
        ProviderOutcome::ok(self.allocate(), ResourceState::Ok)
    }

    async fn update(
        &self,
        _id: &str,
        _resource_type: &ResourceType,
        _old_properties: &PropertyBag,
        new_properties: &PropertyBag,
    ) -> ProviderOutcome<Option<String>> {
        let force_replace = matches!(new_properties.get("force_replace"), Some(PropertyValue::Bool(true)));
        if force_replace {
            ProviderOutcome::ok(Some(self.allocate()), ResourceState::Ok)
        } else {
            ProviderOutcome::ok(None, ResourceState::Ok)
        }
    }

    async fn delete(&self, _id: &str, _resource_type: &ResourceType) -> ProviderOutcome<()> {
        ProviderOutcome::ok((), ResourceState::Ok)
    }
}

/// Wraps a [`DemoProvider`] but deterministically fails `create` for any
/// resource whose `name` property is in its configured fault set, to
/// exercise halt-on-error behavior.
pub struct FlakyProvider {
    inner: DemoProvider,
    fail_on: Mutex<HashMap<String, String>>,
}

impl FlakyProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DemoProvider::new(),
            fail_on: Mutex::new(HashMap::new()),
        }
    }

    /// Configure the provider to fail any `create` call whose `name`
    /// property equals `name`, with the given error message.
    pub fn fail_create(&self, name: impl Into<String>, reason: impl Into<String>) {
        self.fail_on.lock().unwrap().insert(name.into(), reason.into());
    }
}

impl Default for FlakyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for FlakyProvider {
    async fn create(&self, resource_type: &ResourceType, properties: &PropertyBag) -> ProviderOutcome<String> {
        if let Some(PropertyValue::String(name)) = properties.get("name") {
            if let Some(reason) = self.fail_on.lock().unwrap().get(name) {
                return ProviderOutcome::err(reason.clone(), ResourceState::Unknown);
            }
        }
        self.inner.create(resource_type, properties).await
    }

    async fn update(
        &self,
        id: &str,
        resource_type: &ResourceType,
        old_properties: &PropertyBag,
        new_properties: &PropertyBag,
    ) -> ProviderOutcome<Option<String>> {
        self.inner.update(id, resource_type, old_properties, new_properties).await
    }

    async fn delete(&self, id: &str, resource_type: &ResourceType) -> ProviderOutcome<()> {
        self.inner.delete(id, resource_type).await
    }
}

/// A [`ProviderFactory`] that hands out one shared provider for every
/// package, regardless of which package is requested.
pub struct SingleProviderFactory(Arc<dyn Provider>);

impl SingleProviderFactory {
    #[must_use]
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self(provider)
    }
}

#[async_trait]
impl ProviderFactory for SingleProviderFactory {
    async fn acquire(&self, _package: &str) -> Result<Arc<dyn Provider>, RegistryError> {
        Ok(Arc::clone(&self.0))
    }
}

/// Build a registry backed by one [`DemoProvider`] shared across every package.
#[must_use]
pub fn demo_registry() -> Arc<ProviderRegistry> {
    Arc::new(ProviderRegistry::new(Arc::new(SingleProviderFactory::new(Arc::new(
        DemoProvider::new(),
    )))))
}
