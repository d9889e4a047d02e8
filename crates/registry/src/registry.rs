//! Package-keyed, lazily-populated provider registry

use crate::Provider;
use async_trait::async_trait;
use dashmap::DashMap;
use drift_errors::RegistryError;
use drift_types::ResourceType;
use std::sync::Arc;

/// Strategy for acquiring a provider handle for a package. Implementations
/// may back onto out-of-process plugins over any IPC mechanism; this
/// trait only specifies the in-process acquisition boundary.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    async fn acquire(&self, package: &str) -> Result<Arc<dyn Provider>, RegistryError>;
}

/// Maps a resource type's package to a provider handle, acquiring each
/// provider at most once per package and caching it for the lifetime of
/// the registry.
///
/// Backed by a concurrent map rather than a plain `HashMap` behind a
/// lock: the planner itself is sequential, but nothing here prevents a
/// future parallel scheduler from sharing one registry across
/// concurrently-executing steps.
pub struct ProviderRegistry {
    factory: Arc<dyn ProviderFactory>,
    cache: DashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn new(factory: Arc<dyn ProviderFactory>) -> Self {
        Self {
            factory,
            cache: DashMap::new(),
        }
    }

    /// Resolve the provider responsible for `resource_type`'s package,
    /// acquiring and caching it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the factory has no acquisition
    /// strategy for the package, or acquisition itself fails.
    pub async fn resolve(&self, resource_type: &ResourceType) -> Result<Arc<dyn Provider>, RegistryError> {
        let package = resource_type.package();

        if let Some(provider) = self.cache.get(package) {
            return Ok(Arc::clone(&provider));
        }

        let provider = self.factory.acquire(package).await?;
        self.cache.insert(package.to_string(), Arc::clone(&provider));
        Ok(provider)
    }

    /// Packages whose provider has already been acquired.
    #[must_use]
    pub fn cached_packages(&self) -> Vec<String> {
        self.cache.iter().map(|e| e.key().clone()).collect()
    }
}
