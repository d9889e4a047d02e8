#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Provider registry for the drift deployment planner
//!
//! Defines the [`Provider`] contract the executor drives, and
//! [`ProviderRegistry`], which maps a resource type's package to a
//! provider handle, acquiring providers lazily through a
//! [`ProviderFactory`] and caching them for the lifetime of a plan.

mod provider;
mod registry;

#[cfg(any(test, feature = "demo-provider"))]
pub mod demo;

pub use provider::{Provider, ProviderError, ProviderOutcome, ResourceState};
pub use registry::{ProviderFactory, ProviderRegistry};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use drift_errors::RegistryError;
    use drift_types::{PropertyBag, ResourceType};
    use std::sync::Arc;

    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        async fn create(&self, _resource_type: &ResourceType, _properties: &PropertyBag) -> ProviderOutcome<String> {
            ProviderOutcome::ok("id-1".to_string(), ResourceState::Ok)
        }

        async fn update(
            &self,
            _id: &str,
            _resource_type: &ResourceType,
            _old_properties: &PropertyBag,
            _new_properties: &PropertyBag,
        ) -> ProviderOutcome<Option<String>> {
            ProviderOutcome::ok(None, ResourceState::Ok)
        }

        async fn delete(&self, _id: &str, _resource_type: &ResourceType) -> ProviderOutcome<()> {
            ProviderOutcome::ok((), ResourceState::Ok)
        }
    }

    struct OnlyKnownPackages;

    #[async_trait]
    impl ProviderFactory for OnlyKnownPackages {
        async fn acquire(&self, package: &str) -> Result<Arc<dyn Provider>, RegistryError> {
            if package == "pkg" {
                Ok(Arc::new(EchoProvider))
            } else {
                Err(RegistryError::Unavailable {
                    package: package.to_string(),
                })
            }
        }
    }

    #[tokio::test]
    async fn resolves_and_caches_known_package() {
        let registry = ProviderRegistry::new(Arc::new(OnlyKnownPackages));
        let ty = ResourceType::new("pkg.X");
        registry.resolve(&ty).await.expect("provider resolves");
        assert_eq!(registry.cached_packages(), vec!["pkg".to_string()]);
    }

    #[tokio::test]
    async fn unknown_package_surfaces_registry_error() {
        let registry = ProviderRegistry::new(Arc::new(OnlyKnownPackages));
        let ty = ResourceType::new("nope.X");
        let err = registry.resolve(&ty).await.unwrap_err();
        assert!(matches!(err, RegistryError::Unavailable { package } if package == "nope"));
    }
}
