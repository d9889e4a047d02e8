#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! The step-apply executor: walks a finalized [`Plan`] in order,
//! dispatching each step to its resolved provider and halting at the
//! first failure.

use drift_errors::ExecError;
use drift_events::{ProgressObserver, StepKind};
use drift_plan::{Operation, Plan, Step};
use drift_registry::{ProviderRegistry, ResourceState};
use drift_types::Moniker;

/// The result of applying one step.
enum StepOutcome {
    Applied { state: ResourceState },
    Failed { error: ExecError, state: ResourceState },
}

fn invariant(reason: impl Into<String>) -> StepOutcome {
    StepOutcome::Failed {
        error: ExecError::InvariantViolation { reason: reason.into() },
        state: ResourceState::Unknown,
    }
}

fn to_step_kind(operation: Operation) -> StepKind {
    match operation {
        Operation::Create => StepKind::Create,
        Operation::Update => StepKind::Update,
        Operation::Delete => StepKind::Delete,
    }
}

/// Details of the step that halted execution.
#[derive(Debug, Clone)]
pub struct StepFailure {
    pub moniker: Moniker,
    pub operation: Operation,
    pub error: ExecError,
    pub state: ResourceState,
}

/// The outcome of a full (or halted) apply pass over a plan.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    /// Number of steps that completed successfully before halting (or
    /// the full plan length, on success).
    pub applied: usize,
    /// `Some` iff execution halted because a step failed.
    pub failure: Option<StepFailure>,
}

impl ExecutionReport {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

/// Walk `plan`'s step chain in order, applying each step against its
/// resolved provider. Execution halts immediately after the first
/// failing step; steps already applied are not rolled back. `observer`
/// is notified before and after every step, success or failure.
pub async fn apply(plan: &mut Plan, observer: &dyn ProgressObserver) -> ExecutionReport {
    let registry = std::sync::Arc::clone(plan.registry());
    let mut applied = 0;
    let mut current = plan.head_mut();

    while let Some(step) = current {
        let moniker = step.moniker().clone();
        let operation = step.operation();
        let kind = to_step_kind(operation);

        observer.before(&moniker, kind);
        let outcome = apply_step(step, &registry).await;

        match outcome {
            StepOutcome::Applied { state } => {
                observer.after(&moniker, kind, None, state);
                applied += 1;
                current = step.next_mut();
            }
            StepOutcome::Failed { error, state } => {
                observer.after(&moniker, kind, Some(&error), state);
                return ExecutionReport {
                    applied,
                    failure: Some(StepFailure {
                        moniker,
                        operation,
                        error,
                        state,
                    }),
                };
            }
        }
    }

    ExecutionReport { applied, failure: None }
}

async fn apply_step(step: &mut Step, registry: &ProviderRegistry) -> StepOutcome {
    match step.operation() {
        Operation::Create => apply_create(step, registry).await,
        Operation::Update => apply_update(step, registry).await,
        Operation::Delete => apply_delete(step, registry).await,
    }
}

async fn apply_create(step: &mut Step, registry: &ProviderRegistry) -> StepOutcome {
    let Some(new) = step.new() else {
        return invariant("create step is missing its new resource");
    };
    if new.has_id() {
        return invariant(format!("create step for {} already carries an id", new.moniker()));
    }
    let resource_type = new.resource_type().clone();
    let properties = new.properties().clone();

    let provider = match registry.resolve(&resource_type).await {
        Ok(provider) => provider,
        Err(error) => return StepOutcome::Failed { error: error.into(), state: ResourceState::Unknown },
    };

    let outcome = provider.create(&resource_type, &properties).await;
    match outcome.result {
        Ok(id) => {
            step.new_mut()
                .expect("checked above: create step carries a new resource")
                .set_id(id);
            StepOutcome::Applied { state: outcome.state }
        }
        Err(error) => StepOutcome::Failed {
            error: ExecError::ProviderFailure {
                moniker: step.moniker().to_string(),
                message: error.to_string(),
            },
            state: outcome.state,
        },
    }
}

async fn apply_update(step: &mut Step, registry: &ProviderRegistry) -> StepOutcome {
    let (Some(old), Some(new)) = (step.old(), step.new()) else {
        return invariant("update step is missing its old or new resource");
    };
    let Some(id) = old.id().map(str::to_string) else {
        return invariant(format!("update step for {} has no id on its old resource", old.moniker()));
    };
    if old.resource_type() != new.resource_type() {
        return invariant(format!("update step for {} changes resource type", old.moniker()));
    }
    let resource_type = new.resource_type().clone();
    let old_properties = old.properties().clone();
    let new_properties = new.properties().clone();

    let provider = match registry.resolve(&resource_type).await {
        Ok(provider) => provider,
        Err(error) => return StepOutcome::Failed { error: error.into(), state: ResourceState::Unknown },
    };

    let outcome = provider.update(&id, &resource_type, &old_properties, &new_properties).await;
    match outcome.result {
        Ok(replacement_id) => {
            let assigned = replacement_id.unwrap_or(id);
            step.new_mut()
                .expect("checked above: update step carries a new resource")
                .set_id(assigned);
            StepOutcome::Applied { state: outcome.state }
        }
        Err(error) => StepOutcome::Failed {
            error: ExecError::ProviderFailure {
                moniker: step.moniker().to_string(),
                message: error.to_string(),
            },
            state: outcome.state,
        },
    }
}

async fn apply_delete(step: &mut Step, registry: &ProviderRegistry) -> StepOutcome {
    let Some(old) = step.old() else {
        return invariant("delete step is missing its old resource");
    };
    let Some(id) = old.id().map(str::to_string) else {
        return invariant(format!("delete step for {} has no id", old.moniker()));
    };
    let resource_type = old.resource_type().clone();

    let provider = match registry.resolve(&resource_type).await {
        Ok(provider) => provider,
        Err(error) => return StepOutcome::Failed { error: error.into(), state: ResourceState::Unknown },
    };

    let outcome = provider.delete(&id, &resource_type).await;
    match outcome.result {
        Ok(()) => StepOutcome::Applied { state: outcome.state },
        Err(error) => StepOutcome::Failed {
            error: ExecError::ProviderFailure {
                moniker: step.moniker().to_string(),
                message: error.to_string(),
            },
            state: outcome.state,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use drift_registry::{Provider, ProviderFactory, ProviderOutcome};
    use drift_types::{PropertyBag, Resource, ResourceType, Snapshot};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    /// Monotonic-ID in-memory provider, with a per-moniker fault map for
    /// exercising halt-on-error.
    struct DemoProvider {
        next_id: AtomicU64,
        fail_on: Mutex<HashMap<String, String>>,
    }

    impl DemoProvider {
        fn new() -> Self {
            Self {
                next_id: AtomicU64::new(1),
                fail_on: Mutex::new(HashMap::new()),
            }
        }

        fn failing(moniker: &str, reason: &str) -> Self {
            let provider = Self::new();
            provider.fail_on.lock().unwrap().insert(moniker.to_string(), reason.to_string());
            provider
        }
    }

    #[async_trait]
    impl Provider for DemoProvider {
        async fn create(&self, _: &ResourceType, properties: &PropertyBag) -> ProviderOutcome<String> {
            if let Some(drift_types::PropertyValue::String(name)) = properties.get("name") {
                if let Some(reason) = self.fail_on.lock().unwrap().get(name) {
                    return ProviderOutcome::err(reason.clone(), ResourceState::Unknown);
                }
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            ProviderOutcome::ok(format!("id-{id}"), ResourceState::Ok)
        }

        async fn update(
            &self,
            _id: &str,
            _: &ResourceType,
            _old: &PropertyBag,
            new_properties: &PropertyBag,
        ) -> ProviderOutcome<Option<String>> {
            let force_replace = matches!(
                new_properties.get("force_replace"),
                Some(drift_types::PropertyValue::Bool(true))
            );
            if force_replace {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                ProviderOutcome::ok(Some(format!("id-{id}")), ResourceState::Ok)
            } else {
                ProviderOutcome::ok(None, ResourceState::Ok)
            }
        }

        async fn delete(&self, _id: &str, _: &ResourceType) -> ProviderOutcome<()> {
            ProviderOutcome::ok((), ResourceState::Ok)
        }
    }

    struct SingleFactory(Arc<dyn Provider>);

    #[async_trait]
    impl ProviderFactory for SingleFactory {
        async fn acquire(&self, _package: &str) -> Result<Arc<dyn Provider>, drift_errors::RegistryError> {
            Ok(Arc::clone(&self.0))
        }
    }

    fn registry_with(provider: Arc<dyn Provider>) -> Arc<ProviderRegistry> {
        Arc::new(ProviderRegistry::new(Arc::new(SingleFactory(provider))))
    }

    #[tokio::test]
    async fn create_chain_assigns_ids_and_completes() {
        let new = Snapshot::new(vec![
            Resource::desired("a", "demo.Thing", PropertyBag::new().with("name", "a")),
            Resource::desired(
                "b",
                "demo.Thing",
                PropertyBag::new().with("name", "b").with("ref", drift_types::Moniker::new("a")),
            ),
        ]);
        let registry = registry_with(Arc::new(DemoProvider::new()));
        let mut plan = drift_plan::plan(&Snapshot::empty(), &new, registry).unwrap();

        let report = apply(&mut plan, &drift_events::NullObserver).await;
        assert!(report.succeeded());
        assert_eq!(report.applied, 2);
        for step in plan.iter() {
            assert!(step.new().unwrap().has_id());
        }
    }

    #[tokio::test]
    async fn failure_halts_before_dependent_step() {
        let new = Snapshot::new(vec![
            Resource::desired("a", "demo.Thing", PropertyBag::new().with("name", "a")),
            Resource::desired(
                "b",
                "demo.Thing",
                PropertyBag::new().with("name", "b").with("ref", drift_types::Moniker::new("a")),
            ),
        ]);
        let registry = registry_with(Arc::new(DemoProvider::failing("a", "provisioning quota exceeded")));
        let mut plan = drift_plan::plan(&Snapshot::empty(), &new, registry).unwrap();

        let report = apply(&mut plan, &drift_events::NullObserver).await;
        assert!(!report.succeeded());
        assert_eq!(report.applied, 0);
        let failure = report.failure.unwrap();
        assert_eq!(failure.moniker, drift_types::Moniker::new("a"));
    }

    #[tokio::test]
    async fn replacement_update_propagates_new_id() {
        let old = Snapshot::new(vec![Resource::materialized(
            "a",
            "demo.Thing",
            "id-old",
            PropertyBag::new(),
        )]);
        let new = Snapshot::new(vec![Resource::desired(
            "a",
            "demo.Thing",
            PropertyBag::new().with("force_replace", true),
        )]);
        let registry = registry_with(Arc::new(DemoProvider::new()));
        let mut plan = drift_plan::plan(&old, &new, registry).unwrap();

        let report = apply(&mut plan, &drift_events::NullObserver).await;
        assert!(report.succeeded());
        let step = plan.iter().next().unwrap();
        assert_ne!(step.new().unwrap().id(), Some("id-old"));
    }

    #[tokio::test]
    async fn delete_step_requires_no_id_assignment() {
        let old = Snapshot::new(vec![Resource::materialized(
            "a",
            "demo.Thing",
            "id-a",
            PropertyBag::new(),
        )]);
        let registry = registry_with(Arc::new(DemoProvider::new()));
        let mut plan = drift_plan::plan(&old, &Snapshot::empty(), registry).unwrap();

        let report = apply(&mut plan, &drift_events::NullObserver).await;
        assert!(report.succeeded());
        assert_eq!(report.applied, 1);
    }
}
