//! Domain event payloads aggregated under [`AppEvent`]

use serde::{Deserialize, Serialize};

/// The provider operation a step event reports on. Mirrors
/// `drift_plan::Operation` without introducing a dependency on the
/// planning crate, which would otherwise cycle back through the
/// executor into events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Create,
    Update,
    Delete,
}

/// General, domain-agnostic events: debug/warning/error log lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GeneralEvent {
    Debug { message: String },
    Warning { message: String },
    Error { message: String },
}

/// Top-of-plan lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlanEvent {
    /// A plan finished assembling; reports the change mix by kind.
    Started { create: usize, update: usize, delete: usize },
    /// Every step in the plan executed successfully.
    Completed { step_count: usize },
    /// Planning itself failed (diff or graph error) before any step ran.
    Failed { message: String },
}

/// Per-step execution events, emitted by the executor around each
/// provider call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StepEvent {
    Started { moniker: String, kind: StepKind },
    Succeeded { moniker: String, kind: StepKind },
    Failed { moniker: String, kind: StepKind, message: String },
}

/// Provider registry resolution events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProviderEvent {
    Resolved { package: String },
    AcquisitionFailed { package: String, reason: String },
}

/// Every event the drift system emits, grouped by domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "payload", rename_all = "snake_case")]
pub enum AppEvent {
    General(GeneralEvent),
    Plan(PlanEvent),
    Step(StepEvent),
    Provider(ProviderEvent),
}

impl AppEvent {
    /// The tracing log level this event should be recorded at.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        use tracing::Level;
        match self {
            AppEvent::General(GeneralEvent::Error { .. })
            | AppEvent::Plan(PlanEvent::Failed { .. })
            | AppEvent::Step(StepEvent::Failed { .. })
            | AppEvent::Provider(ProviderEvent::AcquisitionFailed { .. }) => Level::ERROR,
            AppEvent::General(GeneralEvent::Warning { .. }) => Level::WARN,
            AppEvent::General(GeneralEvent::Debug { .. }) => Level::DEBUG,
            AppEvent::Plan(_) | AppEvent::Step(_) | AppEvent::Provider(_) => Level::INFO,
        }
    }
}
