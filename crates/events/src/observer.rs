//! The executor's progress-reporting contract

use crate::{EventEmitter, EventSender, StepKind};
use drift_errors::ExecError;
use drift_registry::ResourceState;
use drift_types::Moniker;

/// Observes step execution without being able to influence it.
///
/// The executor calls [`ProgressObserver::before`] immediately before
/// dispatching a step to its provider, and [`ProgressObserver::after`]
/// once the call returns, regardless of outcome. Both methods default
/// to no-ops so an observer only implements what it needs. An observer
/// only ever receives shared references to plan data (via its
/// arguments here, never the `Plan`/`Step` themselves), so it
/// structurally cannot mutate the plan it is watching.
pub trait ProgressObserver: Send + Sync {
    fn before(&self, _moniker: &Moniker, _kind: StepKind) {}

    fn after(&self, _moniker: &Moniker, _kind: StepKind, _error: Option<&ExecError>, _state: ResourceState) {}
}

/// An observer that does nothing, used where execution needs no
/// caller-visible progress reporting.
pub struct NullObserver;

impl ProgressObserver for NullObserver {}

/// Forwards every `before`/`after` callback onto an [`AppEvent`] channel
/// as a [`StepEvent`](crate::StepEvent), so a consumer (the CLI harness,
/// a test) can render progress or log it via `tracing` without the
/// executor depending on either concern directly.
pub struct ChannelObserver<'a>(&'a EventSender);

impl<'a> ChannelObserver<'a> {
    #[must_use]
    pub fn new(sender: &'a EventSender) -> Self {
        Self(sender)
    }
}

impl EventEmitter for ChannelObserver<'_> {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self.0)
    }
}

impl ProgressObserver for ChannelObserver<'_> {
    fn before(&self, moniker: &Moniker, kind: StepKind) {
        self.emit_step_started(moniker.to_string(), kind);
    }

    fn after(&self, moniker: &Moniker, kind: StepKind, error: Option<&ExecError>, _state: ResourceState) {
        match error {
            Some(error) => self.emit_step_failed(moniker.to_string(), kind, error.to_string()),
            None => self.emit_step_succeeded(moniker.to_string(), kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{channel, AppEvent, StepEvent};

    #[tokio::test]
    async fn before_emits_started_after_emits_succeeded() {
        let (tx, mut rx) = channel();
        let observer = ChannelObserver::new(&tx);
        let moniker = Moniker::new("a");

        observer.before(&moniker, StepKind::Create);
        observer.after(&moniker, StepKind::Create, None, ResourceState::Ok);

        assert!(matches!(rx.recv().await.unwrap(), AppEvent::Step(StepEvent::Started { .. })));
        assert!(matches!(rx.recv().await.unwrap(), AppEvent::Step(StepEvent::Succeeded { .. })));
    }

    #[tokio::test]
    async fn after_with_error_emits_failed() {
        let (tx, mut rx) = channel();
        let observer = ChannelObserver::new(&tx);
        let moniker = Moniker::new("a");
        let error = ExecError::InvariantViolation { reason: "boom".to_string() };

        observer.after(&moniker, StepKind::Delete, Some(&error), ResourceState::Unknown);

        assert!(matches!(rx.recv().await.unwrap(), AppEvent::Step(StepEvent::Failed { .. })));
    }
}
