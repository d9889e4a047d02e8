#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for the drift deployment planner.
//!
//! All progress visibility goes through [`AppEvent`]s and the
//! [`ProgressObserver`] contract the executor drives — no direct
//! logging or printing happens outside the CLI harness.

mod events;
mod observer;

pub use events::{AppEvent, GeneralEvent, PlanEvent, ProviderEvent, StepEvent, StepKind};
pub use observer::{ChannelObserver, NullObserver, ProgressObserver};

use tokio::sync::mpsc::UnboundedSender;

pub type EventSender = UnboundedSender<AppEvent>;
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<AppEvent>;

/// Create a new unbounded event channel.
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// Single, consistent API for emitting events, regardless of whether the
/// implementor holds a raw [`EventSender`] or wraps one in a larger struct.
pub trait EventEmitter {
    fn event_sender(&self) -> Option<&EventSender>;

    fn emit(&self, event: AppEvent) {
        if let Some(sender) = self.event_sender() {
            let _ = sender.send(event);
        }
    }

    fn emit_debug(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::Debug {
            message: message.into(),
        }));
    }

    fn emit_warning(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::Warning {
            message: message.into(),
        }));
    }

    fn emit_error(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::Error {
            message: message.into(),
        }));
    }

    fn emit_plan_started(&self, create: usize, update: usize, delete: usize) {
        self.emit(AppEvent::Plan(PlanEvent::Started { create, update, delete }));
    }

    fn emit_plan_completed(&self, step_count: usize) {
        self.emit(AppEvent::Plan(PlanEvent::Completed { step_count }));
    }

    fn emit_plan_failed(&self, message: impl Into<String>) {
        self.emit(AppEvent::Plan(PlanEvent::Failed {
            message: message.into(),
        }));
    }

    fn emit_step_started(&self, moniker: impl Into<String>, kind: StepKind) {
        self.emit(AppEvent::Step(StepEvent::Started {
            moniker: moniker.into(),
            kind,
        }));
    }

    fn emit_step_succeeded(&self, moniker: impl Into<String>, kind: StepKind) {
        self.emit(AppEvent::Step(StepEvent::Succeeded {
            moniker: moniker.into(),
            kind,
        }));
    }

    fn emit_step_failed(&self, moniker: impl Into<String>, kind: StepKind, message: impl Into<String>) {
        self.emit(AppEvent::Step(StepEvent::Failed {
            moniker: moniker.into(),
            kind,
            message: message.into(),
        }));
    }

    fn emit_provider_resolved(&self, package: impl Into<String>) {
        self.emit(AppEvent::Provider(ProviderEvent::Resolved {
            package: package.into(),
        }));
    }

    fn emit_provider_acquisition_failed(&self, package: impl Into<String>, reason: impl Into<String>) {
        self.emit(AppEvent::Provider(ProviderEvent::AcquisitionFailed {
            package: package.into(),
            reason: reason.into(),
        }));
    }
}

impl EventEmitter for EventSender {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self)
    }
}
