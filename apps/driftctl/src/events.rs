//! Structured logging integration for events
//!
//! Converts domain events into `tracing` records with structured
//! fields, and renders step events to the terminal for human-readable
//! (non-JSON) output.

use console::style;
use drift_events::{AppEvent, GeneralEvent, PlanEvent, ProviderEvent, StepEvent, StepKind};
use tracing::{debug, error, info, warn};

/// Log an `AppEvent` using the tracing infrastructure with structured fields.
pub fn log_event_with_tracing(event: &AppEvent) {
    match event {
        AppEvent::Plan(PlanEvent::Started { create, update, delete }) => {
            info!(target: "driftctl", create, update, delete, "plan assembled");
        }
        AppEvent::Plan(PlanEvent::Completed { step_count }) => {
            info!(target: "driftctl", step_count, "plan applied successfully");
        }
        AppEvent::Plan(PlanEvent::Failed { message }) => {
            error!(target: "driftctl", message = %message, "planning failed");
        }
        AppEvent::Step(StepEvent::Started { moniker, kind }) => {
            debug!(target: "driftctl", moniker = %moniker, kind = ?kind, "step started");
        }
        AppEvent::Step(StepEvent::Succeeded { moniker, kind }) => {
            info!(target: "driftctl", moniker = %moniker, kind = ?kind, "step succeeded");
        }
        AppEvent::Step(StepEvent::Failed { moniker, kind, message }) => {
            error!(target: "driftctl", moniker = %moniker, kind = ?kind, message = %message, "step failed");
        }
        AppEvent::Provider(ProviderEvent::Resolved { package }) => {
            debug!(target: "driftctl", package = %package, "provider resolved");
        }
        AppEvent::Provider(ProviderEvent::AcquisitionFailed { package, reason }) => {
            error!(target: "driftctl", package = %package, reason = %reason, "provider acquisition failed");
        }
        AppEvent::General(GeneralEvent::Debug { message }) => debug!(target: "driftctl", "{message}"),
        AppEvent::General(GeneralEvent::Warning { message }) => warn!(target: "driftctl", "{message}"),
        AppEvent::General(GeneralEvent::Error { message }) => error!(target: "driftctl", "{message}"),
    }
}

/// Renders step events to the terminal as they arrive, in addition to
/// the structured `tracing` record every event also receives.
pub struct EventHandler {
    colors_enabled: bool,
}

impl EventHandler {
    #[must_use]
    pub fn new(colors_enabled: bool) -> Self {
        Self { colors_enabled }
    }

    /// Drain and render every event currently queued on `receiver`
    /// without blocking once it is empty.
    pub fn drain(&self, receiver: &mut drift_events::EventReceiver) {
        while let Ok(event) = receiver.try_recv() {
            log_event_with_tracing(&event);
            self.render(&event);
        }
    }

    fn render(&self, event: &AppEvent) {
        if let AppEvent::Step(step_event) = event {
            let line = match step_event {
                StepEvent::Started { moniker, kind } => {
                    format!("{} {moniker} ({})", self.label("->", Color::Dim), kind_label(*kind))
                }
                StepEvent::Succeeded { moniker, kind } => {
                    format!("{} {moniker} ({})", self.label("ok", Color::Green), kind_label(*kind))
                }
                StepEvent::Failed { moniker, kind, message } => {
                    format!(
                        "{} {moniker} ({}): {message}",
                        self.label("fail", Color::Red),
                        kind_label(*kind)
                    )
                }
            };
            println!("{line}");
        }
    }

    fn label(&self, text: &str, color: Color) -> String {
        if !self.colors_enabled {
            return format!("[{text}]");
        }
        let styled = style(format!("[{text}]"));
        match color {
            Color::Green => styled.green().to_string(),
            Color::Red => styled.red().bold().to_string(),
            Color::Dim => styled.dim().to_string(),
        }
    }
}

enum Color {
    Green,
    Red,
    Dim,
}

fn kind_label(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Create => "create",
        StepKind::Update => "update",
        StepKind::Delete => "delete",
    }
}
