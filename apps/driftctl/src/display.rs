//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use drift_exec::ExecutionReport;
use drift_plan::{Operation, Plan};
use serde::Serialize;
use serde_json::json;

/// Renders a [`Plan`] or [`ExecutionReport`] either as a human-readable
/// table or as JSON, depending on `--json`.
pub struct OutputRenderer {
    json_output: bool,
}

#[derive(Serialize)]
struct StepSummary {
    moniker: String,
    operation: &'static str,
    resource_type: String,
}

impl OutputRenderer {
    #[must_use]
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render a dry-run plan: the ordered step list, no execution.
    pub fn render_plan(&self, plan: &Plan) {
        let summaries: Vec<StepSummary> = plan.iter().map(step_summary).collect();

        if self.json_output {
            let payload = json!({ "steps": summaries, "empty": plan.is_empty() });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
            return;
        }

        if plan.is_empty() {
            println!("No changes. Old and new snapshots agree.");
            return;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Operation").add_attribute(Attribute::Bold),
            Cell::new("Moniker").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
        ]);

        for (index, step) in summaries.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                operation_cell(step.operation),
                Cell::new(&step.moniker),
                Cell::new(&step.resource_type),
            ]);
        }

        println!("{table}");
        println!("{} step(s) planned.", summaries.len());
    }

    /// Render the outcome of an apply pass: what ran, and the failure
    /// details if execution halted.
    pub fn render_report(&self, plan: &Plan, report: &ExecutionReport) {
        if self.json_output {
            let steps: Vec<StepSummary> = plan.iter().map(step_summary).collect();
            let payload = json!({
                "applied": report.applied,
                "total": steps.len(),
                "succeeded": report.succeeded(),
                "failure": report.failure.as_ref().map(|f| json!({
                    "moniker": f.moniker.to_string(),
                    "operation": operation_name(f.operation),
                    "error": f.error.to_string(),
                    "state": f.state.to_string(),
                })),
            });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
            return;
        }

        if report.succeeded() {
            println!("Applied {} step(s) successfully.", report.applied);
        } else if let Some(failure) = &report.failure {
            println!(
                "Halted after {} step(s): {} failed on {} ({})",
                report.applied, failure.error, failure.moniker, failure.state
            );
        }
    }
}

fn step_summary(step: &drift_plan::Step) -> StepSummary {
    let resource = step.new().or(step.old()).expect("a step always carries a resource");
    StepSummary {
        moniker: step.moniker().to_string(),
        operation: operation_name(step.operation()),
        resource_type: resource.resource_type().to_string(),
    }
}

fn operation_name(operation: Operation) -> &'static str {
    match operation {
        Operation::Create => "create",
        Operation::Update => "update",
        Operation::Delete => "delete",
    }
}

fn operation_cell(operation: &'static str) -> Cell {
    let color = match operation {
        "create" => Color::Green,
        "update" => Color::Yellow,
        "delete" => Color::Red,
        _ => Color::White,
    };
    Cell::new(operation).fg(color)
}
