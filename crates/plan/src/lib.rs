#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Plan construction for the drift deployment planner: diff, graph,
//! and sequence two snapshots into a finalized, executable [`Plan`].

mod plan;
mod step;

pub use plan::{assemble, Plan, StepIter};
pub use step::{Operation, Step};

use drift_errors::PlanError;
use drift_registry::ProviderRegistry;
use drift_types::Snapshot;
use std::sync::Arc;

/// Diff `old` against `new`, build the dependency graph, sequence it,
/// and assemble the result into a finalized [`Plan`].
///
/// # Errors
///
/// Returns [`PlanError`] if the snapshots disagree on a moniker's type,
/// or if the dependency graph contains a cycle. No partial plan is ever
/// returned: a planning error aborts construction entirely.
pub fn plan(old: &Snapshot, new: &Snapshot, registry: Arc<ProviderRegistry>) -> Result<Plan, PlanError> {
    let diff_result = drift_diff::diff(old, new)?;
    let graph = drift_graph::PlanGraph::build(&diff_result);
    let order = drift_graph::sequence(&graph)?;
    Ok(assemble(order, registry))
}
