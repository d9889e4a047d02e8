//! Dependency graph and topological sequencer error types

use thiserror::Error;

/// Errors raised while building or sequencing the plan graph.
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum GraphError {
    /// The dependency graph is not a DAG; names every vertex on a detected cycle.
    #[error("cyclic dependency detected among: {}", monikers.join(", "))]
    CycleDetected { monikers: Vec<String> },
}
