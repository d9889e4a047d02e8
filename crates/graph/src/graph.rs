//! The plan dependency graph: one vertex per emitted step, edges
//! encoding "must be applied before".

use drift_diff::{Change, DiffResult};
use drift_types::Moniker;
use std::collections::{BTreeSet, HashMap};

/// A transient DAG over the changes emitted by the diff engine.
///
/// `prerequisites[m]` holds every moniker that must be applied before
/// `m`. The graph exists only during planning; once the topological
/// sequencer threads it into a step chain it is discarded.
#[derive(Debug, Clone)]
pub struct PlanGraph {
    vertices: HashMap<Moniker, Change>,
    prerequisites: HashMap<Moniker, BTreeSet<Moniker>>,
}

impl PlanGraph {
    /// Build the graph from a diff result.
    ///
    /// Edge rules:
    /// - `create`/`update`: the step depends on every resource its new
    ///   properties reference — the referenced resource must exist first.
    /// - `delete`: the step depends on every resource that, in the old
    ///   snapshot, referenced the resource being deleted — a dependent
    ///   must release its reference before the target can be removed.
    ///
    /// A referenced moniker with no emitted vertex (because it was
    /// classified `noop`, or lies outside either snapshot) contributes
    /// no edge: it is assumed already satisfied. Self-edges are never
    /// added, and duplicate edges collapse naturally into the `BTreeSet`.
    #[must_use]
    pub fn build(diff: &DiffResult) -> Self {
        let vertices: HashMap<Moniker, Change> = diff
            .changes
            .iter()
            .map(|c| (c.moniker().clone(), c.clone()))
            .collect();

        let mut prerequisites: HashMap<Moniker, BTreeSet<Moniker>> =
            vertices.keys().map(|m| (m.clone(), BTreeSet::new())).collect();

        for change in &diff.changes {
            let moniker = change.moniker();
            match change {
                Change::Create { new, .. } | Change::Update { new, .. } => {
                    for referenced in new.properties().references() {
                        if &referenced != moniker && vertices.contains_key(&referenced) {
                            prerequisites.get_mut(moniker).unwrap().insert(referenced);
                        }
                    }
                }
                Change::Delete { .. } => {
                    if let Some(dependents) = diff.old_dependents.get(moniker) {
                        for dependent in dependents {
                            if dependent != moniker && vertices.contains_key(dependent) {
                                prerequisites
                                    .get_mut(moniker)
                                    .unwrap()
                                    .insert(dependent.clone());
                            }
                        }
                    }
                }
            }
        }

        Self {
            vertices,
            prerequisites,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn change(&self, moniker: &Moniker) -> Option<&Change> {
        self.vertices.get(moniker)
    }

    pub(crate) fn vertices(&self) -> &HashMap<Moniker, Change> {
        &self.vertices
    }

    pub(crate) fn prerequisites(&self) -> &HashMap<Moniker, BTreeSet<Moniker>> {
        &self.prerequisites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_diff::diff;
    use drift_types::{PropertyBag, Resource, Snapshot};

    #[test]
    fn create_depends_on_referenced_create() {
        let old = Snapshot::empty();
        let new = Snapshot::new(vec![
            Resource::desired("a", "pkg.X", PropertyBag::new()),
            Resource::desired(
                "b",
                "pkg.X",
                PropertyBag::new().with("ref", Moniker::new("a")),
            ),
        ]);
        let diff_result = diff(&old, &new).unwrap();
        let graph = PlanGraph::build(&diff_result);

        let b_prereqs = graph.prerequisites().get(&Moniker::new("b")).unwrap();
        assert!(b_prereqs.contains(&Moniker::new("a")));
        assert!(graph.prerequisites().get(&Moniker::new("a")).unwrap().is_empty());
    }

    #[test]
    fn delete_depends_on_former_dependent() {
        let old = Snapshot::new(vec![
            Resource::materialized("a", "pkg.X", "id-a", PropertyBag::new()),
            Resource::materialized(
                "b",
                "pkg.X",
                "id-b",
                PropertyBag::new().with("ref", Moniker::new("a")),
            ),
        ]);
        let diff_result = diff(&old, &Snapshot::empty()).unwrap();
        let graph = PlanGraph::build(&diff_result);

        let a_prereqs = graph.prerequisites().get(&Moniker::new("a")).unwrap();
        assert!(a_prereqs.contains(&Moniker::new("b")));
    }

    #[test]
    fn reference_to_noop_resource_adds_no_edge() {
        let old = Snapshot::new(vec![Resource::materialized("a", "pkg.X", "id-a", PropertyBag::new())]);
        let new = Snapshot::new(vec![
            Resource::materialized("a", "pkg.X", "id-a", PropertyBag::new()),
            Resource::desired(
                "b",
                "pkg.X",
                PropertyBag::new().with("ref", Moniker::new("a")),
            ),
        ]);
        let diff_result = diff(&old, &new).unwrap();
        let graph = PlanGraph::build(&diff_result);

        // "a" is noop and has no vertex, so "b" (create) has no prerequisite.
        assert!(graph.change(&Moniker::new("a")).is_none());
        assert!(graph.prerequisites().get(&Moniker::new("b")).unwrap().is_empty());
    }
}
