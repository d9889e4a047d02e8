//! Topological sequencing of the plan graph, via Kahn's algorithm with
//! a deterministic tie-break.

use crate::PlanGraph;
use drift_errors::GraphError;
use drift_diff::Change;
use drift_types::Moniker;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Produce a total order over `graph`'s vertices such that every
/// vertex's prerequisites appear before it.
///
/// Among vertices with no remaining prerequisites, ties break on
/// moniker lexicographic order, so planning is reproducible across runs
/// given identical inputs.
///
/// # Errors
///
/// Returns [`GraphError::CycleDetected`] naming every vertex that could
/// not be scheduled, if the graph is not a DAG.
pub fn sequence(graph: &PlanGraph) -> Result<Vec<Change>, GraphError> {
    let mut in_degree: BTreeMap<Moniker, usize> = graph
        .prerequisites()
        .iter()
        .map(|(m, prereqs)| (m.clone(), prereqs.len()))
        .collect();

    // dependents_of[y] = every x with y as a prerequisite.
    let mut dependents_of: HashMap<Moniker, Vec<Moniker>> = HashMap::new();
    for (m, prereqs) in graph.prerequisites() {
        for prereq in prereqs {
            dependents_of.entry(prereq.clone()).or_default().push(m.clone());
        }
    }

    let mut ready: BTreeSet<Moniker> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(m, _)| m.clone())
        .collect();

    let mut order = Vec::with_capacity(graph.len());

    while let Some(moniker) = ready.iter().next().cloned() {
        ready.remove(&moniker);
        in_degree.remove(&moniker);
        order.push(
            graph
                .change(&moniker)
                .expect("moniker drawn from the graph's own vertex set")
                .clone(),
        );

        if let Some(dependents) = dependents_of.get(&moniker) {
            for dependent in dependents {
                if let Some(degree) = in_degree.get_mut(dependent) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(dependent.clone());
                    }
                }
            }
        }
    }

    if order.len() != graph.len() {
        let mut stuck: Vec<String> = in_degree.keys().map(Moniker::to_string).collect();
        stuck.sort();
        return Err(GraphError::CycleDetected { monikers: stuck });
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_diff::diff;
    use drift_types::{PropertyBag, Resource, Snapshot};

    #[test]
    fn pure_create_chain_orders_referent_first() {
        let new = Snapshot::new(vec![
            Resource::desired(
                "b",
                "pkg.X",
                PropertyBag::new().with("ref", Moniker::new("a")),
            ),
            Resource::desired("a", "pkg.X", PropertyBag::new()),
        ]);
        let diff_result = diff(&Snapshot::empty(), &new).unwrap();
        let graph = PlanGraph::build(&diff_result);
        let order = sequence(&graph).unwrap();

        let monikers: Vec<_> = order.iter().map(|c| c.moniker().to_string()).collect();
        assert_eq!(monikers, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn pure_delete_chain_orders_dependent_first() {
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
        let order = sequence(&graph).unwrap();

        let monikers: Vec<_> = order.iter().map(|c| c.moniker().to_string()).collect();
        assert_eq!(monikers, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn cycle_is_rejected_naming_members() {
        let new = Snapshot::new(vec![
            Resource::desired(
                "a",
                "pkg.X",
                PropertyBag::new().with("ref", Moniker::new("b")),
            ),
            Resource::desired(
                "b",
                "pkg.X",
                PropertyBag::new().with("ref", Moniker::new("a")),
            ),
        ]);
        let diff_result = diff(&Snapshot::empty(), &new).unwrap();
        let graph = PlanGraph::build(&diff_result);
        let err = sequence(&graph).unwrap_err();
        match err {
            GraphError::CycleDetected { monikers } => {
                assert_eq!(monikers, vec!["a".to_string(), "b".to_string()]);
            }
            #[allow(unreachable_patterns)]
            _ => panic!("unexpected error variant"),
        }
    }

    #[test]
    fn ties_break_lexicographically() {
        let new = Snapshot::new(vec![
            Resource::desired("z", "pkg.X", PropertyBag::new()),
            Resource::desired("m", "pkg.X", PropertyBag::new()),
            Resource::desired("a", "pkg.X", PropertyBag::new()),
        ]);
        let diff_result = diff(&Snapshot::empty(), &new).unwrap();
        let graph = PlanGraph::build(&diff_result);
        let order = sequence(&graph).unwrap();

        let monikers: Vec<_> = order.iter().map(|c| c.moniker().to_string()).collect();
        assert_eq!(monikers, vec!["a".to_string(), "m".to_string(), "z".to_string()]);
    }
}
