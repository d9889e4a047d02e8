#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Snapshot diffing: joins an old and a new snapshot on moniker and
//! classifies every resource as a create, update, delete, or noop.

use drift_errors::DiffError;
use drift_types::{Moniker, Resource, Snapshot};
use std::collections::{BTreeSet, HashMap};

/// One classified change between the two snapshots. A moniker classified
/// `noop` (present in both, properties unchanged) emits no [`Change`].
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Create { moniker: Moniker, new: Resource },
    Update { moniker: Moniker, old: Resource, new: Resource },
    Delete { moniker: Moniker, old: Resource },
}

impl Change {
    #[must_use]
    pub fn moniker(&self) -> &Moniker {
        match self {
            Change::Create { moniker, .. }
            | Change::Update { moniker, .. }
            | Change::Delete { moniker, .. } => moniker,
        }
    }
}

/// Result of diffing two snapshots: the emitted changes plus a reverse
/// dependency map over the *old* snapshot, used by the graph builder to
/// order deletes (a dependent must be removed, or stop referencing its
/// target, before the target itself can be deleted).
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub changes: Vec<Change>,
    pub old_dependents: HashMap<Moniker, Vec<Moniker>>,
}

/// Diff `old` against `new`, joining on moniker.
///
/// # Errors
///
/// Returns [`DiffError::TypeMismatch`] if a moniker present in both
/// snapshots names resources of different types.
pub fn diff(old: &Snapshot, new: &Snapshot) -> Result<DiffResult, DiffError> {
    let old_index = old.index();
    let new_index = new.index();

    let mut old_dependents: HashMap<Moniker, Vec<Moniker>> = HashMap::new();
    for resource in old.iter() {
        for referenced in resource.properties().references() {
            old_dependents
                .entry(referenced)
                .or_default()
                .push(resource.moniker().clone());
        }
    }

    let monikers: BTreeSet<&Moniker> = old_index.keys().chain(new_index.keys()).copied().collect();

    let mut changes = Vec::new();
    for moniker in monikers {
        match (old_index.get(moniker), new_index.get(moniker)) {
            (Some(old_res), None) => changes.push(Change::Delete {
                moniker: moniker.clone(),
                old: (*old_res).clone(),
            }),
            (None, Some(new_res)) => changes.push(Change::Create {
                moniker: moniker.clone(),
                new: (*new_res).clone(),
            }),
            (Some(old_res), Some(new_res)) => {
                if old_res.resource_type() != new_res.resource_type() {
                    return Err(DiffError::TypeMismatch {
                        moniker: moniker.to_string(),
                        old_type: old_res.resource_type().to_string(),
                        new_type: new_res.resource_type().to_string(),
                    });
                }
                if old_res.properties() != new_res.properties() {
                    changes.push(Change::Update {
                        moniker: moniker.clone(),
                        old: (*old_res).clone(),
                        new: (*new_res).clone(),
                    });
                }
                // else: noop, no change emitted.
            }
            (None, None) => unreachable!("moniker drawn from the union of both indices"),
        }
    }

    Ok(DiffResult {
        changes,
        old_dependents,
    })
}
