//! Point-in-time collections of resources

use crate::{Moniker, Resource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An enumerable collection of resources representing a desired or
/// actual state at one point in time.
///
/// Resource order has no semantic effect on planning beyond determinism
/// of topological tie-breaks, which the sequencer derives from moniker
/// order rather than snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    resources: Vec<Resource>,
}

impl Snapshot {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Look up a resource by moniker. `O(n)`; snapshots are typically
    /// indexed once into a `HashMap` by callers that need repeated
    /// lookups (see `drift_diff::index`).
    #[must_use]
    pub fn get(&self, moniker: &Moniker) -> Option<&Resource> {
        self.resources.iter().find(|r| r.moniker() == moniker)
    }

    /// Index this snapshot by moniker for `O(1)` repeated lookups.
    #[must_use]
    pub fn index(&self) -> HashMap<&Moniker, &Resource> {
        self.resources.iter().map(|r| (r.moniker(), r)).collect()
    }
}

impl FromIterator<Resource> for Snapshot {
    fn from_iter<T: IntoIterator<Item = Resource>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Snapshot {
    type Item = Resource;
    type IntoIter = std::vec::IntoIter<Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}
