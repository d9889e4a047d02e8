//! Plan assembly: threading a sequenced change list into a step chain.

use crate::step::{Operation, Step};
use drift_diff::Change;
use drift_registry::ProviderRegistry;
use std::sync::Arc;

/// A finalized, ordered sequence of steps derived from diffing two
/// snapshots, plus the planner context (provider registry) the
/// executor resolves providers against.
///
/// A plan is *empty* iff its head is absent. Once built, the step chain
/// is immutable in shape; only a step's `new` resource may later gain
/// an ID, via [`Step::new_mut`] during execution.
pub struct Plan {
    registry: Arc<ProviderRegistry>,
    head: Option<Box<Step>>,
}

impl Plan {
    pub(crate) fn new(registry: Arc<ProviderRegistry>, head: Option<Box<Step>>) -> Self {
        Self { registry, head }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn head(&self) -> Option<&Step> {
        self.head.as_deref()
    }

    pub fn head_mut(&mut self) -> Option<&mut Step> {
        self.head.as_deref_mut()
    }

    /// The number of steps in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate the chain head-to-tail without consuming the plan.
    #[must_use]
    pub fn iter(&self) -> StepIter<'_> {
        StepIter {
            current: self.head.as_deref(),
        }
    }
}

/// Read-only forward iterator over a plan's step chain.
pub struct StepIter<'a> {
    current: Option<&'a Step>,
}

impl<'a> Iterator for StepIter<'a> {
    type Item = &'a Step;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.current?;
        self.current = step.next();
        Some(step)
    }
}

/// Thread a topologically-sequenced change list into a singly-linked
/// step chain, folding from the tail so each predecessor's `next`
/// points at the subsequent step. The first step becomes the plan's
/// head; after assembly the originating graph has already been
/// discarded by the caller.
#[must_use]
pub fn assemble(order: Vec<Change>, registry: Arc<ProviderRegistry>) -> Plan {
    let mut head: Option<Box<Step>> = None;
    for change in order.into_iter().rev() {
        let (operation, old, new) = match change {
            Change::Create { new, .. } => (Operation::Create, None, Some(new)),
            Change::Update { old, new, .. } => (Operation::Update, Some(old), Some(new)),
            Change::Delete { old, .. } => (Operation::Delete, Some(old), None),
        };
        let mut step = Step::new(operation, old, new);
        step.next = head.take();
        head = Some(Box::new(step));
    }
    Plan::new(registry, head)
}
