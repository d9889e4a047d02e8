//! The executable plan artifact: a finalized, singly-linked step chain.

use drift_types::Resource;

/// The provider operation a [`Step`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

/// One planned operation on one resource.
///
/// Constructed during planning and never mutated after the plan is
/// finalized, with one exception: the executor assigns a provider's
/// returned ID onto `new`'s [`Resource`] once the step succeeds (see
/// [`Step::new_mut`]). Progress observers only ever see a shared
/// reference, so nothing outside the executor can reach that mutator.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    operation: Operation,
    old: Option<Resource>,
    new: Option<Resource>,
    pub(crate) next: Option<Box<Step>>,
}

impl Step {
    pub(crate) fn new(operation: Operation, old: Option<Resource>, new: Option<Resource>) -> Self {
        Self {
            operation,
            old,
            new,
            next: None,
        }
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn old(&self) -> Option<&Resource> {
        self.old.as_ref()
    }

    #[must_use]
    pub fn new(&self) -> Option<&Resource> {
        self.new.as_ref()
    }

    /// Mutable access to the step's `new` resource, used by the executor
    /// to record a provider-assigned or replacement ID after a
    /// successful create or update.
    pub fn new_mut(&mut self) -> Option<&mut Resource> {
        self.new.as_mut()
    }

    #[must_use]
    pub fn next(&self) -> Option<&Step> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut Step> {
        self.next.as_deref_mut()
    }

    /// The moniker this step operates on, drawn from whichever side of
    /// the change is present (both are present for update).
    #[must_use]
    pub fn moniker(&self) -> &drift_types::Moniker {
        self.new
            .as_ref()
            .or(self.old.as_ref())
            .expect("a step always carries at least one resource")
            .moniker()
    }
}
