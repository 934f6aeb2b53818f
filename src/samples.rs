/*! Ready-made visitors, mostly useful for testing and as examples of composing the combinators */

use crate::{Choice, Fork, Leaf, Sequence, Try, Twice, VisitError, VisitResult, Visitor};
use tracing::trace;

/// Adds one to a leaf. Forks are left alone and their children are not visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOne;

impl Visitor for AddOne {
    fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
        leaf.value = leaf
            .value
            .checked_add(1)
            .ok_or_else(|| VisitError::fault_message("AddOne: leaf value overflows"))?;
        Ok(())
    }
}

/// Subtracts one from a leaf
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubtractOne;

impl Visitor for SubtractOne {
    fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
        leaf.value = leaf
            .value
            .checked_sub(1)
            .ok_or_else(|| VisitError::fault_message("SubtractOne: leaf value overflows"))?;
        Ok(())
    }
}

/// Guard that accepts leaves holding zero and rejects everything else with the failure signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsZero;

impl Visitor for IsZero {
    fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
        if leaf.value == 0 {
            Ok(())
        } else {
            trace!(value = leaf.value, "IsZero rejected leaf");
            Err(VisitError::failure(format!("IsZero: leaf value is {}", leaf.value)))
        }
    }

    fn visit_fork(&self, _fork: &mut Fork) -> VisitResult {
        Err(VisitError::failure("IsZero: not a leaf"))
    }
}

pub type AddTwo = Twice<AddOne>;

pub type IfZeroAddOne = Try<Sequence<IsZero, AddOne>>;

/// [AddOne], twice
pub fn add_two() -> AddTwo {
    Sequence::twice(AddOne)
}

/// Adds one to leaves that hold zero and leaves every other node unchanged
pub fn if_zero_add_one() -> IfZeroAddOne {
    Choice::optional(Sequence::new(IsZero, AddOne))
}
