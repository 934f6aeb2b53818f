//! The visitor capability and its neutral implementation

use super::{Fork, Leaf};
use crate::VisitResult;
use std::rc::Rc;

/// An operation on a tree, dispatched on the shape of the node it is applied to.
///
/// Both methods default to doing nothing, i.e., to the behavior of [Identity].
/// A visitor that only cares about leaves implements `visit_leaf` and nothing
/// else. Neither method descends into children on its own; a visitor that
/// should reach every leaf has to call `accept` on `fork.left` and `fork.right`
/// itself.
///
/// Visitors take `&self`. They may hold configuration (combinators hold their
/// constituents) but no reference to the tree they are applied to, so one
/// instance can be reused for any number of trees.
pub trait Visitor {
    fn visit_leaf(&self, _leaf: &mut Leaf) -> VisitResult {
        Ok(())
    }

    fn visit_fork(&self, _fork: &mut Fork) -> VisitResult {
        Ok(())
    }
}

/// Does nothing and never fails.
///
/// Neutral element of [Sequence](crate::Sequence) on both sides, but a *left zero*
/// of [Choice](crate::Choice): `Choice(Identity, v)` never gets to `v`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Visitor for Identity {}

impl<V: Visitor + ?Sized> Visitor for &V {
    fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
        (**self).visit_leaf(leaf)
    }

    fn visit_fork(&self, fork: &mut Fork) -> VisitResult {
        (**self).visit_fork(fork)
    }
}

impl<V: Visitor + ?Sized> Visitor for Box<V> {
    fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
        (**self).visit_leaf(leaf)
    }

    fn visit_fork(&self, fork: &mut Fork) -> VisitResult {
        (**self).visit_fork(fork)
    }
}

impl<V: Visitor + ?Sized> Visitor for Rc<V> {
    fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
        (**self).visit_leaf(leaf)
    }

    fn visit_fork(&self, fork: &mut Fork) -> VisitResult {
        (**self).visit_fork(fork)
    }
}
