//! Backtracking over a single node: [Fail], [Choice] and [Try]

use crate::{Fork, Identity, Leaf, VisitError, VisitFailure, VisitResult, Visitable, Visitor};
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Always raises the failure signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fail;

impl Fail {
    fn raise(&self) -> VisitResult {
        trace!("Fail raised the failure signal");
        Err(VisitFailure::new("Fail").into())
    }
}

impl Visitor for Fail {
    fn visit_leaf(&self, _leaf: &mut Leaf) -> VisitResult {
        self.raise()
    }

    fn visit_fork(&self, _fork: &mut Fork) -> VisitResult {
        self.raise()
    }
}

/// Applies `first`; only if that raises the failure signal, applies `then` instead.
///
/// | `first` returns   | result                         |
/// |-------------------|--------------------------------|
/// | `Ok`              | `Ok`, `then` is never applied  |
/// | failure signal    | whatever `then` returns        |
/// | fault             | the fault, `then` is not tried |
///
/// Mutations `first` made before failing are not rolled back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choice<A, B> {
    pub first: A,
    pub then: B,
}

/// Applies a visitor where it applies and leaves the node alone where it does not
pub type Try<V> = Choice<V, Identity>;

impl<A, B> Choice<A, B>
where
    A: Visitor,
    B: Visitor,
{
    pub fn new(first: A, then: B) -> Self {
        Choice { first, then }
    }

    #[instrument(level = "trace", name = "choice", skip_all)]
    fn apply<N: Visitable + ?Sized>(&self, node: &mut N) -> VisitResult {
        match node.accept(&self.first) {
            Err(VisitError::Failure(failure)) => {
                debug!(%failure, "first alternative does not apply, trying the second");
                node.accept(&self.then)
            }
            Err(fault) => {
                trace!(%fault, "propagating fault from first alternative");
                Err(fault)
            }
            Ok(()) => Ok(()),
        }
    }
}

impl<V: Visitor> Choice<V, Identity> {
    /// `Try(v)`, i.e., `Choice(v, Identity)`. Never raises the failure signal.
    pub fn optional(visitor: V) -> Try<V> {
        Choice::new(visitor, Identity)
    }
}

impl<A, B> Visitor for Choice<A, B>
where
    A: Visitor,
    B: Visitor,
{
    fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
        self.apply(leaf)
    }

    fn visit_fork(&self, fork: &mut Fork) -> VisitResult {
        self.apply(fork)
    }
}
