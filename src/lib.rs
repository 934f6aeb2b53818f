//! ## About
//!
//! This crate contains a small algebra of composable visitors over a binary tree
//! (`Node ::= Fork Node Node | Leaf Integer`). Primitive visitors act on a single
//! node; combinators ([Sequence], [Choice], [Fail], [Try]) build bigger
//! traversals out of them, with [Choice] implementing backtracking on the
//! failure signal ([VisitFailure]).
//!
//! Nothing in here walks a tree on its own. A visitor is applied to exactly the
//! node whose `accept` is called, and combinators apply their constituents to
//! that same node. Descending into children is the business of the visitor.
//!
//! ```
//! use visitor_combinators::{Choice, Fork, Leaf, Sequence, Tree, VisitError, VisitResult, Visitable, Visitor};
//!
//! struct Positive;
//! impl Visitor for Positive {
//!     fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
//!         if leaf.value > 0 { Ok(()) } else { Err(VisitError::failure("not positive")) }
//!     }
//!     fn visit_fork(&self, _fork: &mut Fork) -> VisitResult {
//!         Err(VisitError::failure("not a leaf"))
//!     }
//! }
//!
//! struct Double;
//! impl Visitor for Double {
//!     fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
//!         leaf.value *= 2;
//!         Ok(())
//!     }
//! }
//!
//! let double_if_positive = Choice::optional(Sequence::new(Positive, Double));
//!
//! let mut tree = Tree::leaf(21);
//! tree.accept(&double_if_positive).unwrap();
//! assert_eq!(tree, Tree::leaf(42));
//!
//! let mut tree = Tree::leaf(-1);
//! tree.accept(&double_if_positive).unwrap();
//! assert_eq!(tree, Tree::leaf(-1));
//! ```
//!
//! ## Reading list
//!
//! * Joost Visser, *Visitor Combination and Traversal Control*, OOPSLA 2001
//!
//! ## Naming conventions
//! * Traits – adjectives for capabilities ([Visitable]) or agent nouns for operations ([Visitor])
//! * Structs – the combinator or primitive they implement, named after the algebra ([Sequence], [Choice])
//! * Constructors that configure a general combinator are named after the result (`twice`, `optional`)

pub mod combinators;
pub mod errors;
#[cfg(feature = "samples")]
pub mod samples;
pub mod tree;

pub use combinators::{Choice, Fail, Sequence, Try, Twice};
pub use errors::{is_visit_failure, VisitError, VisitFailure, VisitResult};
pub use tree::{Fork, Identity, Leaf, Leaves, Tree, Visitable, Visitor};
