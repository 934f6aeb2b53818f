//! # Nomenclature
//!
//! * Traits are adjectives that describe a property
//! * Structs are nouns. They may directly relate to the trait they implement
//!
//! In this module, trees are not traversed automatically but *visited*. Nodes
//! implement the [Visitable] trait, which dispatches on the node's shape, and
//! operations on the tree implement the [Visitor] trait. Whether a visitor
//! descends into the children of a [Fork] is entirely up to the visitor.

pub mod iterator;
pub mod visitable;
pub mod visiting;

pub use iterator::Leaves;
pub use visitable::{Fork, Leaf, Tree, Visitable};
pub use visiting::{Identity, Visitor};
