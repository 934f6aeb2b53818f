//! Visitors built out of other visitors.
//!
//! A combinator holds its constituents and, when applied to a node, calls
//! `accept` on *that same node* with each of them. It never moves on to the
//! children. The laws the combinators obey:
//!
//! ```text
//! Sequence(Identity, v)           = v
//! Sequence(v, Identity)           = v
//! Sequence(Sequence(a, b), c)     = Sequence(a, Sequence(b, c))
//! Choice(Fail, v)                 = v
//! Choice(v, Fail)                 = v        (if v succeeds or raises the failure signal)
//! Choice(Identity, v)             = Identity
//! ```
//!
//! `Identity` is neutral for `Sequence` but a left zero for `Choice`.

pub mod choice;
pub mod sequence;

pub use choice::{Choice, Fail, Try};
pub use sequence::{Sequence, Twice};
