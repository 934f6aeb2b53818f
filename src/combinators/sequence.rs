//! Running visitors one after another on the same node

use crate::{Fork, Leaf, VisitResult, Visitable, Visitor};
use std::rc::Rc;
use tracing_attributes::instrument;

/// Applies `first` and then `then` to the same node.
///
/// If `first` returns an error of any kind, `then` is not applied and the error
/// is returned as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence<A, B> {
    pub first: A,
    pub then: B,
}

/// The same visitor instance applied twice in a row
pub type Twice<V> = Sequence<Rc<V>, Rc<V>>;

impl<A, B> Sequence<A, B>
where
    A: Visitor,
    B: Visitor,
{
    pub fn new(first: A, then: B) -> Self {
        Sequence { first, then }
    }

    #[instrument(level = "trace", name = "sequence", skip_all)]
    fn apply<N: Visitable + ?Sized>(&self, node: &mut N) -> VisitResult {
        node.accept(&self.first)?;
        node.accept(&self.then)
    }
}

impl<V: Visitor> Sequence<Rc<V>, Rc<V>> {
    /// `Sequence(v, v)`. Both steps share one instance, so a visitor with
    /// internal state sees both applications.
    pub fn twice(visitor: V) -> Twice<V> {
        let visitor = Rc::new(visitor);
        Sequence::new(Rc::clone(&visitor), visitor)
    }
}

impl<A, B> Visitor for Sequence<A, B>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identity, Tree, VisitError};
    use std::cell::{Cell, RefCell};

    /// Appends its tag to a shared log whenever it visits a leaf
    struct Tag<'a> {
        tag: char,
        log: &'a RefCell<String>,
    }

    impl Visitor for Tag<'_> {
        fn visit_leaf(&self, _leaf: &mut Leaf) -> VisitResult {
            self.log.borrow_mut().push(self.tag);
            Ok(())
        }

        fn visit_fork(&self, _fork: &mut Fork) -> VisitResult {
            self.log.borrow_mut().push(self.tag.to_ascii_uppercase());
            Ok(())
        }
    }

    /// Multiplies the leaf by the number of times it has been applied so far
    #[derive(Default)]
    struct Counter {
        count: Cell<i64>,
    }

    impl Visitor for Counter {
        fn visit_leaf(&self, leaf: &mut Leaf) -> VisitResult {
            self.count.set(self.count.get() + 1);
            leaf.value *= self.count.get();
            Ok(())
        }
    }

    #[test_log::test]
    fn test_order() {
        let log = RefCell::new(String::new());
        let tag = |tag| Tag { tag, log: &log };

        let mut tree = Tree::leaf(0);
        tree.accept(&Sequence::new(tag('a'), tag('b'))).unwrap();
        assert_eq!(*log.borrow(), "ab");

        // Shape agnostic, and no descent into the children
        log.borrow_mut().clear();
        let mut tree = Tree::fork(Tree::leaf(0), Tree::leaf(1));
        tree.accept(&Sequence::new(tag('a'), tag('b'))).unwrap();
        assert_eq!(*log.borrow(), "AB");
    }

    #[test_log::test]
    fn test_associativity() {
        let log = RefCell::new(String::new());
        let tag = |tag| Tag { tag, log: &log };

        let mut tree = Tree::leaf(0);
        tree.accept(&Sequence::new(Sequence::new(tag('a'), tag('b')), tag('c')))
            .unwrap();
        tree.accept(&Sequence::new(tag('a'), Sequence::new(tag('b'), tag('c'))))
            .unwrap();
        assert_eq!(*log.borrow(), "abcabc");
    }

    #[test_log::test]
    fn test_identity_is_neutral() {
        let log = RefCell::new(String::new());
        let tag = |tag| Tag { tag, log: &log };

        let mut tree = Tree::leaf(0);
        tree.accept(&Sequence::new(Identity, tag('a'))).unwrap();
        tree.accept(&Sequence::new(tag('b'), Identity)).unwrap();
        assert_eq!(*log.borrow(), "ab");
    }

    #[test_log::test]
    fn test_error_stops_sequence() {
        struct Broken;
        impl Visitor for Broken {
            fn visit_leaf(&self, _leaf: &mut Leaf) -> VisitResult {
                Err(VisitError::fault_message("broken"))
            }
        }

        let log = RefCell::new(String::new());
        let mut tree = Tree::leaf(0);
        let result = tree.accept(&Sequence::new(Broken, Tag { tag: 'a', log: &log }));
        assert!(result.unwrap_err().is_fault());
        assert!(log.borrow().is_empty());
    }

    #[test_log::test]
    fn test_twice_shares_the_instance() {
        let twice = Sequence::twice(Counter::default());

        // 3 * 1 * 2
        let mut tree = Tree::leaf(3);
        tree.accept(&twice).unwrap();
        assert_eq!(tree, Tree::leaf(6));
        assert_eq!(twice.first.count.get(), 2);

        // The combinator can be reused; the state carries over
        let mut tree = Tree::leaf(1);
        tree.accept(&twice).unwrap();
        assert_eq!(tree, Tree::leaf(12));
    }
}
