//! The binary tree and its double-dispatch entry point

use super::{Leaves, Visitor};
use crate::VisitResult;
use core::fmt;
use itertools::Itertools;
use std::mem;

/// Something a [Visitor] can be applied to.
///
/// `accept` calls exactly one method of the visitor, selected by the concrete
/// shape of the node, and does nothing else. Combinators rely on this: they
/// only ever call `accept` again on the node they were handed.
pub trait Visitable {
    fn accept<V: Visitor + ?Sized>(&mut self, visitor: &V) -> VisitResult;
}

/// A leaf carrying an integer that visitors may change in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub value: i64,
}

impl Leaf {
    pub fn new(value: i64) -> Self {
        Leaf { value }
    }
}

impl Visitable for Leaf {
    fn accept<V: Visitor + ?Sized>(&mut self, visitor: &V) -> VisitResult {
        visitor.visit_leaf(self)
    }
}

/// An inner node. Owns both of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fork {
    pub left: Box<Tree>,
    pub right: Box<Tree>,
}

impl Fork {
    pub fn new(left: Tree, right: Tree) -> Self {
        Fork {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Moves a fork child onto `stack`, leaving a leaf in its place
fn detach(child: &mut Box<Tree>, stack: &mut Vec<Box<Tree>>) {
    if !child.is_leaf() {
        stack.push(mem::replace(child, Box::new(Tree::leaf(0))));
    }
}

// Deep trees would overflow the stack with the compiler generated, recursive drop
impl Drop for Fork {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach(&mut self.left, &mut stack);
        detach(&mut self.right, &mut stack);
        while let Some(mut node) = stack.pop() {
            if let Tree::Fork(fork) = &mut *node {
                detach(&mut fork.left, &mut stack);
                detach(&mut fork.right, &mut stack);
            }
        }
    }
}

impl Visitable for Fork {
    fn accept<V: Visitor + ?Sized>(&mut self, visitor: &V) -> VisitResult {
        visitor.visit_fork(self)
    }
}

/// `Node ::= Fork Node Node | Leaf Integer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    Leaf(Leaf),
    Fork(Fork),
}

impl Tree {
    pub fn leaf(value: i64) -> Self {
        Tree::Leaf(Leaf::new(value))
    }

    pub fn fork(left: Tree, right: Tree) -> Self {
        Tree::Fork(Fork::new(left, right))
    }

    /// Builds a tree whose leaves carry `values` from left to right by pairing
    /// up neighbouring nodes level by level. Returns `None` for no values.
    pub fn balanced(values: impl IntoIterator<Item = i64>) -> Option<Self> {
        let mut level = values.into_iter().map(Tree::leaf).collect_vec();
        while level.len() > 1 {
            level = level
                .into_iter()
                .chunks(2)
                .into_iter()
                .filter_map(|mut pair| {
                    let left = pair.next()?;
                    Some(match pair.next() {
                        Some(right) => Tree::fork(left, right),
                        None => left,
                    })
                })
                .collect_vec();
        }
        level.pop()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Tree::Leaf(leaf) => Some(leaf),
            Tree::Fork(_) => None,
        }
    }

    pub fn as_fork(&self) -> Option<&Fork> {
        match self {
            Tree::Fork(fork) => Some(fork),
            Tree::Leaf(_) => None,
        }
    }

    /// Leaf values, depth-first from left to right
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(self)
    }

    /// Number of nodes (forks and leaves)
    pub fn size(&self) -> usize {
        let mut stack = vec![self];
        let mut size = 0;
        while let Some(node) = stack.pop() {
            size += 1;
            if let Tree::Fork(fork) = node {
                stack.push(&fork.left);
                stack.push(&fork.right);
            }
        }
        size
    }

    /// Length of the longest path from this node to a leaf. A single leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut stack = vec![(self, 0)];
        let mut depth = 0;
        while let Some((node, level)) = stack.pop() {
            match node {
                Tree::Leaf(_) => depth = depth.max(level),
                Tree::Fork(fork) => {
                    stack.push((&*fork.left, level + 1));
                    stack.push((&*fork.right, level + 1));
                }
            }
        }
        depth
    }
}

impl Visitable for Tree {
    fn accept<V: Visitor + ?Sized>(&mut self, visitor: &V) -> VisitResult {
        match self {
            Tree::Leaf(leaf) => leaf.accept(visitor),
            Tree::Fork(fork) => fork.accept(visitor),
        }
    }
}

impl From<Leaf> for Tree {
    fn from(leaf: Leaf) -> Self {
        Tree::Leaf(leaf)
    }
}

impl From<Fork> for Tree {
    fn from(fork: Fork) -> Self {
        Tree::Fork(fork)
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Leaf({})", self.value)
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fork({}, {})", self.left, self.right)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(leaf) => leaf.fmt(f),
            Tree::Fork(fork) => fork.fmt(f),
        }
    }
}
