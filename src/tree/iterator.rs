//! An iterator over the leaf values of a tree, depth-first from left to right.

use super::Tree;

/// Depth-first iterator over leaf values. Uses an explicit stack instead of recursion.
pub struct Leaves<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Leaves<'a> {
    pub fn new(root: &'a Tree) -> Self {
        Leaves { stack: vec![root] }
    }
}

impl Iterator for Leaves<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Tree::Leaf(leaf) => return Some(leaf.value),
                Tree::Fork(fork) => {
                    // right first so that the left child is popped next
                    self.stack.push(&fork.right);
                    self.stack.push(&fork.left);
                }
            }
        }
        None
    }
}
