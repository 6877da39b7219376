use std::iter::FusedIterator;

use super::node::size;
use super::Node;

/// An in-order traversal of the tree, yielding `(&key, &value)` pairs in
/// ascending key order
///
/// The traversal keeps an explicit stack of the nodes whose left subtrees
/// have already been visited, so no recursion takes place during iteration.
pub struct IterInorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> IterInorder<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let remaining = size(root);

        let mut stack = Vec::new();
        let mut current = root;
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }

        Self {stack, remaining}
    }
}

impl<'a, K, V> Iterator for IterInorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;

        // The next node in key order is the leftmost node of this node's
        // right subtree (or, if there is none, the parent on the stack)
        let mut current = node.right();
        while let Some(right) = current {
            self.stack.push(right);
            current = right.left();
        }

        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Subtree sizes are maintained on every mutation, so the exact
        // number of remaining entries is known up front
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterInorder<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterInorder<'a, K, V> {}
