//! The recursive algorithms behind [`AvlTree`](super::AvlTree)
//!
//! These operate on owned subtree links rather than on the tree facade so
//! that each recursive frame can take its subtree apart, mutate it, and hand
//! back the (possibly different) node that takes its place. Every mutating
//! frame re-derives the height bookkeeping and rebalances as its final step,
//! so the AVL invariant holds again by the time any frame returns.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::node::{balance_factor, Link, Node};

/// Performs a left rotation, returning the node that takes the place of the
/// given node:
///
/// ```text
///    z                 y
///   / \               / \
///  T1  y     ->      z   x
///     / \           / \
///    T2  x         T1  T2
/// ```
///
/// `z`'s height must be recomputed before `y`'s since `y`'s height depends
/// on `z` after the rotation.
///
/// Panics if the node has no right child. That is unreachable through the
/// public API: the rebalance cases only rotate around a child that the
/// balance factor proves is present.
pub(crate) fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut pivot = node
        .take_right()
        .expect("cannot left-rotate a node without a right child");

    node.set_right(pivot.take_left());
    node.update();

    pivot.set_left(Some(node));
    pivot.update();

    pivot
}

/// Performs a right rotation, returning the node that takes the place of the
/// given node. Mirror image of [`rotate_left`].
///
/// Panics if the node has no left child.
pub(crate) fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut pivot = node
        .take_left()
        .expect("cannot right-rotate a node without a left child");

    node.set_left(pivot.take_right());
    node.update();

    pivot.set_right(Some(node));
    pivot.update();

    pivot
}

/// Rebalances the given node if its subtrees differ in height by more than
/// one, returning the node that takes its place
///
/// The node's own height must already be up to date. Dispatches on the
/// balance factor of the node and of the heavier child:
///
/// - left-heavy, left child not right-heavy: LL, single right rotation
/// - left-heavy, left child right-heavy: LR, left-rotate the child first
/// - right-heavy, right child not left-heavy: RR, single left rotation
/// - right-heavy, right child left-heavy: RL, right-rotate the child first
pub(crate) fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let balance = balance_factor(Some(&node));

    if balance < -1 {
        if balance_factor(node.left()) > 0 {
            let left = node
                .take_left()
                .expect("cannot right-rotate a node without a left child");
            node.set_left(Some(rotate_left(left)));
        }
        return rotate_right(node);
    }

    if balance > 1 {
        if balance_factor(node.right()) < 0 {
            let right = node
                .take_right()
                .expect("cannot left-rotate a node without a right child");
            node.set_right(Some(rotate_right(right)));
        }
        return rotate_left(node);
    }

    node
}

/// Inserts the given key and value into the subtree, returning the node that
/// takes the subtree's place and whether a new node was created
///
/// Keys are unique: inserting a key that is already present leaves the
/// subtree untouched (the previously stored value wins) and reports `false`.
pub(crate) fn insert<K: Ord, V>(key: K, value: V, node: Link<K, V>) -> (Box<Node<K, V>>, bool) {
    let mut node = match node {
        Some(node) => node,
        None => return (Box::new(Node::new(key, value)), true),
    };

    let inserted = match key.cmp(node.key()) {
        Ordering::Equal => return (node, false),

        Ordering::Less => {
            let (left, inserted) = insert(key, value, node.take_left());
            node.set_left(Some(left));
            inserted
        },

        Ordering::Greater => {
            let (right, inserted) = insert(key, value, node.take_right());
            node.set_right(Some(right));
            inserted
        },
    };

    // Nothing below this node changed, so its bookkeeping is still correct
    if !inserted {
        return (node, false);
    }

    node.update();
    (rebalance(node), true)
}

/// Deletes the entry with the given key from the subtree, returning the
/// subtree that takes its place and whether an entry was removed
pub(crate) fn delete<K, V, Q>(key: &Q, node: Link<K, V>) -> (Link<K, V>, bool)
    where K: Borrow<Q> + Ord,
          Q: Ord + ?Sized,
{
    let mut node = match node {
        Some(node) => node,
        None => return (None, false),
    };

    let deleted = match key.cmp(node.key().borrow()) {
        Ordering::Less => {
            let (left, deleted) = delete(key, node.take_left());
            node.set_left(left);
            deleted
        },

        Ordering::Greater => {
            let (right, deleted) = delete(key, node.take_right());
            node.set_right(right);
            deleted
        },

        Ordering::Equal => match (node.take_left(), node.take_right()) {
            // Leaf: the node simply goes away, nothing left to rebalance
            // at this level
            (None, None) => return (None, true),

            // One child: the child splices up into this node's place
            (Some(child), None) | (None, Some(child)) => return (Some(child), true),

            // Two children: the in-order successor (minimum of the right
            // subtree) is unlinked and its contents take over this node's
            // slot. Moving the contents rather than relinking the successor
            // node keeps both subtrees' links intact.
            (Some(left), Some(right)) => {
                let (right, successor) = take_min(right);
                let (key, value) = successor.into_inner();
                node.write_contents(key, value);
                node.set_left(Some(left));
                node.set_right(right);
                true
            },
        },
    };

    if !deleted {
        return (Some(node), false);
    }

    node.update();
    (Some(rebalance(node)), true)
}

/// Unlinks the minimum node of the given subtree, returning the rebalanced
/// remainder and the removed node (as a leaf with no children)
fn take_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.take_left() {
        // This is the minimum; its right subtree (if any) splices up
        None => {
            let rest = node.take_right();
            (rest, node)
        },

        Some(left) => {
            let (left, min) = take_min(left);
            node.set_left(left);
            node.update();
            (Some(rebalance(node)), min)
        },
    }
}

/// Searches the subtree for the node with the given key
pub(crate) fn search<'a, K, V, Q>(node: Option<&'a Node<K, V>>, key: &Q) -> Option<&'a Node<K, V>>
    where K: Borrow<Q> + Ord,
          Q: Ord + ?Sized,
{
    let mut current = node;
    while let Some(node) = current {
        match key.cmp(node.key().borrow()) {
            Ordering::Less => current = node.left(),
            Ordering::Greater => current = node.right(),
            Ordering::Equal => return Some(node),
        }
    }

    None
}

/// Returns the minimum-keyed node of the subtree, or `None` if the subtree
/// is absent
pub(crate) fn min_node<K, V>(node: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
    let mut current = node?;
    while let Some(left) = current.left() {
        current = left;
    }

    Some(current)
}

/// Returns the maximum-keyed node of the subtree, or `None` if the subtree
/// is absent
pub(crate) fn max_node<K, V>(node: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
    let mut current = node?;
    while let Some(right) = current.right() {
        current = right;
    }

    Some(current)
}

/// Applies `f` to every node of the subtree in ascending key order
pub(crate) fn for_each<'a, K, V, F>(node: Option<&'a Node<K, V>>, f: &mut F)
    where F: FnMut(&'a Node<K, V>),
{
    if let Some(node) = node {
        for_each(node.left(), f);
        f(node);
        for_each(node.right(), f);
    }
}

/// Folds the subtree left-to-right (ascending key order)
pub(crate) fn fold_left<'a, K, V, T, F>(node: Option<&'a Node<K, V>>, f: &mut F, seed: T) -> T
    where F: FnMut(T, &'a Node<K, V>) -> T,
{
    match node {
        None => seed,
        Some(node) => {
            let seed = fold_left(node.left(), f, seed);
            let seed = f(seed, node);
            fold_left(node.right(), f, seed)
        },
    }
}

/// Folds the subtree right-to-left (descending key order)
pub(crate) fn fold_right<'a, K, V, T, F>(node: Option<&'a Node<K, V>>, f: &mut F, seed: T) -> T
    where F: FnMut(T, &'a Node<K, V>) -> T,
{
    match node {
        None => seed,
        Some(node) => {
            let seed = fold_right(node.right(), f, seed);
            let seed = f(seed, node);
            fold_right(node.left(), f, seed)
        },
    }
}
