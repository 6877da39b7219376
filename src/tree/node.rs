use std::mem;

/// An exclusively-owned subtree, or nothing
///
/// Rotations and deletions move ownership between links; no subtree is ever
/// shared between two links.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single node of the AVL tree
///
/// Stores the ordering key derived from the value at insertion time, the
/// value itself, the owned child subtrees, and the bookkeeping fields that
/// the balancing engine maintains on every structural change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K, V> {
    key: K,
    value: V,
    /// 1 + the height of the taller child, or 1 for a leaf
    height: usize,
    /// Number of nodes in this subtree, including this node
    size: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Returns the key of this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of this node
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the stored height of this node's subtree
    ///
    /// Leaves have height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of nodes in this node's subtree (including this
    /// node itself)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn take_left(&mut self) -> Link<K, V> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Link<K, V> {
        self.right.take()
    }

    /// New subtree MUST maintain the BST property relative to this node's key
    pub(crate) fn set_left(&mut self, subtree: Link<K, V>) {
        self.left = subtree;
    }

    /// New subtree MUST maintain the BST property relative to this node's key
    pub(crate) fn set_right(&mut self, subtree: Link<K, V>) {
        self.right = subtree;
    }

    /// Overwrites this node's key and value in place, returning the previous
    /// contents
    ///
    /// Used for two-child deletion, where the in-order successor's contents
    /// take over the slot of the deleted entry. The new key MUST preserve the
    /// BST ordering relative to both subtrees.
    pub(crate) fn write_contents(&mut self, key: K, value: V) -> (K, V) {
        (
            mem::replace(&mut self.key, key),
            mem::replace(&mut self.value, value),
        )
    }

    /// Recomputes this node's height and size from its children
    ///
    /// Must be called after any child reassignment, before the node is used
    /// in further balance computation or returned to a caller. Children are
    /// assumed to already have correct heights (bottom-up fix-up order).
    pub(crate) fn update(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
        self.size = 1 + size(self.left()) + size(self.right());
    }
}

/// Returns the stored height of the given subtree, or 0 if it is absent
pub(crate) fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |node| node.height)
}

/// Returns the number of nodes in the given subtree, or 0 if it is absent
pub(crate) fn size<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |node| node.size)
}

/// Returns the balance factor of the given subtree: the height of its right
/// child minus the height of its left child
///
/// Negative means left-heavy, positive means right-heavy. Absent subtrees
/// have a balance factor of 0.
pub(crate) fn balance_factor<K, V>(node: Option<&Node<K, V>>) -> isize {
    node.map_or(0, |node| {
        height(node.right()) as isize - height(node.left()) as isize
    })
}
