use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

mod node;
mod ops;
mod inorder;

pub use node::Node;
pub use inorder::IterInorder;

use node::Link;

/// An AVL tree: a self-balancing binary search tree over key-derived values
///
/// Every value stored in the tree has a key derived from it by the tree's
/// key-extraction function, fixed at construction. Keys are unique within a
/// tree and determine the ordering of all traversals. After every mutating
/// operation the tree satisfies the AVL invariant: the heights of each
/// node's subtrees differ by at most one, which keeps the height (and with
/// it the cost of `search`/`insert`/`delete`) logarithmic in the number of
/// entries.
///
/// For trees where the key and the value coincide, use
/// [`AvlTree::scalar`](AvlTree::scalar).
#[derive(Clone)]
pub struct AvlTree<K, V, F = fn(&V) -> K> {
    root: Link<K, V>,
    get_key: F,
}

impl<K, V, F> fmt::Debug for AvlTree<K, V, F>
    where K: fmt::Debug,
          V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The key-extraction function has no useful representation
        f.debug_struct("AvlTree")
            .field("root", &self.root)
            .finish()
    }
}

impl<K: Ord + Clone> AvlTree<K, K> {
    /// Creates an empty tree whose values are their own keys
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::AvlTree;
    ///
    /// let mut tree = AvlTree::scalar();
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.keys(), [&1, &2]);
    /// ```
    pub fn scalar() -> Self {
        Self::new(K::clone)
    }
}

impl<K: Ord + Clone> Default for AvlTree<K, K> {
    fn default() -> Self {
        Self::scalar()
    }
}

impl<K: Ord, V, F: Fn(&V) -> K> AvlTree<K, V, F> {
    /// Creates an empty tree that orders values by the keys that `get_key`
    /// derives from them
    ///
    /// `get_key` must be pure: it must return the same key every time it is
    /// called with the same value. A non-deterministic key extractor
    /// violates the ordering invariant and the tree's behaviour is
    /// unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::AvlTree;
    ///
    /// struct Player {
    ///     id: u32,
    ///     name: &'static str,
    /// }
    ///
    /// let mut tree = AvlTree::new(|player: &Player| player.id);
    /// tree.insert(Player {id: 2, name: "arthur"});
    /// tree.insert(Player {id: 1, name: "beatrix"});
    ///
    /// assert_eq!(tree.search(&2).map(|player| player.name), Some("arthur"));
    /// assert_eq!(tree.values().iter().map(|p| p.id).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn new(get_key: F) -> Self {
        Self {
            root: None,
            get_key,
        }
    }

    /// Returns the number of entries in the tree
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::AvlTree;
    ///
    /// let mut tree = AvlTree::scalar();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        node::size(self.root.as_deref())
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: the number of nodes on the longest
    /// path from the root to a leaf, or 0 for an empty tree
    ///
    /// The AVL invariant bounds this by roughly `1.44 * log2(len + 2)`.
    ///
    /// Time complexity: `O(1)`
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref())
    }

    /// Returns true if the tree contains an entry for the given key
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key
    /// type.
    ///
    /// Time complexity: `O(log n)`
    pub fn contains<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        ops::search(self.root.as_deref(), key).is_some()
    }

    /// Returns a reference to the value whose derived key equals the given
    /// key, or `None` if no such entry exists
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key
    /// type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::AvlTree;
    ///
    /// let mut tree = AvlTree::scalar();
    /// tree.insert(1);
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&2), None);
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        ops::search(self.root.as_deref(), key).map(Node::value)
    }

    /// Returns a reference to the value with the smallest key, or `None` if
    /// the tree is empty
    ///
    /// Time complexity: `O(log n)`
    pub fn min_value(&self) -> Option<&V> {
        ops::min_node(self.root.as_deref()).map(Node::value)
    }

    /// Returns a reference to the value with the largest key, or `None` if
    /// the tree is empty
    ///
    /// Time complexity: `O(log n)`
    pub fn max_value(&self) -> Option<&V> {
        ops::max_node(self.root.as_deref()).map(Node::value)
    }

    /// Inserts a new value into the tree, keyed by the key derived from it
    ///
    /// Returns true if a new entry was created, or false if the derived key
    /// was already present. A duplicate-key insert leaves the tree
    /// completely unchanged: the previously stored value wins.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::AvlTree;
    ///
    /// let mut tree = AvlTree::scalar();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: V) -> bool {
        let key = (self.get_key)(&value);
        let (root, inserted) = ops::insert(key, value, self.root.take());
        self.root = Some(root);

        inserted
    }

    /// Removes the entry with the given key from the tree
    ///
    /// Returns true if an entry was removed, or false if the key was not
    /// present.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key
    /// type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::AvlTree;
    ///
    /// let mut tree = AvlTree::scalar();
    /// tree.insert(1);
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let (root, deleted) = ops::delete(key, self.root.take());
        self.root = root;

        deleted
    }

    /// Clears the tree, removing all entries
    ///
    /// The key-extraction function is kept.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Applies `f` to every value in the tree, in ascending key order
    pub fn for_each(&self, mut f: impl FnMut(&V)) {
        ops::for_each(self.root.as_deref(), &mut |node| f(node.value()));
    }

    /// Folds every value in the tree into an accumulator, in ascending key
    /// order
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl_tree;
    ///
    /// let tree = avl_tree![3, 1, 2];
    /// let total = tree.fold_left(|acc, value| acc + value, 0);
    /// assert_eq!(total, 6);
    /// ```
    pub fn fold_left<T>(&self, mut f: impl FnMut(T, &V) -> T, seed: T) -> T {
        ops::fold_left(self.root.as_deref(), &mut |acc, node| f(acc, node.value()), seed)
    }

    /// Folds every value in the tree into an accumulator, in descending key
    /// order
    ///
    /// Consumes the values in the exact reverse of [`fold_left`]'s order.
    ///
    /// [`fold_left`]: AvlTree::fold_left
    pub fn fold_right<T>(&self, mut f: impl FnMut(T, &V) -> T, seed: T) -> T {
        ops::fold_right(self.root.as_deref(), &mut |acc, node| f(acc, node.value()), seed)
    }

    /// Returns all keys in the tree in ascending order
    pub fn keys(&self) -> Vec<&K> {
        ops::fold_left(self.root.as_deref(), &mut |mut keys: Vec<&K>, node| {
            keys.push(node.key());
            keys
        }, Vec::new())
    }

    /// Returns all values in the tree in ascending key order
    pub fn values(&self) -> Vec<&V> {
        ops::fold_left(self.root.as_deref(), &mut |mut values: Vec<&V>, node| {
            values.push(node.value());
            values
        }, Vec::new())
    }

    /// Performs an in-order traversal of the tree, yielding `(&key, &value)`
    /// pairs in ascending key order
    pub fn iter_inorder(&self) -> IterInorder<'_, K, V> {
        IterInorder::new(self.root.as_deref())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant for implementing custom traversals.
    /// Only read access is offered: values have their keys derived from
    /// them, so mutating a value in place could invalidate the ordering of
    /// the whole tree.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }
}

impl<K, V, F> PartialEq for AvlTree<K, V, F>
    where K: Ord,
          V: PartialEq,
          F: Fn(&V) -> K,
{
    fn eq(&self, other: &Self) -> bool {
        // Two trees with the same entries may be shaped differently if the
        // entries arrived in a different order, so compare the in-order
        // traversals rather than the structures.
        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|((k1, v1), (k2, v2))| {
            k1.eq(k2) && v1.eq(v2)
        })
    }
}

impl<K, V, F> Eq for AvlTree<K, V, F>
    where K: Ord,
          V: Eq,
          F: Fn(&V) -> K,
{}

impl<K: Ord, V, F: Fn(&V) -> K> Extend<V> for AvlTree<K, V, F> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<K: Ord + Clone> FromIterator<K> for AvlTree<K, K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = Self::scalar();
        tree.extend(iter);

        tree
    }
}
