//! An AVL tree: an ordered associative container over key-derived values
//!
//! The tree keeps itself balanced with the classic AVL rotations, so its
//! height stays logarithmic in the number of entries no matter what order
//! the entries arrive in. Each value's ordering key is derived from it by a
//! key-extraction function fixed when the tree is constructed; for trees
//! where the key and value coincide there is [`AvlTree::scalar`] and the
//! [`avl_tree!`] macro.

pub mod tree;

pub use tree::AvlTree;

/// Creates a scalar [`AvlTree`] from a list of values
///
/// Duplicate values are ignored (the tree keeps the first occurrence).
#[macro_export(local_inner_macros)]
macro_rules! avl_tree {
    // trailing comma case
    ($($value:expr,)+) => (avl_tree!($($value),+));

    ( $($value:expr),* ) => {
        {
            let mut _tree = $crate::AvlTree::scalar();
            $(
                let _ = _tree.insert($value);
            )*
            _tree
        }
    };
}
