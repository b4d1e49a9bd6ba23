//! # pmtree
//!
//! Materializes every permutation of a sequence as a tree and retrieves a
//! permutation by its 1-based rank in one of three ways:
//!
//! * [`index_rank`]: enumerate all permutations, sort, index;
//! * [`decode_rank`]: factorial number system decoding, no enumeration;
//! * [`search_rank`]: walk the tree, skipping subtrees by their size.
//!
//! Invalid ranks and empty inputs yield an empty permutation.
//!
//! ```
//! let tree = pmtree::build_tree(&['1', '2', '3']);
//! assert_eq!(pmtree::enumerate_all(&tree).len(), 6);
//! assert_eq!(pmtree::decode_rank(&tree, 4), vec!['2', '3', '1']);
//! assert_eq!(pmtree::search_rank(&tree, 4), vec!['2', '3', '1']);
//! assert!(pmtree::decode_rank(&tree, 7).is_empty());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod util;

pub use domain::{BuildStrategy, PermTree, Rank, Symbol};

/// Build the tree of all permutations of `elements`.
pub fn build_tree<S: Symbol>(elements: &[S]) -> PermTree<S> {
    PermTree::new(elements)
}

/// Every permutation, sorted lexicographically.
pub fn enumerate_all<S: Symbol>(tree: &PermTree<S>) -> Vec<Vec<S>> {
    tree.enumerate_all()
}

/// Permutation at `rank` by indexing into [`enumerate_all`].
pub fn index_rank<S: Symbol>(tree: &PermTree<S>, rank: Rank) -> Vec<S> {
    tree.index_rank(rank)
}

/// Permutation at `rank` by factorial number system decoding.
pub fn decode_rank<S: Symbol>(tree: &PermTree<S>, rank: Rank) -> Vec<S> {
    tree.decode_rank(rank)
}

/// Permutation at `rank` by subtree-size guided tree search.
pub fn search_rank<S: Symbol>(tree: &PermTree<S>, rank: Rank) -> Vec<S> {
    tree.search_rank(rank)
}
