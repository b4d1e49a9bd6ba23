//! The built, read-only permutation tree.

use std::fmt;

use generational_arena::Index;

use crate::domain::arena::{PermArena, PermNode};
use crate::domain::builder::{BuildStrategy, TreeBuilder};

/// Values a permutation tree can hold.
pub trait Symbol: Clone + Ord + fmt::Debug {}

impl<T: Clone + Ord + fmt::Debug> Symbol for T {}

/// 1-based position of a permutation within n! permutations.
pub type Rank = i64;

/// n! computed iteratively, saturating at `u64::MAX` from n = 21 on.
pub fn factorial(n: usize) -> u64 {
    (2..=n as u64).fold(1u64, |acc, i| acc.saturating_mul(i))
}

/// Tree of all permutations of an input sequence.
///
/// The sentinel root has one child per input symbol; every root-to-leaf
/// path spells one permutation. The tree is immutable once built.
#[derive(Debug)]
pub struct PermTree<S> {
    nodes: PermArena<S>,
    symbols: usize,
    total_permutations: u64,
    /// `subtree_sizes[d]` is the leaf count below any node at depth `d`
    subtree_sizes: Vec<u64>,
}

impl<S: Symbol> PermTree<S> {
    /// Builds the tree recursively.
    pub fn new(elements: &[S]) -> Self {
        TreeBuilder::new(BuildStrategy::Recursive).build(elements)
    }

    pub fn with_strategy(elements: &[S], strategy: BuildStrategy) -> Self {
        TreeBuilder::new(strategy).build(elements)
    }
}

impl<S> PermTree<S> {
    pub(crate) fn from_parts(nodes: PermArena<S>, symbols: usize) -> Self {
        let (total_permutations, subtree_sizes) = if symbols == 0 {
            (0, Vec::new())
        } else {
            (
                factorial(symbols),
                (0..=symbols).map(|d| factorial(symbols - d)).collect(),
            )
        };
        Self {
            nodes,
            symbols,
            total_permutations,
            subtree_sizes,
        }
    }

    /// Number of input symbols.
    pub fn len(&self) -> usize {
        self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.root().is_none()
    }

    /// n!, or 0 for an empty tree.
    pub fn total_permutations(&self) -> u64 {
        self.total_permutations
    }

    /// Leaves below a node at `depth`, or 0 past the leaves.
    pub fn subtree_size(&self, depth: usize) -> u64 {
        self.subtree_sizes.get(depth).copied().unwrap_or(0)
    }

    pub fn root(&self) -> Option<&PermNode<S>> {
        self.nodes.root().and_then(|idx| self.nodes.get_node(idx))
    }

    pub(crate) fn root_index(&self) -> Option<Index> {
        self.nodes.root()
    }

    pub(crate) fn node(&self, idx: Index) -> Option<&PermNode<S>> {
        self.nodes.get_node(idx)
    }

    /// Read-only view of the node storage.
    pub fn nodes(&self) -> &PermArena<S> {
        &self.nodes
    }

    /// Symbols held by the root's children, in construction order.
    pub fn root_symbols(&self) -> Vec<&S> {
        self.root()
            .map(|root| {
                root.children
                    .iter()
                    .filter_map(|&child| self.nodes.get_node(child))
                    .filter_map(|node| node.value.as_ref())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nodes stored, sentinel included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        self.nodes.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.leaf_count()
    }
}
