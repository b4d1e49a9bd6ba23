//! Enumeration of every permutation stored in a tree.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::tree::{PermTree, Rank, Symbol};

impl<S: Symbol> PermTree<S> {
    /// All permutations, sorted lexicographically by the symbols' order.
    ///
    /// The sort normalizes away the construction order, so the result is
    /// the same for any ordering of the same input.
    #[instrument(level = "debug", skip(self), fields(symbols = self.len()))]
    pub fn enumerate_all(&self) -> Vec<Vec<S>> {
        let mut perms = self.construction_order();
        perms.sort();
        perms
    }

    /// All permutations in tree order (left-to-right leaves), unsorted.
    pub fn construction_order(&self) -> Vec<Vec<S>> {
        let mut result = Vec::with_capacity(self.leaf_count_hint());
        let Some(root) = self.root() else {
            return result;
        };

        let mut current = Vec::with_capacity(self.len());
        for &child in &root.children {
            self.collect_paths(child, &mut current, &mut result);
        }
        result
    }

    fn collect_paths(&self, node_idx: Index, current: &mut Vec<S>, result: &mut Vec<Vec<S>>) {
        let Some(node) = self.node(node_idx) else {
            return;
        };
        if let Some(value) = &node.value {
            current.push(value.clone());
        }

        if node.is_leaf() {
            result.push(current.clone());
        } else {
            for &child in &node.children {
                self.collect_paths(child, current, result);
            }
        }

        if node.value.is_some() {
            current.pop();
        }
    }

    /// Permutation at `rank` within `enumerate_all`, materializing every
    /// permutation first. Empty when `rank` is out of range.
    #[instrument(level = "debug", skip(self))]
    pub fn index_rank(&self, rank: Rank) -> Vec<S> {
        let all = self.enumerate_all();
        usize::try_from(rank)
            .ok()
            .and_then(|r| r.checked_sub(1))
            .and_then(|idx| all.into_iter().nth(idx))
            .unwrap_or_default()
    }

    fn leaf_count_hint(&self) -> usize {
        usize::try_from(self.total_permutations()).unwrap_or(0)
    }
}
