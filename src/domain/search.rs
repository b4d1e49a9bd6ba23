//! Tree-guided rank search using subtree sizes.

use generational_arena::Index;
use tracing::{instrument, trace};

use crate::domain::tree::{PermTree, Rank, Symbol};

/// Outcome of probing one subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Probe {
    found: bool,
    /// Leaves under the probed node, reported whether or not it matched
    subtree_size: u64,
}

impl<S: Symbol> PermTree<S> {
    /// Permutation at `rank`, found by walking down the tree.
    ///
    /// At each level whole sibling subtrees are skipped by their size until
    /// the one holding the target is reached, so only the matching path is
    /// materialized. Ranks follow construction order, like `decode_rank`.
    ///
    /// Empty when the tree is empty or `rank` is out of range.
    #[instrument(level = "debug", skip(self))]
    pub fn search_rank(&self, rank: Rank) -> Vec<S> {
        let (Some(offset), Some(root)) = (self.rank_offset(rank), self.root_index()) else {
            return Vec::new();
        };

        let mut path = Vec::with_capacity(self.len());
        let probe = self.probe(root, 0, offset + 1, &mut path);
        if probe.found {
            path
        } else {
            Vec::new()
        }
    }

    /// `remaining` is the 1-based position of the target inside this subtree.
    fn probe(&self, node_idx: Index, depth: usize, remaining: u64, path: &mut Vec<S>) -> Probe {
        let Some(node) = self.node(node_idx) else {
            return Probe {
                found: false,
                subtree_size: 0,
            };
        };

        if node.is_leaf() {
            return Probe {
                found: remaining == 1,
                subtree_size: 1,
            };
        }

        let subtree_size = self.subtree_size(depth);
        let child_size = self.subtree_size(depth + 1);
        let mut remaining = remaining;

        for &child_idx in &node.children {
            if remaining > child_size {
                remaining -= child_size;
                continue;
            }
            let Some(value) = self.node(child_idx).and_then(|c| c.value.clone()) else {
                continue;
            };

            path.push(value);
            let child = self.probe(child_idx, depth + 1, remaining, path);
            if child.found {
                return Probe {
                    found: true,
                    subtree_size,
                };
            }

            // Miss: roll back and keep consuming the offset
            trace!("search backtrack at depth={}", depth + 1);
            path.pop();
            remaining = remaining.saturating_sub(child.subtree_size);
            if remaining == 0 {
                break;
            }
        }

        Probe {
            found: false,
            subtree_size,
        }
    }
}
