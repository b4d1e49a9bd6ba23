//! Tree builder for materializing every permutation of an input sequence.

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::arena::PermArena;
use crate::domain::tree::{PermTree, Symbol};

/// How the builder walks the input while creating nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStrategy {
    /// One call frame per tree level
    #[default]
    Recursive,
    /// Explicit work stack, no call depth proportional to the input
    Iterative,
}

/// Constructs permutation trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    strategy: BuildStrategy,
}

impl TreeBuilder {
    pub fn new(strategy: BuildStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> BuildStrategy {
        self.strategy
    }

    /// Build the tree of all permutations of `elements`.
    ///
    /// An empty input yields a tree without root. Children are appended in
    /// the order their symbols appear in the residual input, so both
    /// strategies produce the same tree.
    #[instrument(level = "debug", skip(self, elements), fields(symbols = elements.len()))]
    pub fn build<S: Symbol>(&self, elements: &[S]) -> PermTree<S> {
        let mut nodes = PermArena::new();
        if !elements.is_empty() {
            let root = nodes.insert_root();
            match self.strategy {
                BuildStrategy::Recursive => Self::build_recursive(&mut nodes, root, elements),
                BuildStrategy::Iterative => Self::build_iterative(&mut nodes, root, elements),
            }
        }
        debug!(
            "built permutation tree: strategy={:?}, symbols={}, nodes={}",
            self.strategy,
            elements.len(),
            nodes.len()
        );
        PermTree::from_parts(nodes, elements.len())
    }

    fn build_recursive<S: Symbol>(nodes: &mut PermArena<S>, node: Index, remaining: &[S]) {
        for (pos, elem) in remaining.iter().enumerate() {
            let child = nodes.insert_child(node, elem.clone());
            Self::build_recursive(nodes, child, &residual(remaining, pos));
        }
    }

    /// non-recursive version of `build_recursive` using an explicit stack.
    fn build_iterative<S: Symbol>(nodes: &mut PermArena<S>, root: Index, elements: &[S]) {
        let mut stack = vec![(root, elements.to_vec())];

        while let Some((node, remaining)) = stack.pop() {
            // All children of `node` are inserted together, keeping sibling order
            for (pos, elem) in remaining.iter().enumerate() {
                let child = nodes.insert_child(node, elem.clone());
                let rest = residual(&remaining, pos);
                if !rest.is_empty() {
                    stack.push((child, rest));
                }
            }
        }
    }
}

/// `remaining` without the element at `pos`, order preserved.
///
/// Removes by position, not by value: equal symbols stay distinct.
fn residual<S: Clone>(remaining: &[S], pos: usize) -> Vec<S> {
    remaining
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pos)
        .map(|(_, e)| e.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_values<S: Symbol>(tree: &PermTree<S>, idx: Index) -> Vec<S> {
        tree.node(idx)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|&c| tree.node(c))
                    .filter_map(|n| n.value.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_residual_removes_only_the_position() {
        assert_eq!(residual(&['a', 'b', 'c'], 1), vec!['a', 'c']);
        assert_eq!(residual(&['a', 'a', 'b'], 0), vec!['a', 'b']);
        assert!(residual(&['a'], 0).is_empty());
    }

    #[test]
    fn given_three_symbols_when_building_then_child_lists_are_residuals() {
        let tree = TreeBuilder::default().build(&['1', '2', '3']);
        let root = tree.root_index().unwrap();
        assert_eq!(child_values(&tree, root), vec!['1', '2', '3']);

        let first_level = tree.node(root).unwrap().children.clone();
        assert_eq!(child_values(&tree, first_level[0]), vec!['2', '3']);
        assert_eq!(child_values(&tree, first_level[1]), vec!['1', '3']);
        assert_eq!(child_values(&tree, first_level[2]), vec!['1', '2']);
    }

    #[test]
    fn given_each_depth_when_counting_children_then_equals_remaining_symbols() {
        let tree = TreeBuilder::default().build(&['a', 'b', 'c', 'd']);
        let root = tree.root_index().unwrap();

        let mut stack = vec![(root, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            let node = tree.node(idx).unwrap();
            assert_eq!(node.children.len(), 4 - depth);
            for &child in &node.children {
                stack.push((child, depth + 1));
            }
        }
    }

    #[test]
    fn given_duplicate_symbols_when_building_then_keeps_full_depth() {
        let tree = TreeBuilder::default().build(&['a', 'a', 'b']);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_count(), 6);
    }

    #[test]
    fn given_iterative_strategy_when_building_then_matches_recursive_shape() {
        let recursive = TreeBuilder::new(BuildStrategy::Recursive).build(&['x', 'y', 'z']);
        let iterative = TreeBuilder::new(BuildStrategy::Iterative).build(&['x', 'y', 'z']);

        assert_eq!(recursive.node_count(), iterative.node_count());
        let rec: Vec<Option<char>> = recursive.nodes().iter().map(|(_, n)| n.value).collect();
        let it: Vec<Option<char>> = iterative.nodes().iter().map(|(_, n)| n.value).collect();
        assert_eq!(rec, it);
    }
}
