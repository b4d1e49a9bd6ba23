//! Arena storage for permutation tree nodes.

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Tree node in the arena-based permutation tree.
#[derive(Debug)]
pub struct PermNode<S> {
    /// Symbol held by this node, None for the sentinel root
    pub value: Option<S>,
    /// Indices of child nodes in the arena, in construction order
    pub children: Vec<Index>,
}

impl<S> PermNode<S> {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based tree structure owning every node of one permutation tree.
///
/// Nodes are only ever referenced from their parent's `children`, and there
/// are no back-pointers: traversal is always downward.
#[derive(Debug)]
pub struct PermArena<S> {
    /// Arena storage for all tree nodes
    arena: Arena<PermNode<S>>,
    /// Index of the sentinel root, None for empty trees
    root: Option<Index>,
}

impl<S> Default for PermArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> PermArena<S> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts the payload-less sentinel root and makes it the tree root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self) -> Index {
        let idx = self.arena.insert(PermNode {
            value: None,
            children: Vec::new(),
        });
        self.root = Some(idx);
        idx
    }

    /// Inserts a symbol node and appends it to `parent`'s children.
    pub fn insert_child(&mut self, parent: Index, value: S) -> Index {
        let idx = self.arena.insert(PermNode {
            value: Some(value),
            children: Vec::new(),
        });
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(idx);
        }
        idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&PermNode<S>> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of stored nodes, sentinel included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order, left-to-right walk over every node, sentinel first.
    pub fn iter(&self) -> PreOrderIterator<'_, S> {
        PreOrderIterator::new(self)
    }

    /// Length of the longest root-to-leaf path counted in edges.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        match self.root {
            Some(root) => self.calculate_depth(root),
            None => 0,
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        self.get_node(node_idx)
            .and_then(|node| {
                node.children
                    .iter()
                    .map(|&child| 1 + self.calculate_depth(child))
                    .max()
            })
            .unwrap_or(0)
    }

    /// Counts leaf nodes. A lone sentinel does not count as a leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_count(&self) -> usize {
        self.iter()
            .filter(|(_, node)| node.value.is_some() && node.is_leaf())
            .count()
    }
}

pub struct PreOrderIterator<'a, S> {
    arena: &'a PermArena<S>,
    stack: Vec<Index>,
}

impl<'a, S> PreOrderIterator<'a, S> {
    fn new(arena: &'a PermArena<S>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a, S> Iterator for PreOrderIterator<'a, S> {
    type Item = (Index, &'a PermNode<S>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
