/*
Rendering goes through a trait so both the tree and the bare arena can be
turned into a termtree::Tree without tying either type to Display bounds.
 */
use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::PermArena;
use crate::domain::tree::PermTree;

/// Label used for the payload-less root.
pub const ROOT_LABEL: &str = "*";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<S: Display> TreeNodeConvert for PermArena<S> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            let mut tree = Tree::new(ROOT_LABEL.to_string());

            fn build_tree<S: Display>(arena: &PermArena<S>, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = arena.get_node(node_idx) {
                    for &child_idx in &node.children {
                        if let Some(child) = arena.get_node(child_idx) {
                            let label = child
                                .value
                                .as_ref()
                                .map(|v| v.to_string())
                                .unwrap_or_else(|| ROOT_LABEL.to_string());
                            let mut child_tree = Tree::new(label);
                            build_tree(arena, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("(empty)".to_string())
        }
    }
}

impl<S: Display> TreeNodeConvert for PermTree<S> {
    fn to_tree_string(&self) -> Tree<String> {
        self.nodes().to_tree_string()
    }
}
