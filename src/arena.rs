use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::adapter::TreeAdapter;

/// Tree node in the arena-based tree store.
#[derive(Debug)]
pub struct TreeNode {
    pub label: String,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Child slots in order; `None` marks an absent child
    pub children: Vec<Option<Index>>,
}

/// Owned labelled tree, addressed by generational indices.
///
/// Useful when the caller has no tree type of its own (the CLI builds one
/// from an outline) and as a ready-made [`TreeAdapter`].
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node under `parent`; a node without parent becomes the root.
    #[instrument(level = "trace", skip(self, label))]
    pub fn insert_node(&mut self, label: impl Into<String>, parent: Option<Index>) -> Index {
        let node = TreeNode {
            label: label.into(),
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(Some(node_idx));
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    /// Appends an empty child slot, the way a sparse tree leaves holes.
    pub fn insert_absent(&mut self, parent: Index) {
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(None);
        }
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of levels below and including the root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.calculate_depth(root))
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        self.get_node(node_idx).map_or(0, |node| {
            1 + node
                .children
                .iter()
                .flatten()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        })
    }
}

impl TreeAdapter for TreeArena {
    type Node = Index;

    fn children(&self, node: &Index) -> Vec<Option<Index>> {
        self.get_node(*node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn label(&self, node: &Index) -> String {
        self.get_node(*node)
            .map(|n| n.label.clone())
            .unwrap_or_default()
    }
}
