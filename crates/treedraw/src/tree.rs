#![forbid(unsafe_code)]

//! Arena-backed tree of renderable values.
//!
//! Nodes live in one `Vec` owned by the [`Tree`]; edges are [`NodeId`]
//! indices. Children are owned edges kept in insertion order, which is also
//! left-to-right draw order. The parent link is a plain index used only to
//! walk upward. Nodes are never removed or reparented, so every id handed
//! out stays valid for the life of the tree.
//!
//! # Example
//!
//! ```
//! use treedraw::tree::Tree;
//!
//! let mut tree = Tree::new(5);
//! let left = tree.add_child(tree.root(), 3);
//! tree.add_child(tree.root(), 4);
//!
//! assert_eq!(tree.value(left), &3);
//! assert_eq!(tree.parent(left), Some(tree.root()));
//! assert_eq!(tree.children(tree.root()).len(), 2);
//! ```

use std::fmt;

use treedraw_render::canvas::Canvas;
use treedraw_render::drawing::GlyphSet;

use crate::layout;
use crate::value::Renderable;

/// Handle to a node inside a [`Tree`].
///
/// Ids are only meaningful for the tree that produced them. Passing an id
/// from another tree to an accessor panics, like an out-of-range slice
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order; the root is 0.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors from navigating a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Asked for a child index the node does not have.
    ChildOutOfRange {
        node: NodeId,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildOutOfRange { node, index, len } => write!(
                f,
                "node {node} has {len} children, child {index} does not exist"
            ),
        }
    }
}

impl std::error::Error for TreeError {}

#[derive(Debug, Clone)]
struct Node<V> {
    value: V,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// A rooted tree whose nodes each hold a value.
#[derive(Debug, Clone)]
pub struct Tree<V> {
    nodes: Vec<Node<V>>,
}

impl<V> Tree<V> {
    /// Create a tree consisting of a single root node.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            nodes: vec![Node {
                value,
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    /// The root node.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a new child holding `value` to `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, value: V) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes[parent.0].children.push(id);
        self.nodes.push(Node {
            value,
            children: Vec::new(),
            parent: Some(parent),
        });
        id
    }

    /// The `index`-th child of `id`, counting from the left.
    pub fn child(&self, id: NodeId, index: usize) -> Result<NodeId, TreeError> {
        let children = self.children(id);
        children
            .get(index)
            .copied()
            .ok_or(TreeError::ChildOutOfRange {
                node: id,
                index,
                len: children.len(),
            })
    }

    /// Children of `id` in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Parent of `id`, or `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Follow parent links from `id` until reaching the root.
    #[must_use]
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Number of edges between `id` and the root.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Number of levels in the subtree rooted at `id` (1 for a leaf).
    #[must_use]
    pub fn height(&self, id: NodeId) -> usize {
        1 + self
            .children(id)
            .iter()
            .map(|&child| self.height(child))
            .max()
            .unwrap_or(0)
    }

    /// Value held by `id`.
    #[must_use]
    pub fn value(&self, id: NodeId) -> &V {
        &self.nodes[id.0].value
    }

    /// Mutable access to the value held by `id`.
    pub fn value_mut(&mut self, id: NodeId) -> &mut V {
        &mut self.nodes[id.0].value
    }

    /// Replace the value held by `id`, returning the old one.
    pub fn set_value(&mut self, id: NodeId, value: V) -> V {
        std::mem::replace(&mut self.nodes[id.0].value, value)
    }

    /// All node ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }
}

impl<V: Renderable> Tree<V> {
    /// Lay out the subtree rooted at `id` on a canvas.
    #[must_use]
    pub fn canvas(&self, id: NodeId) -> Canvas {
        layout::layout(self, id)
    }

    /// Lay out the subtree rooted at `id` with a specific glyph set.
    #[must_use]
    pub fn canvas_with(&self, id: NodeId, glyphs: &GlyphSet) -> Canvas {
        layout::layout_with(self, id, glyphs)
    }

    /// Text diagram of the subtree rooted at `id`.
    #[must_use]
    pub fn render(&self, id: NodeId) -> String {
        self.canvas(id).render()
    }
}

/// Draws the whole tree, starting from the root.
impl<V: Renderable> fmt::Display for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.root()))
    }
}
