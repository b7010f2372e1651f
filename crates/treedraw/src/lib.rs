#![forbid(unsafe_code)]

//! Draw trees of arbitrary values as box-and-pipe Unicode diagrams.
//!
//! Each node's value is drawn inside a rounded box; children hang below
//! their parent, joined by a single connector row:
//!
//! ```
//! use treedraw::tree::Tree;
//!
//! let mut tree = Tree::new(1);
//! tree.add_child(tree.root(), 2);
//! tree.add_child(tree.root(), 3);
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "  ╭─╮  \n  │1│  \n  ╰┬╯  \n ╭─┴─╮ \n╭┴╮ ╭┴╮\n│2│ │3│\n╰─╯ ╰─╯"
//! );
//! ```
//!
//! Any type implementing [`Renderable`] can be a node value; mix types with
//! `Tree<Box<dyn Renderable>>`.

pub mod fs;
pub mod generate;
pub mod layout;
pub mod tree;
pub mod value;

pub use layout::{LayoutError, layout, layout_with, try_layout_with};
pub use tree::{NodeId, Tree, TreeError};
pub use treedraw_render::canvas::{Canvas, CanvasError};
pub use treedraw_render::drawing::GlyphSet;
pub use value::{Complex, Renderable};
