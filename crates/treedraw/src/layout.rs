#![forbid(unsafe_code)]

//! Recursive tree layout.
//!
//! Every node is drawn as its value inside a one-cell box. Children are laid
//! out first, then placed under the box and joined to it by box-drawing
//! connectors. The result for a node depends only on its subtree.
//!
//! # Geometry
//!
//! With the value canvas `valW × valH`:
//!
//! - rows `0..=valH+1` hold the value and its box,
//! - row `valH+2` is the connector row,
//! - rows from `valH+3` hold the children.
//!
//! The `┬` hanging from a parent sits on the bottom edge of its box and the
//! `┴` over a child sits on the top edge of the child's box. Widths used for
//! centering are rounded up to odd so those glyphs land on an exact middle
//! column.
//!
//! ```text
//!   ╭─╮
//!   │1│
//!   ╰┬╯
//!  ╭─┴─╮
//! ╭┴╮ ╭┴╮
//! │2│ │3│
//! ╰─╯ ╰─╯
//! ```

use std::fmt;

use treedraw_render::canvas::{Canvas, CanvasError};
use treedraw_render::drawing::{Draw, GlyphSet};
use treedraw_render::geometry::Rect;

use crate::tree::{NodeId, Tree};
use crate::value::Renderable;

/// A canvas operation failed while laying out a node.
///
/// Layout derives every offset from the sizes of the canvases involved, so
/// this only happens if that arithmetic is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutError {
    /// Node whose canvas was being assembled.
    pub node: NodeId,
    /// What the engine was doing.
    pub step: &'static str,
    /// The underlying canvas failure.
    pub source: CanvasError,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "layout of node {} failed while {}: {}",
            self.node, self.step, self.source
        )
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

trait LayoutStep<T> {
    fn during(self, node: NodeId, step: &'static str) -> Result<T, LayoutError>;
}

impl<T> LayoutStep<T> for Result<T, CanvasError> {
    fn during(self, node: NodeId, step: &'static str) -> Result<T, LayoutError> {
        self.map_err(|source| LayoutError { node, step, source })
    }
}

/// Lay out the subtree rooted at `id` with the default rounded glyphs.
///
/// # Panics
///
/// Panics if a canvas operation fails, which indicates a bug in the layout
/// arithmetic rather than bad input. Use [`try_layout_with`] to get the
/// error instead.
#[must_use]
pub fn layout<V: Renderable>(tree: &Tree<V>, id: NodeId) -> Canvas {
    layout_with(tree, id, &GlyphSet::ROUNDED)
}

/// Lay out the subtree rooted at `id` using `glyphs`.
///
/// # Panics
///
/// See [`layout`].
#[must_use]
pub fn layout_with<V: Renderable>(tree: &Tree<V>, id: NodeId, glyphs: &GlyphSet) -> Canvas {
    match try_layout_with(tree, id, glyphs) {
        Ok(canvas) => canvas,
        Err(err) => {
            treedraw_render::warn!(node = err.node.index(), step = err.step, "layout failed");
            panic!("tree layout invariant violated: {err}")
        }
    }
}

/// Fallible form of [`layout_with`].
pub fn try_layout_with<V: Renderable>(
    tree: &Tree<V>,
    id: NodeId,
    glyphs: &GlyphSet,
) -> Result<Canvas, LayoutError> {
    let span = treedraw_render::debug_span!("layout_tree", root = id.index(), nodes = tree.len());
    let _guard = span.enter();
    layout_node(tree, id, glyphs)
}

fn layout_node<V: Renderable>(
    tree: &Tree<V>,
    id: NodeId,
    glyphs: &GlyphSet,
) -> Result<Canvas, LayoutError> {
    let children = tree.children(id);
    let span = treedraw_render::debug_span!(
        "layout_node",
        node = id.index(),
        children = children.len()
    );
    let _guard = span.enter();

    let value = tree.value(id).draw();
    let canvas = match children {
        [] => layout_leaf(id, &value, glyphs),
        [only] => {
            let child = layout_node(tree, *only, glyphs)?;
            layout_single(id, &value, &child, glyphs)
        }
        _ => {
            let drawn = children
                .iter()
                .map(|&child| layout_node(tree, child, glyphs))
                .collect::<Result<Vec<_>, _>>()?;
            layout_fan(id, &value, &drawn, glyphs)
        }
    }?;

    treedraw_render::trace!(
        node = id.index(),
        width = canvas.width(),
        height = canvas.height(),
        "node laid out"
    );
    Ok(canvas)
}

/// Round a positive width up to the next odd number.
#[inline]
const fn odd(width: i32) -> i32 {
    width | 1
}

/// Composite `value` at (`x`, 1) and draw its box one cell outside it.
fn draw_boxed_value(
    canvas: &mut Canvas,
    id: NodeId,
    value: &Canvas,
    x: i32,
    glyphs: &GlyphSet,
) -> Result<(), LayoutError> {
    let (val_w, val_h) = value.extent().during(id, "measuring value")?;
    canvas.composite(value, x, 1).during(id, "drawing value")?;
    canvas
        .draw_border(Rect::from_corners(x - 1, 0, x + val_w, val_h + 1), glyphs)
        .during(id, "drawing value box")
}

fn layout_leaf(id: NodeId, value: &Canvas, glyphs: &GlyphSet) -> Result<Canvas, LayoutError> {
    let (val_w, val_h) = value.extent().during(id, "measuring value")?;
    let mut canvas = Canvas::new(odd(val_w + 2), val_h + 2).during(id, "allocating leaf")?;
    draw_boxed_value(&mut canvas, id, value, 1, glyphs)?;
    Ok(canvas)
}

fn layout_single(
    id: NodeId,
    value: &Canvas,
    child: &Canvas,
    glyphs: &GlyphSet,
) -> Result<Canvas, LayoutError> {
    let (val_w, val_h) = value.extent().during(id, "measuring value")?;
    let (child_w, child_h) = child.extent().during(id, "measuring child")?;
    let w = odd((val_w + 2).max(child_w));
    let h = val_h + 3 + child_h;
    let center = w / 2;

    let mut canvas = Canvas::new(w, h).during(id, "allocating single-child canvas")?;
    draw_boxed_value(&mut canvas, id, value, (w - val_w) / 2, glyphs)?;
    canvas
        .set(center, val_h + 1, glyphs.tee_down)
        .during(id, "drawing parent link")?;
    canvas
        .set(center, val_h + 2, glyphs.vertical)
        .during(id, "drawing pipe")?;
    canvas
        .composite(child, (w - child_w) / 2, val_h + 3)
        .during(id, "drawing child")?;
    // Drawn after the child so its box edge does not hide the link.
    canvas
        .set(center, val_h + 3, glyphs.tee_up)
        .during(id, "drawing child link")?;
    Ok(canvas)
}

/// Horizontal placement of children inside the strip below a parent.
#[derive(Debug, Default)]
struct Strip {
    lefts: Vec<i32>,
    centers: Vec<i32>,
    width: i32,
    height: i32,
}

impl Strip {
    /// Place children left to right, one blank column apart, widening the
    /// last gap by one when needed to keep the strip width odd.
    fn place(id: NodeId, children: &[Canvas]) -> Result<Self, LayoutError> {
        let mut strip = Self {
            lefts: Vec::with_capacity(children.len()),
            centers: Vec::with_capacity(children.len()),
            ..Self::default()
        };
        let last = children.len().saturating_sub(1);
        for (i, child) in children.iter().enumerate() {
            let (child_w, child_h) = child.extent().during(id, "measuring child")?;
            strip.height = strip.height.max(child_h);
            let left = if i == last && (strip.width + child_w) % 2 == 0 {
                strip.width + 1
            } else {
                strip.width
            };
            strip.lefts.push(left);
            strip.centers.push(left + child_w / 2);
            strip.width = left + child_w + i32::from(i != last);
        }
        Ok(strip)
    }

    fn shift(&mut self, dx: i32) {
        for x in self.lefts.iter_mut().chain(self.centers.iter_mut()) {
            *x += dx;
        }
    }

    fn is_center(&self, x: i32) -> bool {
        self.centers.binary_search(&x).is_ok()
    }
}

fn connector_glyph(glyphs: &GlyphSet, under_parent: bool, above_child: bool) -> char {
    match (under_parent, above_child) {
        (true, true) => glyphs.cross,
        (true, false) => glyphs.tee_up,
        (false, true) => glyphs.tee_down,
        (false, false) => glyphs.horizontal,
    }
}

fn layout_fan(
    id: NodeId,
    value: &Canvas,
    children: &[Canvas],
    glyphs: &GlyphSet,
) -> Result<Canvas, LayoutError> {
    let (val_w, val_h) = value.extent().during(id, "measuring value")?;
    let mut strip = Strip::place(id, children)?;

    let parent_w = val_w + 2;
    let w = if parent_w > strip.width {
        strip.shift((parent_w - strip.width) / 2);
        parent_w
    } else {
        strip.width
    };
    let h = val_h + 3 + strip.height;
    let center = w / 2;
    let link_row = val_h + 2;

    let mut canvas = Canvas::new(w, h).during(id, "allocating multi-child canvas")?;
    draw_boxed_value(&mut canvas, id, value, (w - val_w) / 2, glyphs)?;
    canvas
        .set(center, val_h + 1, glyphs.tee_down)
        .during(id, "drawing parent link")?;

    for (child, &left) in children.iter().zip(&strip.lefts) {
        canvas
            .composite(child, left, val_h + 3)
            .during(id, "drawing child")?;
    }
    for &x in &strip.centers {
        canvas
            .set(x, val_h + 3, glyphs.tee_up)
            .during(id, "drawing child link")?;
    }

    let (first, last) = match (strip.centers.first(), strip.centers.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Ok(canvas),
    };
    for x in first..=last {
        let glyph = if x == first {
            glyphs.top_left
        } else if x == last {
            glyphs.top_right
        } else {
            connector_glyph(glyphs, x == center, strip.is_center(x))
        };
        canvas
            .set(x, link_row, glyph)
            .during(id, "drawing connector row")?;
    }
    Ok(canvas)
}
