#![forbid(unsafe_code)]

//! Drawing primitives for the canvas.
//!
//! Helpers on top of [`Canvas::set`] so layout code can draw boxes and text
//! without repeating cell loops.

use crate::canvas::{Canvas, CanvasError};
use crate::geometry::Rect;

/// Characters used to draw node boxes and the connectors between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// Junction opening downward (`┬`).
    pub tee_down: char,
    /// Junction opening upward (`┴`).
    pub tee_up: char,
    /// Four-way junction (`┼`).
    pub cross: char,
}

impl GlyphSet {
    /// Rounded corners with light box-drawing lines (U+2500 block).
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
        tee_down: '┬',
        tee_up: '┴',
        cross: '┼',
    };

    /// Square corners with light box-drawing lines.
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        ..Self::ROUNDED
    };

    /// ASCII-only glyphs for terminals without box drawing.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
        tee_down: '+',
        tee_up: '+',
        cross: '+',
    };

    /// Look up a glyph set by name (`rounded`/`unicode`, `square`, `ascii`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rounded" | "unicode" | "u" => Some(Self::ROUNDED),
            "square" => Some(Self::SQUARE),
            "ascii" | "a" => Some(Self::ASCII),
            _ => None,
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::ROUNDED
    }
}

/// Extension trait for drawing on a [`Canvas`].
pub trait Draw {
    /// Print `text` left to right starting at (x, y), one `char` per cell.
    ///
    /// Stops at the canvas edge. Returns the x position after the last
    /// character written.
    fn print_text(&mut self, x: i32, y: i32, text: &str) -> i32;

    /// Draw a box outline along the edges of `rect`.
    ///
    /// Unlike text printing this is checked: the whole rectangle must lie
    /// inside the canvas and be at least 2x2, otherwise nothing is drawn.
    fn draw_border(&mut self, rect: Rect, glyphs: &GlyphSet) -> Result<(), CanvasError>;
}

impl Draw for Canvas {
    fn print_text(&mut self, x: i32, y: i32, text: &str) -> i32 {
        let mut cx = x;
        for c in text.chars() {
            if self.set(cx, y, c).is_err() {
                break;
            }
            cx += 1;
        }
        cx
    }

    fn draw_border(&mut self, rect: Rect, glyphs: &GlyphSet) -> Result<(), CanvasError> {
        if rect.width < 2 || rect.height < 2 || !self.bounds().contains_rect(&rect) {
            return Err(CanvasError::Overflow {
                x: rect.x,
                y: rect.y,
                source: (rect.width.max(0) as usize, rect.height.max(0) as usize),
                target: self.dimensions(),
            });
        }

        let (left, top) = (rect.left(), rect.top());
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

        for x in left + 1..right {
            self.set(x, top, glyphs.horizontal)?;
            self.set(x, bottom, glyphs.horizontal)?;
        }
        for y in top + 1..bottom {
            self.set(left, y, glyphs.vertical)?;
            self.set(right, y, glyphs.vertical)?;
        }

        self.set(left, top, glyphs.top_left)?;
        self.set(right, top, glyphs.top_right)?;
        self.set(left, bottom, glyphs.bottom_left)?;
        self.set(right, bottom, glyphs.bottom_right)
    }
}
