#![forbid(unsafe_code)]

//! Character canvas storage and composition.
//!
//! A [`Canvas`] is a fixed-size 2D grid of Unicode scalar values. Layout code
//! allocates one canvas per tree node, fills it with single-cell writes, and
//! blits child canvases into it with [`Canvas::composite`].
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. `width >= 1` and `height >= 1`; zero-sized requests are raised to 1
//! 3. Width and height never change after creation
//! 4. [`BLANK`] (`'\0'`) marks an unwritten cell and renders as a space

use std::fmt;

use crate::drawing::Draw;
use crate::geometry::Rect;

/// Cell value meaning "nothing drawn here".
pub const BLANK: char = '\0';

/// Errors reported by canvas construction, writes, and composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// A canvas was requested with a negative width or height.
    InvalidDimension { width: i32, height: i32 },
    /// A single-cell write targeted a coordinate outside the canvas.
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// A composited canvas does not fit at the requested offset.
    Overflow {
        x: i32,
        y: i32,
        source: (usize, usize),
        target: (usize, usize),
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid canvas dimensions {width}x{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "position ({x}, {y}) is outside the canvas of dimension ({width}, {height})"
            ),
            Self::Overflow {
                x,
                y,
                source,
                target,
            } => write!(
                f,
                "canvas of dimension ({}, {}) drawn at ({x}, {y}) overflows canvas of dimension ({}, {})",
                source.0, source.1, target.0, target.1
            ),
        }
    }
}

impl std::error::Error for CanvasError {}

/// A 2D grid of characters.
///
/// # Example
///
/// ```
/// use treedraw_render::canvas::Canvas;
///
/// let mut canvas = Canvas::new(3, 1).unwrap();
/// canvas.set(0, 0, 'H').unwrap();
/// canvas.set(1, 0, 'i').unwrap();
/// assert_eq!(canvas.render(), "Hi ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Create a blank canvas.
    ///
    /// Zero dimensions are raised to 1 so a canvas always has at least one
    /// cell. Negative dimensions are rejected with
    /// [`CanvasError::InvalidDimension`].
    pub fn new(width: i32, height: i32) -> Result<Self, CanvasError> {
        if width < 0 || height < 0 {
            return Err(CanvasError::InvalidDimension { width, height });
        }
        Ok(Self::blank(width as usize, height as usize))
    }

    /// Create a blank canvas from unsigned dimensions, clamping zero to 1.
    pub fn blank(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    /// Create a canvas holding `text`, one row per line.
    ///
    /// The canvas is as wide as the longest line counted in `char`s, so a
    /// multi-byte character takes exactly one column. Splitting is on `'\n'`
    /// only: a trailing newline produces a trailing empty row.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let mut canvas = Self::blank(width, lines.len());
        // Rows past i32::MAX are not addressable and stay blank.
        for (y, line) in (0..i32::MAX).zip(&lines) {
            canvas.print_text(0, y, line);
        }
        canvas
    }

    /// Canvas width in cells.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in cells.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` of the canvas.
    #[inline]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// `(width, height)` in signed canvas coordinates.
    ///
    /// Fails with [`CanvasError::Overflow`] if a side does not fit in `i32`.
    pub fn extent(&self) -> Result<(i32, i32), CanvasError> {
        signed_extent(self.width, self.height)
    }

    /// Bounding rect of the entire canvas.
    ///
    /// Sides longer than `i32::MAX` are clamped.
    #[inline]
    pub fn bounds(&self) -> Rect {
        let clamp = |len: usize| i32::try_from(len).unwrap_or(i32::MAX);
        Rect::new(0, 0, clamp(self.width), clamp(self.height))
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        // Non-negative after the bounds check.
        let (x, y) = (x as usize, y as usize);
        Some(y * self.width + x)
    }

    /// Read the cell at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the cell at (x, y).
    ///
    /// Out-of-bounds writes are reported, never clipped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, ch: char) -> Result<(), CanvasError> {
        let Some(idx) = self.index(x, y) else {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        };
        self.cells[idx] = ch;
        Ok(())
    }

    /// Copy every cell of `source` into this canvas with its top-left corner
    /// at (x, y).
    ///
    /// Blank source cells are copied too; composition is opaque. Fails with
    /// [`CanvasError::Overflow`] unless the whole source fits.
    pub fn composite(&mut self, source: &Canvas, x: i32, y: i32) -> Result<(), CanvasError> {
        let overflow = CanvasError::Overflow {
            x,
            y,
            source: source.dimensions(),
            target: self.dimensions(),
        };
        let Ok((width, height)) = source.extent() else {
            return Err(overflow);
        };
        if !self.bounds().contains_rect(&Rect::new(x, y, width, height)) {
            return Err(overflow);
        }
        crate::trace!(
            x,
            y,
            width = source.width,
            height = source.height,
            "composite"
        );

        let (x, y) = (x as usize, y as usize);
        for (row, src) in source.rows().enumerate() {
            let start = (y + row) * self.width + x;
            self.cells[start..start + source.width].copy_from_slice(src);
        }
        Ok(())
    }

    /// Iterate over the rows of the canvas, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    /// Text form of the canvas.
    ///
    /// Rows are joined with `'\n'` without a trailing newline. Blank cells
    /// become spaces and trailing blanks are kept.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&c| if c == BLANK { ' ' } else { c }));
        }
        out
    }
}

fn signed_extent(width: usize, height: usize) -> Result<(i32, i32), CanvasError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(CanvasError::Overflow {
            x: 0,
            y: 0,
            source: (width, height),
            target: (i32::MAX as usize, i32::MAX as usize),
        }),
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
