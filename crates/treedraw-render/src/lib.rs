#![forbid(unsafe_code)]

//! Render kernel: character canvases, composition, and box-drawing primitives.

pub mod canvas;
pub mod drawing;
pub mod geometry;
pub mod logging;

pub use canvas::{BLANK, Canvas, CanvasError};
pub use drawing::{Draw, GlyphSet};
pub use geometry::Rect;

// Re-export tracing macros at crate root so both builds share one path.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
