#![forbid(unsafe_code)]

//! Node payloads that know how to draw themselves.
//!
//! The layout engine only ever sees [`Renderable`]; which concrete type sits
//! in a node is up to the caller. Everything built in here funnels into the
//! text path, [`Canvas::from_text`].

use std::fmt;

use treedraw_render::canvas::Canvas;

/// A value that can produce a canvas depicting itself.
///
/// The returned canvas must have positive width and height, which
/// [`Canvas`] guarantees by construction.
///
/// # Example
///
/// ```
/// use treedraw::value::Renderable;
///
/// assert_eq!("hi".draw().render(), "hi");
/// assert_eq!(42_i64.draw().dimensions(), (2, 1));
/// ```
pub trait Renderable {
    /// Draw this value on a fresh canvas.
    fn draw(&self) -> Canvas;
}

impl Renderable for str {
    fn draw(&self) -> Canvas {
        Canvas::from_text(self)
    }
}

impl Renderable for String {
    fn draw(&self) -> Canvas {
        self.as_str().draw()
    }
}

impl Renderable for char {
    fn draw(&self) -> Canvas {
        let mut buf = [0u8; 4];
        self.encode_utf8(&mut buf).draw()
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn draw(&self) -> Canvas {
        (**self).draw()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn draw(&self) -> Canvas {
        (**self).draw()
    }
}

impl Renderable for Canvas {
    fn draw(&self) -> Canvas {
        self.clone()
    }
}

macro_rules! renderable_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Renderable for $ty {
                fn draw(&self) -> Canvas {
                    self.to_string().draw()
                }
            }
        )*
    };
}

renderable_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Complex,
);

/// A complex number payload.
///
/// Displays as `(re+imi)`, e.g. `(1+2i)` or `(0.5-3i)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Negative imaginary parts print their own sign; NaN never does.
        let sign = if self.im.is_sign_negative() && !self.im.is_nan() {
            ""
        } else {
            "+"
        };
        write!(f, "({}{sign}{}i)", self.re, self.im)
    }
}
