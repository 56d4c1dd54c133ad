//! Painting seam between the field and a 2D surface.
//!
//! [`Painter`] is the only thing [`crate::field::FieldCore::tick`] draws
//! through. The browser implementation wraps
//! [`web_sys::CanvasRenderingContext2d`]; tests substitute a recorder.

#[cfg(test)]
#[path = "paint_test.rs"]
mod paint_test;

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::error::RenderError;

/// Fill colour with a straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub fn from_rgb((r, g, b): (u8, u8, u8), a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` string for `fillStyle`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Minimal drawing surface for the particle field.
pub trait Painter {
    /// Clear `[0, width] × [0, height]`.
    ///
    /// # Errors
    ///
    /// Implementation-specific; the frame is abandoned.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), RenderError>;

    /// Fill a circle centred on `(x, y)`.
    ///
    /// # Errors
    ///
    /// Implementation-specific; the frame is abandoned.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) -> Result<(), RenderError>;
}

impl Painter for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), RenderError> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) -> Result<(), RenderError> {
        self.begin_path();
        self.arc(x, y, radius, 0.0, TAU)?;
        self.set_fill_style_str(&color.css());
        self.fill();
        Ok(())
    }
}
