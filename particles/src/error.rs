//! Error types for the particles crate.

use wasm_bindgen::JsValue;

/// Failure while acquiring the surface or drawing a frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// `window` or `document` is not available (non-browser host).
    #[error("browser window is unavailable")]
    NoWindow,
    /// No element with the given id exists in the document.
    #[error("no element with id `{0}`")]
    SurfaceNotFound(String),
    /// The element exists but is not a `<canvas>`.
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    /// The canvas refused to hand out a 2D context.
    #[error("2d rendering context is unavailable")]
    ContextUnavailable,
    /// A frame was requested before the frame callback was installed.
    #[error("no frame callback installed")]
    NoFrameCallback,
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A browser call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Rejected [`crate::config::FieldConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("density divisor must be at least 1, got {0}")]
    Density(f64),
    #[error("surface needs {count} particles, more than the limit of {max}")]
    TooManyParticles { count: usize, max: usize },
    #[error("{name} range is empty or not finite: {start}..{end}")]
    Range { name: &'static str, start: f64, end: f64 },
    #[error("opacity range must lie within [0, 1], got {start}..{end}")]
    Opacity { start: f64, end: f64 },
}
