//! Frame scheduling seam.
//!
//! The field never schedules itself; [`crate::renderer::Renderer::frame`]
//! asks a [`FrameScheduler`] for the next tick after each successful paint.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::RenderError;

/// Host capability that invokes the renderer again on the next display
/// refresh.
pub trait FrameScheduler {
    /// Arrange for one more frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the request; the loop stops.
    fn request_frame(&mut self) -> Result<(), RenderError>;
}

/// Schedules frames with `window.requestAnimationFrame`.
///
/// The callback is installed after construction because it has to capture
/// the renderer that owns this scheduler.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl AnimationFrameScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window, callback: None }
    }

    /// Install the per-frame callback, replacing any previous one.
    pub fn set_callback(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Result<(), RenderError> {
        let Some(callback) = self.callback.as_ref() else {
            return Err(RenderError::NoFrameCallback);
        };
        self.window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(())
    }
}
