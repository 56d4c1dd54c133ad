//! Frame loop over a [`FieldCore`], a [`Painter`], and a [`FrameScheduler`].
//!
//! ARCHITECTURE
//! ============
//! The loop is a chain of single frames: each successful [`Renderer::frame`]
//! paints once and asks the scheduler for the next call. Nothing inside the
//! renderer waits or sleeps, so tests drive it by calling `frame()` directly.
//!
//! A frame that fails stops the chain. The renderer remembers that in
//! [`RendererState::Halted`] and ignores later calls.

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

use crate::error::RenderError;
use crate::field::{FieldCore, SurfaceSize};
use crate::paint::Painter;
use crate::scheduler::FrameScheduler;

/// Lifecycle of the background loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    /// No field yet; frames are no-ops.
    Uninitialized,
    /// Painting and rescheduling every frame.
    Running,
    /// A frame failed and nothing was rescheduled.
    Halted,
}

pub struct Renderer<P, S> {
    field: Option<FieldCore>,
    painter: P,
    scheduler: S,
    state: RendererState,
}

impl<P: Painter, S: FrameScheduler> Renderer<P, S> {
    #[must_use]
    pub fn new(painter: P, scheduler: S) -> Self {
        Self { field: None, painter, scheduler, state: RendererState::Uninitialized }
    }

    /// Take ownership of `field` and run the first frame immediately.
    ///
    /// # Errors
    ///
    /// Returns the first frame's error; the renderer is then halted.
    pub fn start(&mut self, field: FieldCore) -> Result<(), RenderError> {
        self.field = Some(field);
        self.state = RendererState::Running;
        self.frame()
    }

    /// Paint one tick and schedule the next.
    ///
    /// # Errors
    ///
    /// Returns the painter or scheduler error that stopped the loop.
    pub fn frame(&mut self) -> Result<(), RenderError> {
        if self.state != RendererState::Running {
            return Ok(());
        }
        let Some(field) = self.field.as_mut() else {
            return Ok(());
        };

        let result = match field.tick(&mut self.painter) {
            Ok(()) => self.scheduler.request_frame(),
            Err(err) => Err(err),
        };
        if result.is_err() {
            self.state = RendererState::Halted;
        }
        result
    }

    /// Forward new viewport bounds to the field, if there is one.
    pub fn resize(&mut self, size: SurfaceSize) {
        if let Some(field) = self.field.as_mut() {
            field.resize(size);
        }
    }

    #[must_use]
    pub fn state(&self) -> RendererState {
        self.state
    }

    #[must_use]
    pub fn field(&self) -> Option<&FieldCore> {
        self.field.as_ref()
    }

    #[must_use]
    pub fn painter(&self) -> &P {
        &self.painter
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
