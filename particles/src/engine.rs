//! Browser shell around the renderer.
//!
//! [`Engine`] finds the background canvas, sizes it to the viewport, installs
//! the `requestAnimationFrame` callback and the window `resize` listener, and
//! starts the loop. Everything it drives lives in [`crate::renderer`] and
//! [`crate::field`], which are tested without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::FieldConfig;
use crate::error::RenderError;
use crate::field::{FieldCore, SurfaceSize};
use crate::renderer::{Renderer, RendererState};
use crate::scheduler::AnimationFrameScheduler;

pub type BrowserRenderer = Renderer<CanvasRenderingContext2d, AnimationFrameScheduler>;

/// The particle background bound to one canvas element.
pub struct Engine {
    window: Window,
    canvas: HtmlCanvasElement,
    renderer: Rc<RefCell<BrowserRenderer>>,
}

impl Engine {
    /// Look up `element_id` and acquire its 2D context.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if there is no window, the element is missing
    /// or not a canvas, or the context cannot be created.
    pub fn attach(element_id: &str) -> Result<Self, RenderError> {
        let window = web_sys::window().ok_or(RenderError::NoWindow)?;
        let document = window.document().ok_or(RenderError::NoWindow)?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| RenderError::SurfaceNotFound(element_id.to_owned()))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderError::NotACanvas(element_id.to_owned()))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(RenderError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::ContextUnavailable)?;

        let scheduler = AnimationFrameScheduler::new(window.clone());
        let renderer = Rc::new(RefCell::new(Renderer::new(ctx, scheduler)));
        Ok(Self { window, canvas, renderer })
    }

    /// Size the canvas to the viewport, populate the field, and start the
    /// frame loop. The loop keeps itself alive after the engine is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the viewport cannot be read, `config` is
    /// invalid, a listener cannot be installed, or the first frame fails.
    pub fn start<R: rand::Rng + ?Sized>(&self, config: &FieldConfig, rng: &mut R) -> Result<(), RenderError> {
        let size = viewport_size(&self.window)?;
        fit_canvas(&self.canvas, size);
        let field = FieldCore::new(size, config, rng)?;
        log::info!(
            "particle background: {}x{} with {} particles",
            size.width,
            size.height,
            field.len()
        );

        self.install_frame_callback();
        self.install_resize_listener()?;
        self.renderer.borrow_mut().start(field)
    }

    #[must_use]
    pub fn state(&self) -> RendererState {
        self.renderer.borrow().state()
    }

    /// Particle count, or 0 before [`Engine::start`].
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.renderer.borrow().field().map_or(0, FieldCore::len)
    }

    fn install_frame_callback(&self) {
        let renderer = Rc::clone(&self.renderer);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            if let Err(err) = renderer.borrow_mut().frame() {
                log::error!("particle background halted: {err}");
            }
        }) as Box<dyn FnMut(f64)>);
        self.renderer.borrow_mut().scheduler_mut().set_callback(callback);
    }

    fn install_resize_listener(&self) -> Result<(), RenderError> {
        let renderer = Rc::clone(&self.renderer);
        let canvas = self.canvas.clone();
        let window = self.window.clone();
        let on_resize = Closure::wrap(Box::new(move || match viewport_size(&window) {
            Ok(size) => {
                fit_canvas(&canvas, size);
                renderer.borrow_mut().resize(size);
            }
            Err(err) => log::warn!("particle background resize ignored: {err}"),
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        // Listener lives as long as the page.
        on_resize.forget();
        Ok(())
    }
}

/// Attach to `element_id` and start the background.
///
/// Returns `None` when the canvas or its context is unavailable; the page
/// simply has no background in that case.
pub fn start_background(element_id: &str) -> Option<Engine> {
    let engine = match Engine::attach(element_id) {
        Ok(engine) => engine,
        Err(err) => {
            log::debug!("particle background not started: {err}");
            return None;
        }
    };

    let mut rng = SmallRng::seed_from_u64(entropy_seed());
    if let Err(err) = engine.start(&FieldConfig::default(), &mut rng) {
        log::error!("particle background failed to start: {err}");
        return None;
    }
    Some(engine)
}

fn viewport_size(window: &Window) -> Result<SurfaceSize, RenderError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(SurfaceSize::from_css(width, height))
}

fn fit_canvas(canvas: &HtmlCanvasElement, size: SurfaceSize) {
    canvas.set_width(size.width);
    canvas.set_height(size.height);
}

/// 64 bits of seed from two `Math.random()` draws.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}
