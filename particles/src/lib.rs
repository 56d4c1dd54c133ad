//! Decorative particle background for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! fixed population of drifting dots sized to the viewport, advances them once
//! per display refresh, and paints them onto a `<canvas>`. Nothing here reacts
//! to the rest of the page; the host only calls [`engine::start_background`].
//!
//! The simulation ([`field::FieldCore`]) never touches the DOM. Painting and
//! frame scheduling go through the [`paint::Painter`] and
//! [`scheduler::FrameScheduler`] seams so the loop can be driven frame by
//! frame in native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser shell: canvas lookup, resize listener, loop start |
//! | [`renderer`] | Frame loop state machine over a painter and a scheduler |
//! | [`field`] | Particle collection, surface bounds, per-tick update |
//! | [`particle`] | Single particle spawn and bounce step |
//! | [`paint`] | `Painter` trait and its `Canvas2D` implementation |
//! | [`scheduler`] | `FrameScheduler` trait and the `requestAnimationFrame` scheduler |
//! | [`config`] | Validated bundle of the tuning constants |
//! | [`consts`] | Shared numeric constants (density, ranges, element id) |
//! | [`error`] | Error types |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod field;
pub mod paint;
pub mod particle;
pub mod renderer;
pub mod scheduler;
