//! Shared numeric constants for the particles crate.

// ── Population ──────────────────────────────────────────────────

/// Surface area in CSS pixels² allotted to each particle.
pub const DENSITY_DIVISOR: f64 = 8000.0;

/// Smallest accepted divisor: at most one particle per pixel.
pub const MIN_DENSITY_DIVISOR: f64 = 1.0;

/// Upper bound on a field's population.
pub const MAX_PARTICLES: usize = 100_000;

// ── Particle ranges (half-open) ─────────────────────────────────

pub const RADIUS_MIN: f64 = 0.5;
pub const RADIUS_MAX: f64 = 2.5;

/// Per-axis speed bound; velocities are drawn from `[-SPEED_MAX, SPEED_MAX)`.
pub const SPEED_MAX: f64 = 0.25;

pub const OPACITY_MIN: f64 = 0.5;
pub const OPACITY_MAX: f64 = 1.0;

// ── Paint ───────────────────────────────────────────────────────

/// Fill colour for every particle; alpha comes from the particle.
pub const FILL_RGB: (u8, u8, u8) = (255, 255, 255);

// ── DOM ─────────────────────────────────────────────────────────

/// Id of the background `<canvas>` element.
pub const CANVAS_ELEMENT_ID: &str = "bg-canvas";
