//! Particle collection and its surface bounds.
//!
//! [`FieldCore`] holds all per-frame state and has no browser dependencies,
//! so it can be stepped and painted in native tests.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::config::FieldConfig;
use crate::consts::MAX_PARTICLES;
use crate::error::{ConfigError, RenderError};
use crate::paint::{Painter, Rgba};
use crate::particle::Particle;

/// Drawing surface size in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert viewport dimensions reported by the browser. Negative and NaN
    /// inputs become 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_css(width: f64, height: f64) -> Self {
        Self { width: width.max(0.0).round() as u32, height: height.max(0.0).round() as u32 }
    }

    fn bounds(self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }
}

/// Number of particles for a surface: `round(width * height / divisor)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn particle_count(size: SurfaceSize, density_divisor: f64) -> usize {
    let (w, h) = size.bounds();
    (w * h / density_divisor).round() as usize
}

/// The particle population plus the bounds it bounces against.
///
/// Population is fixed at construction. [`FieldCore::resize`] only moves the
/// bounds; particles left outside drift back on their own.
#[derive(Debug, Clone)]
pub struct FieldCore {
    particles: Vec<Particle>,
    size: SurfaceSize,
    fill_rgb: (u8, u8, u8),
    ticks: u64,
}

impl FieldCore {
    /// Populate a field for `size`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation or the surface
    /// would need more than [`MAX_PARTICLES`].
    pub fn new<R: Rng + ?Sized>(size: SurfaceSize, config: &FieldConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let count = particle_count(size, config.density_divisor);
        if count > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles { count, max: MAX_PARTICLES });
        }
        let particles = (0..count).map(|_| Particle::spawn(rng, size, config)).collect();
        Ok(Self { particles, size, fill_rgb: config.fill_rgb, ticks: 0 })
    }

    /// Build a field from explicit particles, painted in the default colour.
    #[must_use]
    pub fn from_particles(size: SurfaceSize, particles: Vec<Particle>) -> Self {
        Self { particles, size, fill_rgb: FieldConfig::default().fill_rgb, ticks: 0 }
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Completed updates since construction.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Adopt new bounds for future bounce checks.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Advance every particle once without painting.
    pub fn step(&mut self) {
        let (w, h) = self.size.bounds();
        for p in &mut self.particles {
            p.advance(w, h);
        }
        self.ticks += 1;
    }

    /// Clear the surface, then advance and paint each particle in order.
    ///
    /// # Errors
    ///
    /// Propagates the first painter failure; particles after it are left
    /// unmoved for this tick.
    pub fn tick<P: Painter + ?Sized>(&mut self, painter: &mut P) -> Result<(), RenderError> {
        let (w, h) = self.size.bounds();
        painter.clear(w, h)?;
        for p in &mut self.particles {
            p.advance(w, h);
            painter.fill_circle(p.x, p.y, p.r, Rgba::from_rgb(self.fill_rgb, p.opacity))?;
        }
        self.ticks += 1;
        Ok(())
    }
}
