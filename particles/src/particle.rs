#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::config::FieldConfig;
use crate::field::SurfaceSize;

/// One drifting dot. Only position and velocity change after spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
}

impl Particle {
    /// Sample a particle uniformly over `size` using the ranges in `config`.
    ///
    /// `config` must already be validated; an empty range would make the
    /// sampler panic.
    pub(crate) fn spawn<R: Rng + ?Sized>(rng: &mut R, size: SurfaceSize, config: &FieldConfig) -> Self {
        Self {
            x: sample_axis(rng, size.width),
            y: sample_axis(rng, size.height),
            r: rng.random_range(config.radius.clone()),
            vx: rng.random_range(config.velocity.clone()),
            vy: rng.random_range(config.velocity.clone()),
            opacity: rng.random_range(config.opacity.clone()),
        }
    }

    /// Move by one velocity step, then bounce off `[0, width] × [0, height]`.
    ///
    /// The bounce fires after the particle has crossed the edge, so it may sit
    /// up to one step outside the bounds before heading back in.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// Uniform in `[0, extent)`; a zero-length axis pins the coordinate at 0.
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, extent: u32) -> f64 {
    if extent == 0 {
        0.0
    } else {
        rng.random_range(0.0..f64::from(extent))
    }
}
