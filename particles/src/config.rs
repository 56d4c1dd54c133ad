//! Tuning parameters for a particle field.
//!
//! The page always runs with [`FieldConfig::default`]; the struct exists so
//! the sampler never sees an empty range and so tests can build fields with
//! known parameters.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DENSITY_DIVISOR, FILL_RGB, MIN_DENSITY_DIVISOR, OPACITY_MAX, OPACITY_MIN, RADIUS_MAX, RADIUS_MIN,
    SPEED_MAX,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Surface area per particle.
    pub density_divisor: f64,
    pub radius: Range<f64>,
    /// Applied independently to `vx` and `vy`.
    pub velocity: Range<f64>,
    pub opacity: Range<f64>,
    pub fill_rgb: (u8, u8, u8),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density_divisor: DENSITY_DIVISOR,
            radius: RADIUS_MIN..RADIUS_MAX,
            velocity: -SPEED_MAX..SPEED_MAX,
            opacity: OPACITY_MIN..OPACITY_MAX,
            fill_rgb: FILL_RGB,
        }
    }
}

impl FieldConfig {
    /// Check that every range can be sampled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a divisor below 1, an empty or
    /// non-finite range, or an opacity range outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.density_divisor.is_nan() || self.density_divisor < MIN_DENSITY_DIVISOR {
            return Err(ConfigError::Density(self.density_divisor));
        }
        check_range("radius", &self.radius)?;
        check_range("velocity", &self.velocity)?;
        check_range("opacity", &self.opacity)?;
        if self.opacity.start < 0.0 || self.opacity.end > 1.0 {
            return Err(ConfigError::Opacity { start: self.opacity.start, end: self.opacity.end });
        }
        Ok(())
    }
}

fn check_range(name: &'static str, range: &Range<f64>) -> Result<(), ConfigError> {
    let finite = range.start.is_finite() && range.end.is_finite();
    if finite && range.start < range.end {
        Ok(())
    } else {
        Err(ConfigError::Range { name, start: range.start, end: range.end })
    }
}
