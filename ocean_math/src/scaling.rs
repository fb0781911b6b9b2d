//! Mapping normalised values into physical bounds

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` a series is kept inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Create bounds, rejecting empty or inverted intervals
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(MathError::InvalidInput(format!(
                "Bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min >= max {
            return Err(MathError::InvalidInput(format!(
                "Lower bound {} must be below upper bound {}",
                min, max
            )));
        }

        Ok(Self { min, max })
    }

    /// Bounds for static tables; the caller guarantees `min < max`
    pub const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Clamp a value into the interval
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Linearly map `[0, 1]` onto `[min, max]` without clamping
    pub fn denormalize(&self, normalized: f64) -> f64 {
        self.min + normalized * self.span()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// `[min, max]` pair
    pub fn as_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl TryFrom<[f64; 2]> for Bounds {
    type Error = MathError;

    fn try_from(pair: [f64; 2]) -> Result<Self> {
        Bounds::new(pair[0], pair[1])
    }
}

impl From<Bounds> for [f64; 2] {
    fn from(bounds: Bounds) -> Self {
        bounds.as_array()
    }
}
