//! Minimal Minkowski four-vectors for positions and momenta.

use serde::{Deserialize, Serialize};

/// Four-vector with metric signature (+, -, -, -).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FourVector {
    /// Time (or energy) component.
    pub x0: f64,
    /// First spatial component.
    pub x1: f64,
    /// Second spatial component.
    pub x2: f64,
    /// Third spatial component.
    pub x3: f64,
}

impl FourVector {
    /// Creates a four-vector from its components.
    pub const fn new(x0: f64, x1: f64, x2: f64, x3: f64) -> Self {
        Self { x0, x1, x2, x3 }
    }

    /// Minkowski square `x0² - |x|²`.
    pub fn sqr(&self) -> f64 {
        self.x0 * self.x0 - self.spatial_sqr()
    }

    /// Signed square root of [`FourVector::sqr`]; negative for space-like vectors.
    pub fn abs(&self) -> f64 {
        let sqr = self.sqr();
        if sqr >= 0.0 {
            sqr.sqrt()
        } else {
            -(-sqr).sqrt()
        }
    }

    /// Euclidean square of the spatial part.
    pub fn spatial_sqr(&self) -> f64 {
        self.x1 * self.x1 + self.x2 * self.x2 + self.x3 * self.x3
    }

    /// Spatial components as an array.
    pub fn spatial(&self) -> [f64; 3] {
        [self.x1, self.x2, self.x3]
    }

    /// Three-velocity `p / E` when the vector is a momentum.
    ///
    /// Returns the zero vector for a non-positive time component.
    pub fn velocity(&self) -> [f64; 3] {
        if self.x0 > 0.0 {
            [self.x1 / self.x0, self.x2 / self.x0, self.x3 / self.x0]
        } else {
            [0.0; 3]
        }
    }
}
