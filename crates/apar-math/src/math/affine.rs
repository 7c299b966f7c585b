//! Closed-form affine line arithmetic.
//!
//! Every curve this workspace intersects is affine in its argument, so
//! crossings reduce to a single division. Parallel lines are detected
//! by comparing slopes within `PARALLEL_EPS` instead of dividing and
//! inspecting the result.

use serde::{Deserialize, Serialize};

/// Slope difference below which two lines count as parallel.
pub const PARALLEL_EPS: f64 = 1e-12;

/// A line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineLine {
    pub slope: f64,
    pub intercept: f64,
}

impl AffineLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Interpolant through two points. Callers guard `x0 != x1`.
    pub fn through(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let slope = (y1 - y0) / (x1 - x0);
        Self {
            slope,
            intercept: y0 - slope * x0,
        }
    }

    /// Value of the line at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// True when the slopes differ by less than `PARALLEL_EPS`.
    pub fn is_parallel_to(&self, other: &AffineLine) -> bool {
        (self.slope - other.slope).abs() < PARALLEL_EPS
    }

    /// Abscissa where this line crosses `other`, or `None` when the
    /// lines are parallel (coincident lines included).
    pub fn intersect_x(&self, other: &AffineLine) -> Option<f64> {
        if self.is_parallel_to(other) {
            return None;
        }
        Some((other.intercept - self.intercept) / (self.slope - other.slope))
    }
}
