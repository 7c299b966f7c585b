//! Strategy curve sampling for external plotting.
//!
//! Produces plot-ready series only; rendering belongs to the caller.

use crate::model::UtilitySet;
use serde::{Deserialize, Serialize};

/// Expected-utility series for the three strategies over an evenly
/// spaced grid of priors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyCurves {
    pub priors: Vec<f64>,
    pub treat_all: Vec<f64>,
    pub test: Vec<f64>,
    pub treat_none: Vec<f64>,
}

/// Sample the three strategy lines at `points` evenly spaced priors in
/// [0, 1]. Fewer than two points makes no grid; the count is raised to 2.
pub fn sample_strategies(
    utils: &UtilitySet,
    sensitivity: f64,
    specificity: f64,
    points: usize,
) -> StrategyCurves {
    let points = points.max(2);
    let step = 1.0 / (points - 1) as f64;
    let mut curves = StrategyCurves {
        priors: Vec::with_capacity(points),
        treat_all: Vec::with_capacity(points),
        test: Vec::with_capacity(points),
        treat_none: Vec::with_capacity(points),
    };
    for i in 0..points {
        let x = (i as f64 * step).min(1.0);
        curves.priors.push(x);
        curves.treat_all.push(utils.treat_all(x));
        curves.test.push(utils.test(x, sensitivity, specificity));
        curves.treat_none.push(utils.treat_none(x));
    }
    curves
}
