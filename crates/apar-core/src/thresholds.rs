//! Prior-probability thresholds at a single ROC operating point.

use crate::model::UtilitySet;
use apar_math::clamp_unit;
use serde::{Deserialize, Serialize};

/// Sentinel for "the two strategy lines never cross inside [0, 1]".
///
/// Envelope repair consumes this value downstream; it is part of the
/// boundary-sequence contract, not an internal detail.
pub const UNDEFINED_PRIOR: f64 = -999.0;

/// The three prior thresholds formed by the strategy lines at one
/// operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorThresholds {
    /// Below this prior, treat-none beats testing.
    pub lower: f64,
    /// Where treat-all and treat-none break even. Independent of the
    /// operating point.
    pub star: f64,
    /// Above this prior, treat-all beats testing.
    pub upper: f64,
}

/// Solve for the three thresholds at one operating point.
///
/// Each threshold is the crossing of two affine utility lines, so a
/// single division suffices. Roots outside [0, 1] are clamped to the
/// nearest bound; parallel lines (a degenerate test that collapses
/// onto a blanket strategy) yield [`UNDEFINED_PRIOR`].
pub fn prior_thresholds(sensitivity: f64, specificity: f64, utils: &UtilitySet) -> PriorThresholds {
    let treat_all = utils.treat_all_line();
    let treat_none = utils.treat_none_line();
    let test = utils.test_line(sensitivity, specificity);

    PriorThresholds {
        lower: settle(treat_none.intersect_x(&test)),
        star: settle(treat_all.intersect_x(&treat_none)),
        upper: settle(treat_all.intersect_x(&test)),
    }
}

/// Clamp a crossing into [0, 1]; an absent crossing becomes the sentinel.
fn settle(root: Option<f64>) -> f64 {
    match root {
        None => UNDEFINED_PRIOR,
        Some(x) => clamp_unit(x),
    }
}
