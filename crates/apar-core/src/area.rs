//! Piecewise trapezoidal integration of the applicability envelope.

use crate::envelope::{align_cutoffs, AlignedEnvelopes};
use crate::error::{ApArError, Result};
use crate::model::{RocCurve, UtilitySet};
use crate::sweep::priors_over_roc;
use apar_math::{round_places, trapezoid_strip, AffineLine};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of an applicability evaluation for one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicabilityReport {
    /// Applicability area over the full cutoff range, in [0, 1].
    pub area: f64,
    /// Cutoff index with the widest applicable prior range, if any
    /// segment was fully valid.
    pub widest_range_index: Option<usize>,
    /// Whether the queried prior falls strictly inside the tracked
    /// min/max applicable priors. The trackers are never moved off
    /// their zero defaults yet, so this currently always reports false.
    pub within_range: bool,
    /// Minimum applicable prior tracked during the walk (currently
    /// never lowered from 1).
    pub least_viable_prior: f64,
    /// The false-positive utility derived from the model's cost ratio.
    pub derived_u_fp: f64,
}

struct Integration {
    area: f64,
    widest_range_index: Option<usize>,
}

/// Walk adjacent cutoff pairs and accumulate trapezoidal strips.
///
/// Three segment shapes contribute area: both ends valid (plain
/// trapezoid), the envelope opening up mid-segment (triangle from the
/// crossing), and the envelope closing mid-segment (triangle to the
/// crossing). Segments that stay closed, or whose interpolants are
/// parallel in a crossing case, contribute nothing.
fn integrate(aligned: &AlignedEnvelopes) -> Integration {
    let mut area = 0.0;
    let mut widest = 0.0;
    let mut widest_range_index = None;

    let n = aligned.lowers.len();
    for i in 0..n.saturating_sub(1) {
        let (lo0, lo1) = (aligned.lowers[i], aligned.lowers[i + 1]);
        let (up0, up1) = (aligned.uppers[i], aligned.uppers[i + 1]);
        let (x0, x1) = (aligned.cutoffs[i], aligned.cutoffs[i + 1]);

        if lo0 < up0 && lo1 < up1 {
            let range = up0 - lo0;
            if range > widest {
                widest = range;
                widest_range_index = Some(i);
            }
            area += trapezoid_strip(range, up1 - lo1, x1 - x0);
        } else if lo0 >= up0 && lo1 < up1 {
            if x0 != x1 {
                let lower = AffineLine::through(x0, lo0, x1, lo1);
                let upper = AffineLine::through(x0, up0, x1, up1);
                if let Some(crossing) = lower.intersect_x(&upper) {
                    area += trapezoid_strip(0.0, up1 - lo1, x1 - crossing);
                }
            }
        } else if lo0 < up0 && lo1 >= up1 && x0 != x1 {
            let lower = AffineLine::through(x0, lo0, x1, lo1);
            let upper = AffineLine::through(x0, up0, x1, up1);
            let crossing = lower.intersect_x(&upper).unwrap_or(0.0);
            area += trapezoid_strip(0.0, up0 - lo0, crossing - x1);
        }
    }

    Integration {
        area,
        widest_range_index,
    }
}

/// Compute the applicability area of a model.
///
/// The area integrates, across all classification cutoffs, the range
/// of priors for which testing carries more expected utility than both
/// treating everyone and treating no one. The supplied set's `u_fp` is
/// replaced by the value derived from the curve's cost ratio before
/// anything else runs.
pub fn applicable_area(
    curve: &RocCurve,
    cutoffs: &[f64],
    utils: &UtilitySet,
    query_prior: f64,
) -> Result<ApplicabilityReport> {
    let utils = UtilitySet::with_derived_fp(
        utils.u_tn,
        utils.u_tp,
        utils.u_fn,
        utils.u_test,
        curve.cost_ratio,
    )?;
    let series = priors_over_roc(curve, &utils)?;
    let aligned = align_cutoffs(cutoffs, &series.lowers, &series.uppers);
    if aligned.cutoffs.len() != aligned.lowers.len() {
        return Err(ApArError::MisalignedSequences {
            left: "cutoffs",
            left_len: aligned.cutoffs.len(),
            right: "envelopes",
            right_len: aligned.lowers.len(),
        });
    }

    let walk = integrate(&aligned);
    let area = round_places(walk.area, 3).min(1.0);
    debug!(area, points = aligned.lowers.len(), "applicability area computed");

    // TODO: track min/max applicable priors during the walk so the
    // within-range query can report true.
    let (min_prior, max_prior) = (0.0, 0.0);
    let least_viable_prior = 1.0;

    Ok(ApplicabilityReport {
        area,
        widest_range_index: walk.widest_range_index,
        within_range: query_prior > min_prior && query_prior < max_prior,
        least_viable_prior,
        derived_u_fp: utils.u_fp,
    })
}
