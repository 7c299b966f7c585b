//! Envelope repair for the lower/upper threshold sequences.
//!
//! Raw sweep output contains undefined entries (no crossing inside
//! [0, 1]) and isolated 0/1 flips near the ends of the curve where the
//! operating points stop being informative. The passes here fill the
//! undefined entries, smooth the flips, and line the classification
//! cutoffs up against the repaired envelopes. Every pass returns a
//! fresh vector; inputs are never mutated.

use crate::thresholds::UNDEFINED_PRIOR;
use serde::{Deserialize, Serialize};

/// Which envelope a boundary sequence represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Lower,
    Upper,
}

/// Replace undefined entries by sequence half.
///
/// Lower-bound sequences fill the first half with 1 (testing starts
/// out dominated, so the envelope opens shut) and the second half with
/// 0; upper-bound sequences fill with 0 throughout. The halves split
/// at `len / 2` compared as floats, so the exact-midpoint index of an
/// even-length sequence is left untouched. Sequences of length <= 1
/// pass through unchanged.
pub fn fill_undefined(seq: &[f64], bound: Bound) -> Vec<f64> {
    let mut out = seq.to_vec();
    let len = out.len();
    if len <= 1 {
        return out;
    }
    let mid = len as f64 / 2.0;
    for (i, value) in out.iter_mut().enumerate() {
        if *value != UNDEFINED_PRIOR {
            continue;
        }
        let pos = i as f64;
        if pos < mid {
            *value = match bound {
                Bound::Lower => 1.0,
                Bound::Upper => 0.0,
            };
        } else if pos > mid {
            *value = 0.0;
        }
    }
    out
}

/// Smooth isolated 0/1 flips the filling pass leaves behind.
///
/// A 1 whose neighbors two and three steps toward the nearer end
/// strictly climb is an outlier dip and becomes 0; a 0 whose far
/// neighbors strictly fall is an outlier spike and becomes 1.
/// Positions whose far neighbors would fall outside the sequence are
/// skipped. A trailing 0 directly after a nonzero entry is pulled up
/// to that entry so the envelope does not cliff at the end.
pub fn smooth_outliers(seq: &[f64]) -> Vec<f64> {
    let mut out = seq.to_vec();
    let len = out.len();
    let mid = len as f64 / 2.0;
    for i in 0..len {
        let pos = i as f64;
        if pos < mid && i + 3 < len {
            if out[i] == 1.0 && out[i + 2] > out[i + 1] && out[i + 3] > out[i + 2] {
                out[i] = 0.0;
            } else if out[i] == 0.0 && out[i + 2] < out[i + 1] && out[i + 3] < out[i + 2] {
                out[i] = 1.0;
            }
        }
        if pos > mid && i >= 3 {
            if out[i] == 1.0 && out[i - 2] > out[i - 1] && out[i - 3] > out[i - 2] {
                out[i] = 0.0;
            } else if out[i] == 0.0 && out[i - 2] < out[i - 1] && out[i - 3] < out[i - 2] {
                out[i] = 1.0;
            }
        }
        if i + 1 == len && i >= 1 && out[i] == 0.0 && out[i - 1] != 0.0 {
            out[i] = out[i - 1];
        }
    }
    out
}

/// Clamp classification cutoffs down to 1.
///
/// ROC tooling pads the curve with a synthetic cutoff above the
/// probability range; anything above 1 is meaningless as a cutoff.
pub fn clamp_cutoffs(cutoffs: &[f64]) -> Vec<f64> {
    cutoffs
        .iter()
        .map(|&c| if c > 1.0 { 1.0 } else { c })
        .collect()
}

/// Classification cutoffs and repaired envelopes, mutually
/// index-aligned and ready for integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignedEnvelopes {
    /// Cutoffs in ascending order.
    pub cutoffs: Vec<f64>,
    pub lowers: Vec<f64>,
    pub uppers: Vec<f64>,
}

/// Repair both envelopes and line the cutoffs up against them.
///
/// When the final cutoff is the degenerate 0, one more 0 cutoff is
/// appended and a 0 entry is prepended to both envelopes, with the
/// former first envelope entry overwritten by the second before the
/// prepend. Cutoffs are then reversed into ascending order; the
/// envelopes keep their orientation, which matches them index-for-index
/// with the reversed cutoffs.
pub fn align_cutoffs(cutoffs: &[f64], lowers: &[f64], uppers: &[f64]) -> AlignedEnvelopes {
    let mut lowers = smooth_outliers(&fill_undefined(lowers, Bound::Lower));
    let mut uppers = smooth_outliers(&fill_undefined(uppers, Bound::Upper));
    let mut cutoffs = clamp_cutoffs(cutoffs);

    if cutoffs.last() == Some(&0.0) {
        cutoffs.push(0.0);
        if lowers.len() > 1 {
            lowers[0] = lowers[1];
        }
        if uppers.len() > 1 {
            uppers[0] = uppers[1];
        }
        lowers.insert(0, 0.0);
        uppers.insert(0, 0.0);
    }
    cutoffs.reverse();

    AlignedEnvelopes {
        cutoffs,
        lowers,
        uppers,
    }
}
