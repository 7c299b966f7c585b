//! Model records and utility parameter sets.

use crate::error::{ApArError, Result};
use serde::{Deserialize, Serialize};

/// The five utilities that parameterize the three-way decision between
/// treating everyone, treating no one, and testing first.
///
/// By convention `u_tn >= u_tp >= u_fp >= u_fn`, with `u_tn = 1` and
/// `u_fn = 0`. The ordering is advisory and never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilitySet {
    /// Utility of a true negative.
    pub u_tn: f64,
    /// Utility of a true positive.
    pub u_tp: f64,
    /// Utility of a false negative.
    pub u_fn: f64,
    /// Utility of a false positive.
    pub u_fp: f64,
    /// Utility of undergoing the test itself (usually zero or a small harm).
    pub u_test: f64,
}

impl UtilitySet {
    pub fn new(u_tn: f64, u_tp: f64, u_fn: f64, u_fp: f64, u_test: f64) -> Self {
        Self {
            u_tn,
            u_tp,
            u_fn,
            u_fp,
            u_test,
        }
    }

    /// Build a set whose false-positive utility is derived from a
    /// model's misclassification cost ratio:
    /// `u_fp = u_tn - (u_tp - u_fn) / cost_ratio`.
    pub fn with_derived_fp(
        u_tn: f64,
        u_tp: f64,
        u_fn: f64,
        u_test: f64,
        cost_ratio: f64,
    ) -> Result<Self> {
        if cost_ratio == 0.0 || !cost_ratio.is_finite() {
            return Err(ApArError::InvalidCostRatio { value: cost_ratio });
        }
        Ok(Self {
            u_tn,
            u_tp,
            u_fn,
            u_fp: u_tn - (u_tp - u_fn) / cost_ratio,
            u_test,
        })
    }

    /// Whether the values follow the usual ordering
    /// `u_tn >= u_tp >= u_fp >= u_fn`.
    pub fn is_conventional(&self) -> bool {
        self.u_tn >= self.u_tp && self.u_tp >= self.u_fp && self.u_fp >= self.u_fn
    }
}

/// One model's ROC curve plus its misclassification cost ratio.
///
/// `tpr[i]` and `fpr[i]` describe the same operating point; the
/// classification cutoffs that produced the points are supplied
/// separately to [`crate::applicable_area`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocCurve {
    /// True-positive rate per operating point.
    pub tpr: Vec<f64>,
    /// False-positive rate per operating point.
    pub fpr: Vec<f64>,
    /// Ratio of false-positive to false-negative misclassification cost.
    pub cost_ratio: f64,
}

impl RocCurve {
    pub fn new(tpr: Vec<f64>, fpr: Vec<f64>, cost_ratio: f64) -> Result<Self> {
        let curve = Self {
            tpr,
            fpr,
            cost_ratio,
        };
        curve.validate()?;
        Ok(curve)
    }

    /// Number of operating points.
    pub fn len(&self) -> usize {
        self.tpr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tpr.is_empty()
    }

    /// Fail fast on malformed input rather than miscomputing.
    pub fn validate(&self) -> Result<()> {
        if self.tpr.len() != self.fpr.len() {
            return Err(ApArError::MisalignedSequences {
                left: "tpr",
                left_len: self.tpr.len(),
                right: "fpr",
                right_len: self.fpr.len(),
            });
        }
        if self.tpr.is_empty() {
            return Err(ApArError::EmptyCurve);
        }
        if self.cost_ratio == 0.0 || !self.cost_ratio.is_finite() {
            return Err(ApArError::InvalidCostRatio {
                value: self.cost_ratio,
            });
        }
        Ok(())
    }
}

/// Parse model curves from a JSON results-table export.
pub fn curves_from_json(json: &str) -> Result<Vec<RocCurve>> {
    let curves: Vec<RocCurve> = serde_json::from_str(json)?;
    for curve in &curves {
        curve.validate()?;
    }
    Ok(curves)
}
