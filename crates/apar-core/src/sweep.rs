//! Threshold sweep across a full ROC curve.

use crate::error::Result;
use crate::model::{RocCurve, UtilitySet};
use crate::thresholds::prior_thresholds;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lower/star/upper threshold sequences, index-aligned with the ROC
/// operating points that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorSeries {
    pub lowers: Vec<f64>,
    pub stars: Vec<f64>,
    pub uppers: Vec<f64>,
}

impl PriorSeries {
    pub fn len(&self) -> usize {
        self.lowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lowers.is_empty()
    }
}

/// Collect the prior thresholds for every operating point of a curve.
///
/// A single-point curve carries no usable trade-off information and
/// falls back to singleton zero sequences rather than an error.
pub fn priors_over_roc(curve: &RocCurve, utils: &UtilitySet) -> Result<PriorSeries> {
    curve.validate()?;

    if curve.len() == 1 {
        return Ok(PriorSeries {
            lowers: vec![0.0],
            stars: vec![0.0],
            uppers: vec![0.0],
        });
    }

    let mut series = PriorSeries {
        lowers: Vec::with_capacity(curve.len()),
        stars: Vec::with_capacity(curve.len()),
        uppers: Vec::with_capacity(curve.len()),
    };
    for (&tpr, &fpr) in curve.tpr.iter().zip(&curve.fpr) {
        let t = prior_thresholds(tpr, 1.0 - fpr, utils);
        series.lowers.push(t.lower);
        series.stars.push(t.star);
        series.uppers.push(t.upper);
    }
    debug!(points = series.len(), "swept prior thresholds over roc");
    Ok(series)
}
