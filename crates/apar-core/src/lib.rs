//! Applicability Area (ApAr) engine.
//!
//! Evaluates where a binary classifier is worth consulting at all: for
//! each operating point on the model's ROC curve, the prior-probability
//! window in which acting on the test carries more expected utility
//! than treating everyone or treating no one, integrated across all
//! classification cutoffs into a single area score.
//!
//! # Usage
//!
//! ```ignore
//! use apar_core::{applicable_area, RocCurve, UtilitySet};
//!
//! let curve = RocCurve::new(vec![1.0, 0.8, 0.5], vec![0.5, 0.2, 0.0], 1.0)?;
//! let utils = UtilitySet::new(1.0, 0.8, 0.0, 0.0, 0.0);
//! let report = applicable_area(&curve, &[0.1, 0.5, 0.9], &utils, 0.3)?;
//! println!("ApAr = {}", report.area);
//! ```

pub mod area;
pub mod curves;
pub mod envelope;
pub mod error;
pub mod model;
pub mod sweep;
pub mod thresholds;
mod utility;

pub use area::{applicable_area, ApplicabilityReport};
pub use curves::{sample_strategies, StrategyCurves};
pub use envelope::{
    align_cutoffs, clamp_cutoffs, fill_undefined, smooth_outliers, AlignedEnvelopes, Bound,
};
pub use error::{ApArError, Result};
pub use model::{curves_from_json, RocCurve, UtilitySet};
pub use sweep::{priors_over_roc, PriorSeries};
pub use thresholds::{prior_thresholds, PriorThresholds, UNDEFINED_PRIOR};
