//! Error types for the ApAr engine.
//!
//! Expected edge cases (missing crossings, out-of-range roots,
//! degenerate curves) are absorbed by sentinels and clamps in the
//! pipeline; these errors cover genuinely malformed input.

use thiserror::Error;

/// Result type alias for ApAr operations.
pub type Result<T> = std::result::Result<T, ApArError>;

/// Errors raised while validating model input.
#[derive(Debug, Error)]
pub enum ApArError {
    #[error("misaligned input sequences: {left} has {left_len} entries, {right} has {right_len}")]
    MisalignedSequences {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },
    #[error("invalid cost ratio: {value}")]
    InvalidCostRatio { value: f64 },
    #[error("model curve has no operating points")]
    EmptyCurve,
    #[error("failed to parse model records: {0}")]
    Parse(#[from] serde_json::Error),
}
