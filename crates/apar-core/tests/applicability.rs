//! End-to-end applicability scenarios.

use apar_core::{
    align_cutoffs, applicable_area, curves_from_json, ApArError, RocCurve, UtilitySet,
};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn base_utils() -> UtilitySet {
    // u_fp is derived from the curve's cost ratio inside the engine.
    UtilitySet::new(1.0, 0.8, 0.0, 0.0, 0.0)
}

#[test]
fn three_point_model_golden_value() {
    let curve = RocCurve::new(vec![1.0, 0.8, 0.5], vec![0.5, 0.2, 0.0], 1.0).unwrap();
    let report = applicable_area(&curve, &[0.1, 0.5, 0.9], &base_utils(), 0.3).unwrap();

    assert!(approx_eq(report.area, 0.467, 1e-9));
    assert_eq!(report.widest_range_index, Some(0));
    assert!(!report.within_range);
    assert_eq!(report.least_viable_prior, 1.0);
    assert!(approx_eq(report.derived_u_fp, 0.2, 1e-12));
}

#[test]
fn golden_value_survives_json_loading() {
    let json = r#"[{"tpr": [1.0, 0.8, 0.5], "fpr": [0.5, 0.2, 0.0], "cost_ratio": 1.0}]"#;
    let curves = curves_from_json(json).unwrap();
    let report = applicable_area(&curves[0], &[0.1, 0.5, 0.9], &base_utils(), 0.3).unwrap();
    assert!(approx_eq(report.area, 0.467, 1e-9));
}

#[test]
fn degenerate_operating_point_is_repaired_into_the_envelope() {
    // The first operating point (tpr 1, fpr 1) collapses the test line
    // onto treat-all, so its upper threshold starts undefined; filling
    // drops it to 0 and smoothing lifts it back to 1 against the
    // falling neighbors. Cost ratio 2 derives u_fp = 0.6.
    let curve = RocCurve::new(
        vec![1.0, 0.8, 0.5, 0.2],
        vec![1.0, 0.2, 0.05, 0.0],
        2.0,
    )
    .unwrap();
    let report = applicable_area(&curve, &[1.8, 0.9, 0.5, 0.1], &base_utils(), 0.3).unwrap();

    assert!(approx_eq(report.area, 0.482, 1e-9));
    assert_eq!(report.widest_range_index, Some(0));
    assert!(approx_eq(report.derived_u_fp, 0.6, 1e-12));
}

#[test]
fn trailing_zero_cutoff_extends_the_aligned_walk() {
    let lowers = [0.2, 0.3, 0.4];
    let uppers = [0.8, 0.7, 0.6];

    let padded = align_cutoffs(&[0.9, 0.5, 0.0], &lowers, &uppers);
    let plain = align_cutoffs(&[0.9, 0.5, 0.1], &lowers, &uppers);

    assert_eq!(padded.cutoffs.len(), plain.cutoffs.len() + 1);
    assert_eq!(padded.lowers.len(), plain.lowers.len() + 1);
    assert_eq!(padded.uppers.len(), plain.uppers.len() + 1);
}

#[test]
fn trailing_zero_cutoff_golden_value() {
    let curve = RocCurve::new(vec![1.0, 0.8, 0.5], vec![0.5, 0.2, 0.0], 1.0).unwrap();
    let report = applicable_area(&curve, &[0.9, 0.5, 0.0], &base_utils(), 0.3).unwrap();

    // The padded leading segment has coincident cutoffs and adds
    // nothing; the remaining strips integrate to 77/150.
    assert!(approx_eq(report.area, 0.513, 1e-9));
    assert_eq!(report.widest_range_index, Some(1));
}

#[test]
fn single_point_curve_yields_zero_area() {
    let curve = RocCurve::new(vec![0.7], vec![0.3], 1.0).unwrap();
    let report = applicable_area(&curve, &[0.5], &base_utils(), 0.3).unwrap();
    assert_eq!(report.area, 0.0);
    assert_eq!(report.widest_range_index, None);
}

#[test]
fn misaligned_model_is_rejected() {
    let curve = RocCurve {
        tpr: vec![1.0, 0.5],
        fpr: vec![0.5],
        cost_ratio: 1.0,
    };
    let err = applicable_area(&curve, &[0.9, 0.5], &base_utils(), 0.3).unwrap_err();
    assert!(matches!(err, ApArError::MisalignedSequences { .. }));
}

#[test]
fn cutoff_envelope_mismatch_is_rejected() {
    let curve = RocCurve::new(vec![1.0, 0.8, 0.5], vec![0.5, 0.2, 0.0], 1.0).unwrap();
    let err = applicable_area(&curve, &[0.9, 0.5], &base_utils(), 0.3).unwrap_err();
    assert!(matches!(
        err,
        ApArError::MisalignedSequences {
            left: "cutoffs",
            ..
        }
    ));
}
