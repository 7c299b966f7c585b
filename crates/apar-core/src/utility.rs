//! Expected-utility lines for the three management strategies.
//!
//! All three strategies are affine in the prior probability `x`:
//! treat-all and treat-none are fixed lines, while the test line also
//! depends on the operating point's sensitivity and specificity.

use crate::model::UtilitySet;
use apar_math::AffineLine;

impl UtilitySet {
    /// Expected utility of treating everyone at prior `x`.
    pub fn treat_all(&self, x: f64) -> f64 {
        x * self.u_tp + (1.0 - x) * self.u_fp
    }

    /// Expected utility of treating no one at prior `x`.
    pub fn treat_none(&self, x: f64) -> f64 {
        x * self.u_fn + (1.0 - x) * self.u_tn
    }

    /// Expected utility of testing first at prior `x`, for a test with
    /// the given sensitivity and specificity.
    pub fn test(&self, x: f64, sensitivity: f64, specificity: f64) -> f64 {
        x * sensitivity * self.u_tp
            + x * (1.0 - sensitivity) * self.u_fn
            + (1.0 - x) * (1.0 - specificity) * self.u_fp
            + (1.0 - x) * specificity * self.u_tn
            + self.u_test
    }

    /// The treat-all strategy as a line in the prior.
    pub fn treat_all_line(&self) -> AffineLine {
        AffineLine::new(self.u_tp - self.u_fp, self.u_fp)
    }

    /// The treat-none strategy as a line in the prior.
    pub fn treat_none_line(&self) -> AffineLine {
        AffineLine::new(self.u_fn - self.u_tn, self.u_tn)
    }

    /// The test strategy as a line in the prior, at one operating point.
    pub fn test_line(&self, sensitivity: f64, specificity: f64) -> AffineLine {
        let slope = sensitivity * self.u_tp + (1.0 - sensitivity) * self.u_fn
            - (1.0 - specificity) * self.u_fp
            - specificity * self.u_tn;
        let intercept = (1.0 - specificity) * self.u_fp + specificity * self.u_tn + self.u_test;
        AffineLine::new(slope, intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    fn utils() -> UtilitySet {
        UtilitySet::new(1.0, 0.8, 0.0, 0.6, 0.0)
    }

    #[test]
    fn treat_all_anchors() {
        let u = utils();
        assert!(approx_eq(u.treat_all(0.0), u.u_fp, 1e-12));
        assert!(approx_eq(u.treat_all(1.0), u.u_tp, 1e-12));
    }

    #[test]
    fn treat_none_anchors() {
        let u = utils();
        assert!(approx_eq(u.treat_none(0.0), u.u_tn, 1e-12));
        assert!(approx_eq(u.treat_none(1.0), u.u_fn, 1e-12));
    }

    #[test]
    fn lines_agree_with_pointwise_values() {
        let u = utils();
        for &x in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx_eq(u.treat_all_line().eval(x), u.treat_all(x), 1e-12));
            assert!(approx_eq(
                u.treat_none_line().eval(x),
                u.treat_none(x),
                1e-12
            ));
            assert!(approx_eq(
                u.test_line(0.9, 0.7).eval(x),
                u.test(x, 0.9, 0.7),
                1e-12
            ));
        }
    }

    #[test]
    fn perfect_test_dominates_between_the_thresholds() {
        // A free, error-free test is at least as good as either blanket
        // strategy everywhere in (0, 1).
        let u = UtilitySet::new(1.0, 0.8, 0.0, 0.6, 0.0);
        for &x in &[0.1, 0.5, 0.9] {
            let test = u.test(x, 1.0, 1.0);
            assert!(test >= u.treat_all(x) - 1e-12);
            assert!(test >= u.treat_none(x) - 1e-12);
        }
    }
}
