//! Priority score for brainstormed solutions.

/// Computes a solution's priority score: impact per unit of effort.
///
/// Returns `0.0` when `effort` is zero. Values outside the 1-5 slider range
/// are not rejected here.
pub fn compute_score(effort: u8, impact: u8) -> f64 {
    if effort > 0 {
        f64::from(impact) / f64::from(effort)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn score_is_impact_over_effort() {
        assert_eq!(compute_score(3, 3), 1.0);
        assert_eq!(compute_score(1, 5), 5.0);
        assert_eq!(compute_score(5, 1), 0.2);
        assert_eq!(compute_score(4, 2), 0.5);
    }

    #[test]
    fn zero_effort_scores_zero() {
        assert_eq!(compute_score(0, 5), 0.0);
        assert_eq!(compute_score(0, 0), 0.0);
    }

    proptest! {
        #[test]
        fn score_matches_ratio_on_slider_range(effort in 1u8..=5, impact in 1u8..=5) {
            let score = compute_score(effort, impact);
            prop_assert_eq!(score, f64::from(impact) / f64::from(effort));
            prop_assert!(score >= 0.2 && score <= 5.0);
        }

        #[test]
        fn zero_effort_always_scores_zero(impact in any::<u8>()) {
            prop_assert_eq!(compute_score(0, impact), 0.0);
        }
    }
}
