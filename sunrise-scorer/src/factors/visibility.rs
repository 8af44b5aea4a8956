//! Horizontal visibility, a supporting signal to AOD.

use sunrise_core::{FactorResult, RawSample, VisibilityConfig};

/// Visibility sub-score.
#[must_use]
pub fn visibility_points(visibility_km: f64, config: &VisibilityConfig) -> u8 {
    config.steps.at_or_above(visibility_km).min(config.max_score)
}

/// Score visibility, or the neutral score when it is unusable.
#[must_use]
pub fn score_visibility(sample: &RawSample, config: &VisibilityConfig) -> FactorResult {
    sample.usable_visibility().map_or_else(
        || {
            log::debug!("visibility unusable; using neutral score {}", config.neutral_score);
            FactorResult::unavailable(config.neutral_score, config.max_score)
        },
        |visibility| {
            FactorResult::measured(
                visibility,
                visibility_points(visibility, config),
                config.max_score,
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(40.0, 5)]
    #[case(20.0, 5)]
    #[case(12.0, 4)]
    #[case(5.0, 3)]
    #[case(3.5, 2)]
    #[case(1.0, 1)]
    #[case(0.4, 0)]
    fn coarse_steps(#[case] visibility: f64, #[case] expected: u8) {
        assert_eq!(visibility_points(visibility, &VisibilityConfig::default()), expected);
    }
}
