//! Aerosol optical depth.
//!
//! A Goldilocks curve: a little aerosol scatters light into vivid colour,
//! pristine air under-scatters, and haze mutes everything.

use sunrise_core::{AodConfig, ExtendedSignals, FactorResult};

/// AOD sub-score.
///
/// # Examples
/// ```
/// use sunrise_core::AodConfig;
/// use sunrise_scorer::aod_points;
///
/// let config = AodConfig::default();
/// assert_eq!(aod_points(0.1, &config), 15);
/// assert_eq!(aod_points(0.01, &config), 12);
/// assert_eq!(aod_points(1.5, &config), 1);
/// ```
#[must_use]
pub fn aod_points(aod: f64, config: &AodConfig) -> u8 {
    let score = if aod < config.pristine_below {
        config.pristine_score
    } else if aod <= config.goldilocks_max {
        config.max_score
    } else {
        config.haze_steps.at_or_below(aod)
    };
    score.min(config.max_score)
}

/// Score AOD, or the neutral score for absent, negative or non-finite
/// readings.
#[must_use]
pub fn score_aod(signals: &ExtendedSignals, config: &AodConfig) -> FactorResult {
    signals.usable_aod().map_or_else(
        || {
            log::debug!("AOD unavailable; using neutral score {}", config.neutral_score);
            FactorResult::unavailable(config.neutral_score, config.max_score)
        },
        |aod| FactorResult::measured(aod, aod_points(aod, config), config.max_score),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 12)]
    #[case(0.04, 12)]
    #[case(0.05, 15)]
    #[case(0.15, 15)]
    #[case(0.2, 12)]
    #[case(0.35, 9)]
    #[case(0.5, 6)]
    #[case(0.7, 4)]
    #[case(0.9, 2)]
    #[case(2.5, 1)]
    fn goldilocks_curve(#[case] aod: f64, #[case] expected: u8) {
        assert_eq!(aod_points(aod, &AodConfig::default()), expected);
    }

    #[rstest]
    fn pristine_air_scores_below_the_peak() {
        let config = AodConfig::default();
        assert!(aod_points(0.01, &config) < aod_points(0.1, &config));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(-0.2))]
    #[case(Some(f64::NAN))]
    fn invalid_aod_is_neutral(#[case] aod: Option<f64>) {
        let config = AodConfig::default();
        let signals = ExtendedSignals {
            aerosol_optical_depth: aod,
            ..ExtendedSignals::default()
        };
        assert_eq!(
            score_aod(&signals, &config),
            FactorResult::unavailable(config.neutral_score, config.max_score)
        );
    }
}
