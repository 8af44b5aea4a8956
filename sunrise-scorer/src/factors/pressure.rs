//! Pressure trend across the pre-dawn window.
//!
//! Only the endpoint delta matters. A moderate fall marks a clearing front
//! and scores highest; a rapid fall means a storm is arriving.

use sunrise_core::{ExtendedSignals, FactorResult, PressureConfig};

/// Pressure sub-score for an endpoint delta in hPa (end minus start).
///
/// # Examples
/// ```
/// use sunrise_core::PressureConfig;
/// use sunrise_scorer::pressure_points;
///
/// let config = PressureConfig::default();
/// assert_eq!(pressure_points(-3.0, &config), 10);
/// assert_eq!(pressure_points(-7.0, &config), 2);
/// assert_eq!(pressure_points(0.1, &config), 5);
/// ```
#[expect(clippy::float_arithmetic, reason = "falls are negated thresholds")]
#[must_use]
pub fn pressure_points(delta_hpa: f64, config: &PressureConfig) -> u8 {
    let score = if delta_hpa < -config.storm_fall_hpa {
        config.storm_score
    } else if delta_hpa <= -config.clearing_fall_hpa {
        config.clearing_score
    } else if delta_hpa <= -config.small_fall_hpa {
        config.small_fall_score
    } else if delta_hpa < config.rise_hpa {
        config.stable_score
    } else {
        config.rising_score
    };
    score.min(config.max_score)
}

/// Score the pressure trend, or the neutral score when the series is
/// missing or too sparse.
#[must_use]
pub fn score_pressure(signals: &ExtendedSignals, config: &PressureConfig) -> FactorResult {
    signals.usable_pressure_delta().map_or_else(
        || {
            log::debug!(
                "pressure trend unavailable; using neutral score {}",
                config.neutral_score
            );
            FactorResult::unavailable(config.neutral_score, config.max_score)
        },
        |delta| FactorResult::measured(delta, pressure_points(delta, config), config.max_score),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sunrise_core::{PressureSeries, SignalSource};

    #[rstest]
    #[case(-8.0, 2)]
    #[case(-5.0, 10)]
    #[case(-2.0, 10)]
    #[case(-1.0, 7)]
    #[case(-0.5, 7)]
    #[case(-0.2, 5)]
    #[case(0.0, 5)]
    #[case(0.5, 4)]
    #[case(3.0, 4)]
    fn delta_bands(#[case] delta: f64, #[case] expected: u8) {
        assert_eq!(pressure_points(delta, &PressureConfig::default()), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(PressureSeries::new(vec![1012.0])))]
    #[case(Some(PressureSeries::new(vec![f64::NAN, 1010.0])))]
    #[case(Some(PressureSeries::new(Vec::new())))]
    fn sparse_series_is_neutral(#[case] series: Option<PressureSeries>) {
        let config = PressureConfig::default();
        let signals = ExtendedSignals {
            pressure_series_hpa: series,
            ..ExtendedSignals::default()
        };
        let result = score_pressure(&signals, &config);
        assert_eq!(result.score, config.neutral_score);
        assert_eq!(result.source, SignalSource::Unavailable);
    }
}
