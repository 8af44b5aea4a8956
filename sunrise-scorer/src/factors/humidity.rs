//! Relative humidity.

use sunrise_core::{FactorResult, HumidityConfig, RawSample};

/// Humidity sub-score from the configured step table.
///
/// # Examples
/// ```
/// use sunrise_core::HumidityConfig;
/// use sunrise_scorer::humidity_points;
///
/// let config = HumidityConfig::default();
/// assert_eq!(humidity_points(50.0, &config), 15);
/// assert_eq!(humidity_points(88.0, &config), 11);
/// assert_eq!(humidity_points(95.0, &config), 9);
/// ```
#[must_use]
pub fn humidity_points(humidity_pct: f64, config: &HumidityConfig) -> u8 {
    config.steps.at_or_below(humidity_pct).min(config.max_score)
}

/// Score relative humidity, or the neutral score when it is unusable.
#[must_use]
pub fn score_humidity(sample: &RawSample, config: &HumidityConfig) -> FactorResult {
    sample.usable_humidity().map_or_else(
        || {
            log::debug!("humidity unusable; using neutral score {}", config.neutral_score);
            FactorResult::unavailable(config.neutral_score, config.max_score)
        },
        |humidity| {
            FactorResult::measured(humidity, humidity_points(humidity, config), config.max_score)
        },
    )
}
