//! Wind speed, on one of two named curves.

use sunrise_core::{FactorResult, RawSample, WindConfig, WindCurve};

/// Wind sub-score on the configured curve.
///
/// # Examples
/// ```
/// use sunrise_core::{WindConfig, WindCurve};
/// use sunrise_scorer::wind_points;
///
/// let mut config = WindConfig::default();
/// assert_eq!(wind_points(0.0, &config), 5);
/// config.curve = WindCurve::ModerateBreeze;
/// assert_eq!(wind_points(0.0, &config), 3);
/// assert_eq!(wind_points(12.0, &config), 5);
/// ```
#[must_use]
pub fn wind_points(speed_kmh: f64, config: &WindConfig) -> u8 {
    let score = match config.curve {
        WindCurve::CalmPreferred => config.calm_preferred.at_or_below(speed_kmh),
        WindCurve::ModerateBreeze => {
            let breeze = &config.moderate_breeze;
            if speed_kmh < breeze.dead_calm_below_kmh {
                breeze.dead_calm_score
            } else {
                breeze.steps.at_or_below(speed_kmh)
            }
        }
    };
    score.min(config.max_score)
}

/// Score wind speed, or the neutral score when it is unusable.
#[must_use]
pub fn score_wind(sample: &RawSample, config: &WindConfig) -> FactorResult {
    sample.usable_wind_speed().map_or_else(
        || {
            log::debug!("wind speed unusable; using neutral score {}", config.neutral_score);
            FactorResult::unavailable(config.neutral_score, config.max_score)
        },
        |speed| FactorResult::measured(speed, wind_points(speed, config), config.max_score),
    )
}
