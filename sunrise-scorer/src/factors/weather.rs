//! Weather-condition gate.
//!
//! Not a quality gradient: the score starts at the maximum and loses points
//! for precipitation risk, falling precipitation and adverse conditions,
//! with a small credit for an explicitly clear report. It floors at zero.

use sunrise_core::{FactorResult, RawSample, SignalSource, WeatherConfig};

/// Adverse and favourable categories found in a weather description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conditions {
    /// Thunder, storms or squalls.
    pub storm: bool,
    /// Fog or mist.
    pub fog: bool,
    /// Haze, smoke or dust.
    pub haze: bool,
    /// Clear or sunny.
    pub clear: bool,
}

impl Conditions {
    /// Match `description` case-insensitively against the configured terms.
    ///
    /// # Examples
    /// ```
    /// use sunrise_core::WeatherConfig;
    /// use sunrise_scorer::Conditions;
    ///
    /// let conditions = Conditions::from_description("Thundery showers, mist", &WeatherConfig::default());
    /// assert!(conditions.storm && conditions.fog);
    /// assert!(!conditions.clear);
    /// ```
    #[must_use]
    pub fn from_description(description: &str, config: &WeatherConfig) -> Self {
        let lowered = description.to_lowercase();
        let mentions =
            |terms: &[String]| terms.iter().any(|term| lowered.contains(&term.to_lowercase()));
        Self {
            storm: mentions(&config.storm_terms),
            fog: mentions(&config.fog_terms),
            haze: mentions(&config.haze_terms),
            clear: mentions(&config.clear_terms),
        }
    }
}

/// Weather gate sub-score.
///
/// An unusable precipitation probability carries no penalty.
#[must_use]
pub fn weather_points(sample: &RawSample, config: &WeatherConfig) -> u8 {
    let conditions = Conditions::from_description(&sample.weather_description, config);
    let penalty = |applies: bool, points: u8| if applies { i32::from(points) } else { 0 };
    let precip = sample
        .usable_precip_probability()
        .map_or(0, |probability| {
            i32::from(config.precip_penalties.at_or_above(probability))
        });
    let deductions = precip
        + penalty(sample.has_active_precipitation, config.active_precip_penalty)
        + penalty(conditions.storm, config.storm_penalty)
        + penalty(conditions.fog, config.fog_penalty)
        + penalty(conditions.haze, config.haze_penalty);
    let credit = penalty(conditions.clear, config.clear_credit);
    let max = i32::from(config.max_score);
    let total = (max - deductions + credit).clamp(0, max);
    u8::try_from(total).unwrap_or(0)
}

/// Score the weather gate.
///
/// The result's value is the precipitation probability. When that is
/// unusable the score rests on the description alone and is reported as
/// [`SignalSource::Estimated`].
#[must_use]
pub fn score_weather(sample: &RawSample, config: &WeatherConfig) -> FactorResult {
    let score = weather_points(sample, config);
    sample.usable_precip_probability().map_or_else(
        || {
            log::debug!("precipitation probability unusable; gating on description only");
            FactorResult {
                value: None,
                source: SignalSource::Estimated,
                ..FactorResult::measured(0.0, score, config.max_score)
            }
        },
        |probability| FactorResult::measured(probability, score, config.max_score),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sunrise_core::test_support::equinox_timestamp;

    #[fixture]
    fn dry_sample() -> RawSample {
        RawSample::new(40.0, 60.0, equinox_timestamp())
    }

    #[rstest]
    #[case(0.0, false, "Partly cloudy", 10)]
    #[case(0.0, false, "Clear", 10)]
    #[case(25.0, false, "Clear", 9)]
    #[case(45.0, false, "Overcast", 6)]
    #[case(80.0, true, "Light rain", 0)]
    #[case(10.0, false, "Thunderstorm", 5)]
    #[case(10.0, false, "Mist", 6)]
    #[case(10.0, false, "Haze", 8)]
    #[case(90.0, true, "Thunderstorm with fog", 0)]
    fn penalties_accumulate_and_floor(
        mut dry_sample: RawSample,
        #[case] probability: f64,
        #[case] active: bool,
        #[case] description: &str,
        #[case] expected: u8,
    ) {
        dry_sample.precip_probability_pct = probability;
        dry_sample.has_active_precipitation = active;
        dry_sample.weather_description = description.to_owned();
        assert_eq!(weather_points(&dry_sample, &WeatherConfig::default()), expected);
    }

    #[rstest]
    fn clear_credit_never_exceeds_the_maximum(mut dry_sample: RawSample) {
        dry_sample.weather_description = "Clear and sunny".to_owned();
        assert_eq!(weather_points(&dry_sample, &WeatherConfig::default()), 10);
    }

    #[rstest]
    fn unusable_probability_is_estimated(mut dry_sample: RawSample) {
        dry_sample.precip_probability_pct = f64::NAN;
        dry_sample.weather_description = "Haze".to_owned();
        let result = score_weather(&dry_sample, &WeatherConfig::default());
        assert_eq!(result.score, 8);
        assert_eq!(result.value, None);
        assert_eq!(result.source, SignalSource::Estimated);
    }
}
