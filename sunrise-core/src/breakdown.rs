//! Scored output: per-factor results and the assembled breakdown.

use std::fmt;

/// The eight independently scored factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Factor {
    /// Total cloud cover.
    CloudCover,
    /// Cloud distribution across altitude bands.
    MultiLevelCloud,
    /// Relative humidity.
    Humidity,
    /// Pressure trend across the pre-dawn window.
    PressureTrend,
    /// Aerosol optical depth.
    Aod,
    /// Horizontal visibility.
    Visibility,
    /// Precipitation and adverse-condition gate.
    Weather,
    /// Wind speed.
    Wind,
}

impl Factor {
    /// Every factor in breakdown order.
    pub const ALL: [Self; 8] = [
        Self::CloudCover,
        Self::MultiLevelCloud,
        Self::Humidity,
        Self::PressureTrend,
        Self::Aod,
        Self::Visibility,
        Self::Weather,
        Self::Wind,
    ];

    /// Stable machine-readable name.
    ///
    /// # Examples
    /// ```
    /// use sunrise_core::Factor;
    ///
    /// assert_eq!(Factor::PressureTrend.as_str(), "pressure_trend");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CloudCover => "cloud_cover",
            Self::MultiLevelCloud => "multi_level_cloud",
            Self::Humidity => "humidity",
            Self::PressureTrend => "pressure_trend",
            Self::Aod => "aod",
            Self::Visibility => "visibility",
            Self::Weather => "weather",
            Self::Wind => "wind",
        }
    }

    /// Short human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CloudCover => "Cloud cover",
            Self::MultiLevelCloud => "Cloud layers",
            Self::Humidity => "Humidity",
            Self::PressureTrend => "Pressure trend",
            Self::Aod => "Air clarity",
            Self::Visibility => "Visibility",
            Self::Weather => "Weather",
            Self::Wind => "Wind",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the input behind a factor score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SignalSource {
    /// Scored from the signal the factor is designed for.
    Measured,
    /// Scored from a weaker substitute signal.
    Estimated,
    /// No usable signal; the factor holds its neutral score.
    Unavailable,
}

/// Outcome of one factor scorer.
///
/// The constructors clamp `score` into `0..=max_score`, so the invariant
/// holds for every value a scorer can produce.
///
/// # Examples
/// ```
/// use sunrise_core::{FactorResult, SignalSource};
///
/// let result = FactorResult::measured(45.0, 30, 25);
/// assert_eq!(result.score, 25);
/// assert_eq!(result.source, SignalSource::Measured);
///
/// let neutral = FactorResult::unavailable(8, 15);
/// assert_eq!(neutral.value, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FactorResult {
    /// The normalised input the score was derived from.
    pub value: Option<f64>,
    /// Sub-score in `0..=max_score`.
    pub score: u8,
    /// Maximum attainable sub-score for the factor.
    pub max_score: u8,
    /// Provenance of `value`.
    pub source: SignalSource,
}

impl FactorResult {
    /// Result scored from the factor's own signal.
    #[must_use]
    pub fn measured(value: f64, score: u8, max_score: u8) -> Self {
        Self {
            value: Some(value),
            score: score.min(max_score),
            max_score,
            source: SignalSource::Measured,
        }
    }

    /// Result scored from a substitute signal.
    #[must_use]
    pub fn estimated(value: f64, score: u8, max_score: u8) -> Self {
        Self {
            source: SignalSource::Estimated,
            ..Self::measured(value, score, max_score)
        }
    }

    /// Neutral result used when no usable signal exists.
    #[must_use]
    pub fn unavailable(neutral_score: u8, max_score: u8) -> Self {
        Self {
            value: None,
            score: neutral_score.min(max_score),
            max_score,
            source: SignalSource::Unavailable,
        }
    }

    /// Whether the factor was scored from real data.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.source != SignalSource::Unavailable
    }

    /// Score as a percentage of the maximum, rounded down.
    #[must_use]
    pub fn percent_of_max(&self) -> u8 {
        if self.max_score == 0 {
            return 0;
        }
        let scaled = u16::from(self.score) * 100;
        u8::try_from(scaled.div_euclid(u16::from(self.max_score))).unwrap_or(100)
    }
}

/// Every component of a computed sunrise score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreBreakdown {
    /// Total cloud cover factor.
    pub cloud_cover: FactorResult,
    /// Cloud layer distribution factor.
    pub multi_level_cloud: FactorResult,
    /// Humidity factor.
    pub humidity: FactorResult,
    /// Pressure trend factor.
    pub pressure_trend: FactorResult,
    /// Aerosol optical depth factor.
    pub aod: FactorResult,
    /// Visibility factor.
    pub visibility: FactorResult,
    /// Weather-condition gate.
    pub weather: FactorResult,
    /// Wind factor.
    pub wind: FactorResult,
    /// Cross-factor interaction adjustment.
    pub synergy: i8,
    /// Additive post-rain bonus (zero or the configured constant).
    pub post_rain_bonus: u8,
    /// Whether post-rain clearing was detected.
    pub is_post_rain: bool,
    /// Seasonal solar-angle adjustment.
    pub solar_bonus: i8,
    /// Final clamped score.
    pub final_score: u8,
}

impl ScoreBreakdown {
    /// Iterate over `(factor, result)` pairs in breakdown order.
    pub fn factors(&self) -> impl Iterator<Item = (Factor, &FactorResult)> {
        Factor::ALL.into_iter().map(|factor| (factor, self.factor(factor)))
    }

    /// Borrow the result for one factor.
    #[must_use]
    pub const fn factor(&self, factor: Factor) -> &FactorResult {
        match factor {
            Factor::CloudCover => &self.cloud_cover,
            Factor::MultiLevelCloud => &self.multi_level_cloud,
            Factor::Humidity => &self.humidity,
            Factor::PressureTrend => &self.pressure_trend,
            Factor::Aod => &self.aod,
            Factor::Visibility => &self.visibility,
            Factor::Weather => &self.weather,
            Factor::Wind => &self.wind,
        }
    }

    /// Sum of the factor scores.
    #[must_use]
    pub fn factor_total(&self) -> i32 {
        self.factors()
            .map(|(_, result)| i32::from(result.score))
            .sum()
    }

    /// Sum of the factor scores plus synergy, before adjustments.
    #[must_use]
    pub fn base_score(&self) -> i32 {
        self.factor_total() + i32::from(self.synergy)
    }

    /// Base score plus both adjustments, before the final clamp.
    #[must_use]
    pub fn unclamped_total(&self) -> i32 {
        self.base_score() + i32::from(self.post_rain_bonus) + i32::from(self.solar_bonus)
    }

    /// Available factor with the highest share of its maximum.
    ///
    /// Ties resolve to the factor listed first.
    #[must_use]
    pub fn strongest_factor(&self) -> Option<Factor> {
        self.available()
            .fold(None, |best: Option<(Factor, u8)>, (factor, share)| match best {
                Some((_, best_share)) if best_share >= share => best,
                _ => Some((factor, share)),
            })
            .map(|(factor, _)| factor)
    }

    /// Available factor with the lowest share of its maximum.
    ///
    /// Ties resolve to the factor listed first.
    #[must_use]
    pub fn weakest_factor(&self) -> Option<Factor> {
        self.available()
            .fold(None, |worst: Option<(Factor, u8)>, (factor, share)| match worst {
                Some((_, worst_share)) if worst_share <= share => worst,
                _ => Some((factor, share)),
            })
            .map(|(factor, _)| factor)
    }

    fn available(&self) -> impl Iterator<Item = (Factor, u8)> + '_ {
        self.factors()
            .filter(|(_, result)| result.is_available())
            .map(|(factor, result)| (factor, result.percent_of_max()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            cloud_cover: FactorResult::measured(45.0, 25, 25),
            multi_level_cloud: FactorResult::unavailable(5, 10),
            humidity: FactorResult::measured(88.0, 11, 15),
            pressure_trend: FactorResult::measured(-3.0, 10, 10),
            aod: FactorResult::measured(0.5, 6, 15),
            visibility: FactorResult::measured(12.0, 4, 5),
            weather: FactorResult::measured(10.0, 10, 10),
            wind: FactorResult::measured(8.0, 5, 5),
            synergy: -1,
            post_rain_bonus: 5,
            is_post_rain: true,
            solar_bonus: 2,
            final_score: 91,
        }
    }

    #[rstest]
    fn totals_follow_the_assembly_formula(breakdown: ScoreBreakdown) {
        assert_eq!(breakdown.factor_total(), 76);
        assert_eq!(breakdown.base_score(), 75);
        assert_eq!(breakdown.unclamped_total(), 82);
    }

    #[rstest]
    fn strongest_and_weakest_skip_unavailable_factors(breakdown: ScoreBreakdown) {
        assert_eq!(breakdown.strongest_factor(), Some(Factor::CloudCover));
        assert_eq!(breakdown.weakest_factor(), Some(Factor::Aod));
    }

    #[rstest]
    fn factors_iterate_in_breakdown_order(breakdown: ScoreBreakdown) {
        let order: Vec<Factor> = breakdown.factors().map(|(factor, _)| factor).collect();
        assert_eq!(order, Factor::ALL.to_vec());
    }

    #[rstest]
    #[case(FactorResult::measured(1.0, 40, 25), 25)]
    #[case(FactorResult::estimated(1.0, 7, 10), 7)]
    #[case(FactorResult::unavailable(20, 15), 15)]
    fn constructors_clamp_scores(#[case] result: FactorResult, #[case] expected: u8) {
        assert_eq!(result.score, expected);
        assert!(result.score <= result.max_score);
    }

    #[rstest]
    fn percent_of_max_handles_zero_maximum() {
        assert_eq!(FactorResult::measured(1.0, 0, 0).percent_of_max(), 0);
        assert_eq!(FactorResult::measured(1.0, 3, 4).percent_of_max(), 75);
    }
}
