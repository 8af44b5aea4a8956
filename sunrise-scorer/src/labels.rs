//! Human-readable summaries of a score breakdown.
//!
//! Labels are derived from the [`ScoreBreakdown`] alone, so they can be
//! rebuilt from a stored breakdown without the original readings. Factors
//! scored from the neutral fallback are reported as not available rather
//! than rated.

use std::fmt;

use sunrise_core::{Factor, FactorResult, ScoreBreakdown, SignalSource};

/// Share of a factor's maximum, in percent, needed for each rating.
const EXCELLENT_PCT: u8 = 85;
const GOOD_PCT: u8 = 60;
const FAIR_PCT: u8 = 35;

/// Qualitative rating of one factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rating {
    /// At least 85% of the factor's maximum.
    Excellent,
    /// At least 60%.
    Good,
    /// At least 35%.
    Fair,
    /// Below 35%.
    Poor,
    /// No usable signal; the neutral score was used.
    NotAvailable,
}

impl Rating {
    /// Rate a factor result by its share of the maximum.
    ///
    /// # Examples
    /// ```
    /// use sunrise_core::FactorResult;
    /// use sunrise_scorer::Rating;
    ///
    /// assert_eq!(Rating::for_result(&FactorResult::measured(45.0, 25, 25)), Rating::Excellent);
    /// assert_eq!(Rating::for_result(&FactorResult::unavailable(8, 15)), Rating::NotAvailable);
    /// ```
    #[must_use]
    pub fn for_result(result: &FactorResult) -> Self {
        if !result.is_available() {
            return Self::NotAvailable;
        }
        match result.percent_of_max() {
            share if share >= EXCELLENT_PCT => Self::Excellent,
            share if share >= GOOD_PCT => Self::Good,
            share if share >= FAIR_PCT => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::NotAvailable => "Not available",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rating and explanation for one factor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorLabel {
    /// Factor described.
    pub factor: Factor,
    /// Qualitative rating.
    pub rating: Rating,
    /// One-sentence explanation, e.g. `Cloud cover: Excellent, 45% cover (25/25).`
    pub explanation: String,
}

impl FactorLabel {
    /// Describe one factor result.
    #[must_use]
    pub fn new(factor: Factor, result: &FactorResult) -> Self {
        let rating = Rating::for_result(result);
        let explanation = match (result.value, result.source) {
            (_, SignalSource::Unavailable) => {
                format!("{}: not available, neutral score used.", factor.title())
            }
            (Some(value), source) => format!(
                "{}: {rating}, {} ({}/{}).",
                factor.title(),
                reading(factor, value, source),
                result.score,
                result.max_score
            ),
            (None, _) => format!(
                "{}: {rating}, reading unknown ({}/{}).",
                factor.title(),
                result.score,
                result.max_score
            ),
        };
        Self {
            factor,
            rating,
            explanation,
        }
    }
}

fn reading(factor: Factor, value: f64, source: SignalSource) -> String {
    let estimated = source == SignalSource::Estimated;
    match factor {
        Factor::CloudCover => format!("{value:.0}% cover"),
        Factor::MultiLevelCloud if estimated => format!("cloud base near {value:.0} m"),
        Factor::MultiLevelCloud => format!("{value:.0}% high cloud"),
        Factor::Humidity => format!("{value:.0}% relative humidity"),
        Factor::PressureTrend => pressure_reading(value),
        Factor::Aod => format!("optical depth {value:.2}"),
        Factor::Visibility => format!("{value:.0} km visibility"),
        Factor::Weather => format!("{value:.0}% chance of precipitation"),
        Factor::Wind => format!("{value:.0} km/h wind"),
    }
}

fn pressure_reading(delta_hpa: f64) -> String {
    if delta_hpa < 0.0 {
        format!("falling {:.1} hPa", delta_hpa.abs())
    } else if delta_hpa > 0.0 {
        format!("rising {delta_hpa:.1} hPa")
    } else {
        "steady".to_owned()
    }
}

/// Labels for every factor plus context for the adjustments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BreakdownLabels {
    /// One label per factor, in breakdown order.
    pub factors: Vec<FactorLabel>,
    /// Context for a non-zero synergy adjustment.
    pub synergy: Option<String>,
    /// Context for the post-rain bonus.
    pub post_rain: Option<String>,
    /// Context for a non-zero solar adjustment.
    pub solar: Option<String>,
    /// Available factor with the highest share of its maximum.
    pub strongest: Option<Factor>,
    /// Available factor with the lowest share of its maximum.
    pub weakest: Option<Factor>,
}

impl BreakdownLabels {
    /// Build labels from a breakdown.
    ///
    /// # Examples
    /// ```
    /// use sunrise_core::{ExtendedSignals, RawSample};
    /// use sunrise_scorer::ScoringEngine;
    /// # use chrono::{DateTime, Utc};
    ///
    /// let sample = RawSample::new(45.0, 60.0, DateTime::<Utc>::default());
    /// let evaluation = ScoringEngine::new().evaluate(&sample, &ExtendedSignals::default());
    /// let labels = evaluation.labels();
    /// assert_eq!(labels.factors.len(), 8);
    /// assert_eq!(
    ///     labels.factors[4].explanation,
    ///     "Air clarity: not available, neutral score used."
    /// );
    /// ```
    #[must_use]
    pub fn from_breakdown(breakdown: &ScoreBreakdown) -> Self {
        Self {
            factors: breakdown
                .factors()
                .map(|(factor, result)| FactorLabel::new(factor, result))
                .collect(),
            synergy: synergy_context(breakdown.synergy),
            post_rain: breakdown.is_post_rain.then(|| {
                format!(
                    "Clearing after overnight rain adds {} points.",
                    breakdown.post_rain_bonus
                )
            }),
            solar: solar_context(breakdown.solar_bonus),
            strongest: breakdown.strongest_factor(),
            weakest: breakdown.weakest_factor(),
        }
    }

    /// Label for one factor.
    #[must_use]
    pub fn factor(&self, factor: Factor) -> Option<&FactorLabel> {
        self.factors.iter().find(|label| label.factor == factor)
    }
}

const fn plural(magnitude: u8) -> &'static str {
    if magnitude == 1 { "point" } else { "points" }
}

fn synergy_context(synergy: i8) -> Option<String> {
    let magnitude = synergy.unsigned_abs();
    match synergy.signum() {
        1 => Some(format!(
            "Cloud and humidity work together, adding {magnitude} {}.",
            plural(magnitude)
        )),
        -1 => Some(format!(
            "Conditions work against each other, costing {magnitude} {}.",
            plural(magnitude)
        )),
        _ => None,
    }
}

fn solar_context(solar: i8) -> Option<String> {
    let magnitude = solar.unsigned_abs();
    match solar.signum() {
        1 => Some(format!(
            "A low seasonal sun angle adds {magnitude} {}.",
            plural(magnitude)
        )),
        -1 => Some(format!(
            "A high seasonal sun angle costs {magnitude} {}.",
            plural(magnitude)
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sunrise_core::test_support::flat_breakdown;

    #[rstest]
    #[case(FactorResult::measured(45.0, 25, 25), Rating::Excellent)]
    #[case(FactorResult::measured(85.0, 9, 15), Rating::Good)]
    #[case(FactorResult::measured(90.0, 6, 15), Rating::Fair)]
    #[case(FactorResult::measured(97.0, 1, 15), Rating::Poor)]
    #[case(FactorResult::estimated(5000.0, 7, 10), Rating::Good)]
    #[case(FactorResult::unavailable(8, 15), Rating::NotAvailable)]
    fn ratings_follow_share_of_maximum(#[case] result: FactorResult, #[case] expected: Rating) {
        assert_eq!(Rating::for_result(&result), expected);
    }

    #[rstest]
    #[case(
        Factor::CloudCover,
        FactorResult::measured(45.0, 25, 25),
        "Cloud cover: Excellent, 45% cover (25/25)."
    )]
    #[case(
        Factor::MultiLevelCloud,
        FactorResult::estimated(6500.0, 9, 10),
        "Cloud layers: Excellent, cloud base near 6500 m (9/10)."
    )]
    #[case(
        Factor::PressureTrend,
        FactorResult::measured(-3.0, 10, 10),
        "Pressure trend: Excellent, falling 3.0 hPa (10/10)."
    )]
    #[case(
        Factor::Aod,
        FactorResult::unavailable(8, 15),
        "Air clarity: not available, neutral score used."
    )]
    fn explanations_describe_the_reading(
        #[case] factor: Factor,
        #[case] result: FactorResult,
        #[case] expected: &str,
    ) {
        assert_eq!(FactorLabel::new(factor, &result).explanation, expected);
    }

    #[rstest]
    fn context_appears_only_for_non_zero_adjustments() {
        let quiet = BreakdownLabels::from_breakdown(&flat_breakdown(50));
        assert_eq!(quiet.synergy, None);
        assert_eq!(quiet.post_rain, None);
        assert_eq!(quiet.solar, None);
        assert_eq!(quiet.strongest, None);

        let mut busy = flat_breakdown(50);
        busy.synergy = -1;
        busy.is_post_rain = true;
        busy.post_rain_bonus = 5;
        busy.solar_bonus = 2;
        let labels = BreakdownLabels::from_breakdown(&busy);
        assert_eq!(
            labels.synergy.as_deref(),
            Some("Conditions work against each other, costing 1 point.")
        );
        assert_eq!(
            labels.post_rain.as_deref(),
            Some("Clearing after overnight rain adds 5 points.")
        );
        assert_eq!(
            labels.solar.as_deref(),
            Some("A low seasonal sun angle adds 2 points.")
        );
    }

    #[rstest]
    fn every_factor_is_labelled_in_order() {
        let labels = BreakdownLabels::from_breakdown(&flat_breakdown(0));
        let order: Vec<Factor> = labels.factors.iter().map(|label| label.factor).collect();
        assert_eq!(order, Factor::ALL.to_vec());
        assert!(
            labels
                .factors
                .iter()
                .all(|label| label.rating == Rating::NotAvailable)
        );
        assert!(labels.factor(Factor::Wind).is_some());
    }
}
