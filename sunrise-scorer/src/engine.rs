//! Score assembly.
//!
//! The engine runs the eight factor scorers, the synergy adjuster and the
//! adjustment layer, then clamps:
//!
//! ```text
//! base  = Σ factor scores + synergy
//! final = clamp(base + post-rain bonus + solar bonus, 0, 100)
//! ```
//!
//! When the fog override fires the final score is further capped at the
//! configured fog ceiling, so no combination of favourable factors can lift
//! a fogged-out sunrise into a recommendation. A saturated overcast in mist
//! is capped the same way at the lower murk ceiling.

use sunrise_core::{
    ConfigError, ExtendedSignals, Observation, RawSample, Recommendation, ScoreBreakdown,
    ScoringConfig, SunriseScorer, Verdict,
};

use crate::factors::{
    composition_hint, score_aod, score_cloud_cover, score_cloud_layers, score_humidity,
    score_pressure, score_visibility, score_weather, score_wind,
};
use crate::{BreakdownLabels, Synergy, post_rain, solar_bonus, synergy};

/// Final score with its breakdown and both tier mappings.
///
/// # Examples
/// ```
/// use sunrise_core::{ExtendedSignals, RawSample, Recommendation};
/// use sunrise_scorer::ScoringEngine;
/// # use chrono::{DateTime, Utc};
///
/// let engine = ScoringEngine::new();
/// let mut sample = RawSample::new(45.0, 60.0, DateTime::<Utc>::default());
/// sample.visibility_km = 0.5;
/// let evaluation = engine.evaluate(&sample, &ExtendedSignals::default());
/// assert!(evaluation.score <= 30);
/// assert_eq!(evaluation.recommendation, Recommendation::No);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Final score in `0..=100`.
    pub score: u8,
    /// Per-factor breakdown.
    pub breakdown: ScoreBreakdown,
    /// Qualitative tier.
    pub verdict: Verdict,
    /// Actionable tier.
    pub recommendation: Recommendation,
}

impl Evaluation {
    /// Map a breakdown onto both tier ladders.
    #[must_use]
    pub fn from_breakdown(breakdown: ScoreBreakdown) -> Self {
        let score = breakdown.final_score;
        Self {
            score,
            verdict: Verdict::from_score(score),
            recommendation: Recommendation::from_score(score),
            breakdown,
        }
    }

    /// Human-readable ratings and context derived from the breakdown.
    #[must_use]
    pub fn labels(&self) -> BreakdownLabels {
        BreakdownLabels::from_breakdown(&self.breakdown)
    }
}

/// Stateless sunrise scorer driven by a validated [`ScoringConfig`].
///
/// The engine holds only its configuration, so one instance can be shared
/// across threads and reused for any number of locations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Engine using the default calibration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using a recalibrated configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration fails validation.
    ///
    /// # Examples
    /// ```
    /// use sunrise_core::{ScoringConfig, WindCurve};
    /// use sunrise_scorer::ScoringEngine;
    ///
    /// let mut config = ScoringConfig::default();
    /// config.wind.curve = WindCurve::ModerateBreeze;
    /// let engine = ScoringEngine::with_config(config)?;
    /// assert_eq!(engine.config().wind.curve, WindCurve::ModerateBreeze);
    /// # Ok::<(), sunrise_core::ConfigError>(())
    /// ```
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a sample and map the result onto the tier ladders.
    #[must_use]
    pub fn evaluate(&self, sample: &RawSample, signals: &ExtendedSignals) -> Evaluation {
        Evaluation::from_breakdown(self.score(sample, signals))
    }

    /// Evaluate a paired observation.
    #[must_use]
    pub fn evaluate_observation(&self, observation: &Observation) -> Evaluation {
        self.evaluate(&observation.sample, &observation.signals)
    }
}

impl SunriseScorer for ScoringEngine {
    fn score(&self, sample: &RawSample, signals: &ExtendedSignals) -> ScoreBreakdown {
        let invalid = sample.invalid_fields();
        if !invalid.is_empty() {
            log::warn!(
                "unusable required reading(s) {}; scoring them as neutral",
                invalid.join(", ")
            );
        }
        let config = &self.config;
        let composition = composition_hint(sample, signals, &config.cloud_layers);
        let Synergy {
            adjustment,
            score_ceiling,
            ..
        } = synergy(
            sample,
            composition,
            config.cloud_cover.optimal_band,
            &config.synergy,
        );
        let rain = post_rain(sample, signals, &config.post_rain);
        let mut breakdown = ScoreBreakdown {
            cloud_cover: score_cloud_cover(sample, &config.cloud_cover),
            multi_level_cloud: score_cloud_layers(sample, signals, &config.cloud_layers),
            humidity: score_humidity(sample, &config.humidity),
            pressure_trend: score_pressure(signals, &config.pressure),
            aod: score_aod(signals, &config.aod),
            visibility: score_visibility(sample, &config.visibility),
            weather: score_weather(sample, &config.weather),
            wind: score_wind(sample, &config.wind),
            synergy: adjustment,
            post_rain_bonus: rain.bonus,
            is_post_rain: rain.detected(),
            solar_bonus: solar_bonus(sample, signals, &config.solar),
            final_score: 0,
        };
        let clamped = Self::clamp_score(breakdown.unclamped_total());
        breakdown.final_score = score_ceiling.map_or(clamped, |ceiling| clamped.min(ceiling));
        breakdown
    }
}
