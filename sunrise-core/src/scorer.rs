//! Score a pre-dawn observation for sunrise viewing quality.
//!
//! The `SunriseScorer` trait turns a [`RawSample`] and its
//! [`ExtendedSignals`] into a [`ScoreBreakdown`].

use crate::{ExtendedSignals, Observation, RawSample, ScoreBreakdown};

/// Compute a sunrise quality breakdown for one location and day.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve many locations concurrently. Scoring is infallible: missing or
/// malformed inputs degrade to neutral factor scores instead of errors, and
/// the same inputs always produce the same breakdown.
///
/// Implementations must:
/// - Keep every factor score within `0..=max_score`.
/// - Report a `final_score` within `0..=100`.
///
/// Use [`SunriseScorer::clamp_score`] to apply the final bound.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use sunrise_core::{ExtendedSignals, FactorResult, RawSample, ScoreBreakdown, SunriseScorer};
///
/// struct NeutralScorer;
///
/// impl SunriseScorer for NeutralScorer {
///     fn score(&self, _sample: &RawSample, _signals: &ExtendedSignals) -> ScoreBreakdown {
///         let neutral = |max| FactorResult::unavailable(max / 2, max);
///         ScoreBreakdown {
///             cloud_cover: neutral(25),
///             multi_level_cloud: neutral(10),
///             humidity: neutral(15),
///             pressure_trend: neutral(10),
///             aod: neutral(15),
///             visibility: neutral(5),
///             weather: neutral(10),
///             wind: neutral(5),
///             synergy: 0,
///             post_rain_bonus: 0,
///             is_post_rain: false,
///             solar_bonus: 0,
///             final_score: 45,
///         }
///     }
/// }
///
/// let sample = RawSample::new(45.0, 60.0, DateTime::<Utc>::default());
/// let breakdown = NeutralScorer.score(&sample, &ExtendedSignals::default());
/// assert_eq!(breakdown.base_score(), 45);
/// assert_eq!(NeutralScorer::clamp_score(140), 100);
/// assert_eq!(NeutralScorer::clamp_score(-3), 0);
/// ```
pub trait SunriseScorer: Send + Sync {
    /// Score `sample` with the optional `signals`.
    fn score(&self, sample: &RawSample, signals: &ExtendedSignals) -> ScoreBreakdown;

    /// Score a paired observation.
    fn score_observation(&self, observation: &Observation) -> ScoreBreakdown {
        self.score(&observation.sample, &observation.signals)
    }

    /// Clamp an unbounded total into `0..=100`.
    fn clamp_score(total: i32) -> u8
    where
        Self: Sized,
    {
        u8::try_from(total.clamp(0, 100)).unwrap_or(u8::MAX)
    }
}
