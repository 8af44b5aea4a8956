//! Ordering many locations for the same morning.

use sunrise_core::{Observation, SunriseScorer};

use crate::Evaluation;

/// One location's evaluation within a ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedLocation {
    /// Caller-supplied location name.
    pub location: String,
    /// Evaluation for the location.
    pub evaluation: Evaluation,
}

/// Score every location and order the results best first.
///
/// Locations with equal scores are ordered by name so the ranking is
/// deterministic for a given input.
///
/// # Examples
/// ```
/// use sunrise_core::{ExtendedSignals, Observation, RawSample};
/// use sunrise_scorer::{ScoringEngine, rank_locations};
/// # use chrono::{DateTime, Utc};
///
/// let at = DateTime::<Utc>::default();
/// let hazy = Observation::new(RawSample::new(95.0, 97.0, at), ExtendedSignals::default());
/// let clear = Observation::new(RawSample::new(45.0, 60.0, at), ExtendedSignals::default());
/// let ranked = rank_locations(&ScoringEngine::new(), [("Lagos", &hazy), ("Jos", &clear)]);
/// assert_eq!(ranked.first().map(|entry| entry.location.as_str()), Some("Jos"));
/// ```
#[must_use]
pub fn rank_locations<'a, S, N, I>(scorer: &S, locations: I) -> Vec<RankedLocation>
where
    S: SunriseScorer,
    N: Into<String>,
    I: IntoIterator<Item = (N, &'a Observation)>,
{
    let mut ranked: Vec<RankedLocation> = locations
        .into_iter()
        .map(|(name, observation)| RankedLocation {
            location: name.into(),
            evaluation: Evaluation::from_breakdown(scorer.score_observation(observation)),
        })
        .collect();
    ranked.sort_by(|left, right| {
        right
            .evaluation
            .score
            .cmp(&left.evaluation.score)
            .then_with(|| left.location.cmp(&right.location))
    });
    ranked
}
