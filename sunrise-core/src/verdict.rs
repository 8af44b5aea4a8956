//! Published threshold ladders over the final score.
//!
//! Two independent ladders read the same `0..=100` score: a six-tier
//! qualitative [`Verdict`] in roughly 15-point bands and a four-tier
//! actionable [`Recommendation`] in roughly 20-point bands. Both tables are
//! public constants so collaborators can assert exact boundaries.
//!
//! | Verdict        | Scores   | Recommendation | Scores   |
//! |----------------|----------|----------------|----------|
//! | `Exceptional`  | 85..=100 | `Go`           | 70..=100 |
//! | `Great`        | 70..=84  | `Maybe`        | 50..=69  |
//! | `Good`         | 55..=69  | `Skip`         | 30..=49  |
//! | `Fair`         | 40..=54  | `No`           | 0..=29   |
//! | `Poor`         | 25..=39  |                |          |
//! | `Unfavourable` | 0..=24   |                |          |

use std::fmt;

/// An inclusive score range mapped to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand<T> {
    /// Lowest score in the band.
    pub min: u8,
    /// Highest score in the band.
    pub max: u8,
    /// Tier assigned to the band.
    pub tier: T,
}

impl<T: Copy> ScoreBand<T> {
    const fn new(min: u8, max: u8, tier: T) -> Self {
        Self { min, max, tier }
    }

    /// Whether `score` falls inside the band.
    #[must_use]
    pub const fn contains(&self, score: u8) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Qualitative verdict tiers, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// Rare, vivid sunrise conditions.
    Exceptional,
    /// Strong colour likely.
    Great,
    /// Worthwhile conditions.
    Good,
    /// Some colour possible.
    Fair,
    /// Muted or obscured sunrise likely.
    Poor,
    /// Sunrise effectively hidden.
    Unfavourable,
}

/// Verdict ladder, highest band first.
pub const VERDICT_BANDS: [ScoreBand<Verdict>; 6] = [
    ScoreBand::new(85, 100, Verdict::Exceptional),
    ScoreBand::new(70, 84, Verdict::Great),
    ScoreBand::new(55, 69, Verdict::Good),
    ScoreBand::new(40, 54, Verdict::Fair),
    ScoreBand::new(25, 39, Verdict::Poor),
    ScoreBand::new(0, 24, Verdict::Unfavourable),
];

impl Verdict {
    /// Map a final score onto the verdict ladder.
    ///
    /// Scores above 100 are treated as 100.
    ///
    /// # Examples
    /// ```
    /// use sunrise_core::Verdict;
    ///
    /// assert_eq!(Verdict::from_score(85), Verdict::Exceptional);
    /// assert_eq!(Verdict::from_score(84), Verdict::Great);
    /// ```
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        lookup(&VERDICT_BANDS, score).unwrap_or(Self::Unfavourable)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Unfavourable => "Unfavourable",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Actionable recommendation tiers, most encouraging first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Recommendation {
    /// Worth getting up for.
    Go,
    /// Worth it for the keen.
    Maybe,
    /// Probably not worth the trip.
    Skip,
    /// Stay in bed.
    No,
}

/// Recommendation ladder, highest band first.
pub const RECOMMENDATION_BANDS: [ScoreBand<Recommendation>; 4] = [
    ScoreBand::new(70, 100, Recommendation::Go),
    ScoreBand::new(50, 69, Recommendation::Maybe),
    ScoreBand::new(30, 49, Recommendation::Skip),
    ScoreBand::new(0, 29, Recommendation::No),
];

impl Recommendation {
    /// Map a final score onto the recommendation ladder.
    ///
    /// Scores above 100 are treated as 100.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        lookup(&RECOMMENDATION_BANDS, score).unwrap_or(Self::No)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Maybe => "Maybe",
            Self::Skip => "Skip",
            Self::No => "No",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn lookup<T: Copy>(bands: &[ScoreBand<T>], score: u8) -> Option<T> {
    let bounded = score.min(100);
    bands
        .iter()
        .find(|band| band.contains(bounded))
        .map(|band| band.tier)
}
