//! Errors raised while validating or loading a [`ScoringConfig`](super::ScoringConfig).

use thiserror::Error;

/// Error raised when a configuration cannot be used for scoring.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The factor maxima do not spend the declared base budget.
    #[error("factor maxima sum to {actual} but the base budget is {expected}")]
    BudgetMismatch {
        /// Declared base budget.
        expected: u32,
        /// Sum of the eight factor maxima.
        actual: u32,
    },
    /// A neutral fallback exceeds the factor's maximum.
    #[error("neutral score {neutral} for {factor} exceeds its maximum {max}")]
    NeutralAboveMax {
        /// Factor whose fallback is out of range.
        factor: &'static str,
        /// Configured neutral score.
        neutral: u8,
        /// Configured maximum.
        max: u8,
    },
    /// A score inside a component exceeds the component's maximum.
    #[error("{field} awards {score} points but {factor} is capped at {max}")]
    ScoreAboveMax {
        /// Factor owning the field.
        factor: &'static str,
        /// Offending field or table.
        field: &'static str,
        /// Score the field awards.
        score: u8,
        /// Configured maximum.
        max: u8,
    },
    /// A threshold or rate is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Offending field.
        field: &'static str,
    },
    /// A step table has no rows.
    #[error("{table} must contain at least one step")]
    EmptySteps {
        /// Offending table.
        table: &'static str,
    },
    /// Step thresholds are not strictly ordered in their reading direction.
    #[error("thresholds in {table} must be strictly {direction}")]
    UnorderedSteps {
        /// Offending table.
        table: &'static str,
        /// Required ordering.
        direction: &'static str,
    },
    /// Step scores move the wrong way as the reading worsens.
    #[error("scores in {table} must not increase as conditions worsen")]
    NonMonotonicSteps {
        /// Offending table.
        table: &'static str,
    },
    /// A band is inverted or lies outside `0..=100`.
    #[error("band {field} must satisfy 0 <= low <= high <= 100")]
    InvalidBand {
        /// Offending band.
        field: &'static str,
    },
    /// A curve's breakpoints are out of order.
    #[error("{factor} curve is malformed: {reason}")]
    InvalidCurve {
        /// Factor owning the curve.
        factor: &'static str,
        /// Which ordering rule failed.
        reason: &'static str,
    },
    /// A bounded adjustment requests more than its ceiling allows.
    #[error("{field} is {value} but the permitted magnitude is {limit}")]
    BoundExceeded {
        /// Offending field.
        field: &'static str,
        /// Configured value.
        value: i8,
        /// Permitted magnitude.
        limit: i8,
    },
    /// The JSON document could not be parsed.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    #[error("failed to parse scoring configuration: {source}")]
    Parse {
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
}
