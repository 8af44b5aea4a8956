//! Facade crate for the sunrise viewing-quality engine.
//!
//! This crate re-exports the core domain types and the scoring engine so
//! callers can depend on a single package.
//!
//! # Examples
//!
//! ```
//! use sunrise_engine::{ExtendedSignals, RawSample, ScoringEngine};
//!
//! let sample = RawSample::new(45.0, 60.0, Default::default());
//! let evaluation = ScoringEngine::new().evaluate(&sample, &ExtendedSignals::default());
//! assert!(evaluation.score <= 100);
//! ```

#![forbid(unsafe_code)]

pub use sunrise_core::{
    CloudLayers, ConfigError, ExtendedSignals, Factor, FactorResult, Observation,
    ProviderObservation, RawSample, Recommendation, ScoreBreakdown, ScoringConfig, SignalSource,
    SunriseScorer, Verdict, WindCurve, normalise,
};
pub use sunrise_scorer::{
    BreakdownLabels, Evaluation, FactorLabel, RankedLocation, Rating, ScoringEngine,
    rank_locations,
};
