//! Scoring algorithms for the sunrise viewing-quality engine.
//!
//! The crate turns a normalised [`RawSample`](sunrise_core::RawSample) and
//! its [`ExtendedSignals`](sunrise_core::ExtendedSignals) into a
//! [`ScoreBreakdown`](sunrise_core::ScoreBreakdown):
//!
//! - eight independent factor scorers, each a pure function of the
//!   canonical inputs and a section of
//!   [`ScoringConfig`](sunrise_core::ScoringConfig);
//! - a bounded [`synergy`] adjuster for cross-factor interactions, with a
//!   hard fog override;
//! - the additive [`post_rain`] and [`solar_bonus`] adjustments;
//! - the [`ScoringEngine`], which assembles and clamps the final score and
//!   implements [`SunriseScorer`](sunrise_core::SunriseScorer).
//!
//! Evaluations can be turned into human-readable [`BreakdownLabels`] and
//! several locations ranked with [`rank_locations`].
//!
//! # Examples
//!
//! ```
//! use sunrise_core::{ExtendedSignals, RawSample, Verdict};
//! use sunrise_scorer::ScoringEngine;
//! # use chrono::{DateTime, Utc};
//!
//! let engine = ScoringEngine::new();
//! let mut sample = RawSample::new(45.0, 60.0, DateTime::<Utc>::default());
//! sample.visibility_km = 25.0;
//! sample.weather_description = "Partly cloudy".to_owned();
//! let evaluation = engine.evaluate(&sample, &ExtendedSignals::default());
//! assert!(evaluation.score <= 100);
//! assert!(evaluation.verdict <= Verdict::Good);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjustments;
mod engine;
mod factors;
mod labels;
mod ranking;
mod synergy;

pub use adjustments::{PostRain, PostRainEvidence, post_rain, solar_bonus, solar_declination_deg};
pub use engine::{Evaluation, ScoringEngine};
pub use factors::{
    Conditions, LayerComposition, aod_points, ceiling_points, cloud_cover_curve,
    cloud_cover_points, composition_hint, humidity_points, pressure_points, score_aod,
    score_cloud_cover, score_cloud_layers, score_humidity, score_pressure, score_visibility,
    score_weather, score_wind, visibility_points, weather_points, wind_points,
};
pub use labels::{BreakdownLabels, FactorLabel, Rating};
pub use ranking::{RankedLocation, rank_locations};
pub use synergy::{Synergy, synergy};
