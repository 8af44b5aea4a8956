//! Core domain types for the sunrise viewing-quality engine.
//!
//! This crate holds everything that is pure data at the engine boundary:
//!
//! - the canonical observation records ([`RawSample`], [`ExtendedSignals`])
//!   and the [`normalise`] step that converts heterogeneous provider units
//!   into them;
//! - the scored output ([`FactorResult`], [`ScoreBreakdown`]) together with
//!   the published [`Verdict`] and [`Recommendation`] band tables;
//! - the central, validated [`ScoringConfig`] that carries every weight,
//!   band boundary and bonus constant;
//! - the [`SunriseScorer`] trait implemented by the scoring engine.
//!
//! The algorithms live in the `sunrise-scorer` crate.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod breakdown;
pub mod config;
pub mod normalise;
pub mod observation;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod units;
pub mod verdict;

pub use breakdown::{Factor, FactorResult, ScoreBreakdown, SignalSource};
pub use config::{
    AodConfig, CloudCoverConfig, CloudLayerConfig, ConfigError, HumidityConfig, ModerateBreeze,
    PercentBand, PostRainConfig, PressureConfig, SOLAR_LIMIT, SYNERGY_LIMIT, ScoringConfig,
    SolarConfig, StepTable, SynergyConfig, ThresholdStep, VisibilityConfig, WeatherConfig,
    WindConfig, WindCurve,
};
pub use normalise::{ProviderCloudLayers, ProviderObservation, normalise};
pub use observation::{CloudLayers, ExtendedSignals, Observation, PressureSeries, RawSample};
pub use scorer::SunriseScorer;
pub use units::{
    Altitude, AltitudeUnit, Distance, DistanceUnit, Fraction, FractionScale, Pressure,
    PressureUnit, Speed, SpeedUnit, UnitError,
};
pub use verdict::{RECOMMENDATION_BANDS, Recommendation, ScoreBand, VERDICT_BANDS, Verdict};
