//! The eight independent factor scorers.
//!
//! Each submodule exposes a pure `*_points` curve over canonical inputs and a
//! `score_*` wrapper that applies the usable-signal predicate, falls back to
//! the configured neutral score and packages a
//! [`FactorResult`](sunrise_core::FactorResult).

mod aod;
mod cloud_cover;
mod cloud_layers;
mod humidity;
mod pressure;
mod visibility;
mod weather;
mod wind;

pub use aod::{aod_points, score_aod};
pub use cloud_cover::{cloud_cover_curve, cloud_cover_points, score_cloud_cover};
pub use cloud_layers::{LayerComposition, ceiling_points, composition_hint, score_cloud_layers};
pub use humidity::{humidity_points, score_humidity};
pub use pressure::{pressure_points, score_pressure};
pub use visibility::{score_visibility, visibility_points};
pub use weather::{Conditions, score_weather, weather_points};
pub use wind::{score_wind, wind_points};

/// Round a raw curve value into `0..=max`.
///
/// Non-finite values score zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped into the u8 range before the cast"
)]
pub(crate) fn points(raw: f64, max: u8) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(max)) as u8
}
