//! Observation fixtures shared by unit, behaviour and property tests.
//!
//! Every fixture is stamped on the March equinox, when the solar-angle
//! adjustment is zero, so expected totals depend only on the weather.

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    CloudLayers, ExtendedSignals, FactorResult, Observation, PressureSeries, RawSample,
    ScoreBreakdown,
};

/// 00:45 UTC on the given date, or the Unix epoch for an invalid date.
#[must_use]
pub fn timestamp_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 45, 0)
        .single()
        .unwrap_or_default()
}

/// Pre-dawn instant on the 2025 March equinox.
#[must_use]
pub fn equinox_timestamp() -> DateTime<Utc> {
    timestamp_on(2025, 3, 21)
}

/// Breakdown with every factor at zero and the given final score.
#[must_use]
pub fn flat_breakdown(final_score: u8) -> ScoreBreakdown {
    let empty = |max| FactorResult::unavailable(0, max);
    ScoreBreakdown {
        cloud_cover: empty(25),
        multi_level_cloud: empty(10),
        humidity: empty(15),
        pressure_trend: empty(10),
        aod: empty(15),
        visibility: empty(5),
        weather: empty(10),
        wind: empty(5),
        synergy: 0,
        post_rain_bonus: 0,
        is_post_rain: false,
        solar_bonus: 0,
        final_score,
    }
}

fn sample(cloud: f64, humidity: f64) -> RawSample {
    RawSample::new(cloud, humidity, equinox_timestamp())
}

/// Near-ideal morning: mid cloud cover with a high canvas, comfortable
/// humidity, a clearing pressure fall and Goldilocks aerosols.
#[must_use]
pub fn near_ideal_observation() -> Observation {
    let mut raw = sample(45.0, 60.0);
    raw.precip_probability_pct = 5.0;
    raw.wind_speed_kmh = 8.0;
    raw.visibility_km = 25.0;
    raw.weather_description = "Partly cloudy".to_owned();
    let signals = ExtendedSignals {
        multi_level_cloud: Some(CloudLayers::new(30.0, 10.0, 5.0)),
        cloud_ceiling_m: Some(7500.0),
        pressure_series_hpa: Some(PressureSeries::new(vec![1014.0, 1012.5, 1011.0])),
        aerosol_optical_depth: Some(0.1),
        night_rain_hours: None,
        latitude_deg: Some(13.0),
    };
    Observation::new(raw, signals)
}

/// Heavy overcast: near-total cover, saturated air, hazy aerosols and mist.
/// Nothing else is reported, so no rain or stratus signal drags it down.
#[must_use]
pub fn heavy_overcast_observation() -> Observation {
    let mut raw = sample(95.0, 92.0);
    raw.visibility_km = 4.5;
    raw.weather_description = "Overcast".to_owned();
    let signals = ExtendedSignals {
        aerosol_optical_depth: Some(0.85),
        latitude_deg: Some(13.0),
        ..ExtendedSignals::default()
    };
    Observation::new(raw, signals)
}

/// Fog-out: otherwise favourable readings under sub-kilometre visibility.
#[must_use]
pub fn fog_observation() -> Observation {
    let mut raw = sample(40.0, 99.0);
    raw.precip_probability_pct = 10.0;
    raw.wind_speed_kmh = 3.0;
    raw.visibility_km = 0.5;
    raw.weather_description = "Fog".to_owned();
    let signals = ExtendedSignals {
        multi_level_cloud: Some(CloudLayers::new(30.0, 0.0, 0.0)),
        aerosol_optical_depth: Some(0.2),
        latitude_deg: Some(13.0),
        ..ExtendedSignals::default()
    };
    Observation::new(raw, signals)
}

/// Clearing after a wet night: three hours of rain, low precipitation risk
/// and crisp visibility.
#[must_use]
pub fn post_rain_observation() -> Observation {
    let mut raw = sample(40.0, 80.0);
    raw.precip_probability_pct = 10.0;
    raw.wind_speed_kmh = 10.0;
    raw.visibility_km = 30.0;
    raw.weather_description = "Clear".to_owned();
    let signals = ExtendedSignals {
        multi_level_cloud: Some(CloudLayers::new(25.0, 10.0, 10.0)),
        pressure_series_hpa: Some(PressureSeries::new(vec![1010.0, 1008.0])),
        aerosol_optical_depth: Some(0.08),
        night_rain_hours: Some(3.0),
        latitude_deg: Some(13.0),
        ..ExtendedSignals::default()
    };
    Observation::new(raw, signals)
}

/// Favourable mid-cover morning with the given cloud layers and nothing
/// else optional.
#[must_use]
pub fn layered_observation(layers: CloudLayers) -> Observation {
    let mut raw = sample(45.0, 65.0);
    raw.wind_speed_kmh = 10.0;
    raw.visibility_km = 15.0;
    raw.weather_description = "Partly cloudy".to_owned();
    let signals = ExtendedSignals {
        multi_level_cloud: Some(layers),
        aerosol_optical_depth: Some(0.1),
        latitude_deg: Some(13.0),
        ..ExtendedSignals::default()
    };
    Observation::new(raw, signals)
}

/// Sample with only the required readings set and no optional signals.
#[must_use]
pub fn bare_observation(cloud: f64, humidity: f64) -> Observation {
    Observation::new(sample(cloud, humidity), ExtendedSignals::default())
}
