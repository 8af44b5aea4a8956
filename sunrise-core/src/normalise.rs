//! Boundary conversion from provider readings to canonical observations.
//!
//! Unit conversion happens exactly once, here. Scorers only ever see
//! [`RawSample`] and [`ExtendedSignals`] in canonical units.

use chrono::{DateTime, Utc};

use crate::{
    Altitude, CloudLayers, Distance, ExtendedSignals, Fraction, Observation, Pressure,
    PressureSeries, RawSample, Speed,
};

/// Per-altitude cloud fractions as delivered by a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProviderCloudLayers {
    /// High-altitude fraction.
    pub high: Fraction,
    /// Mid-altitude fraction.
    pub mid: Fraction,
    /// Low-altitude fraction.
    pub low: Fraction,
}

/// A provider's readings in whatever units it reports.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProviderObservation {
    /// Total cloud cover.
    pub cloud_cover: Fraction,
    /// Relative humidity.
    pub relative_humidity: Fraction,
    /// Probability of precipitation.
    pub precip_probability: Fraction,
    /// Whether precipitation is falling now.
    pub has_active_precipitation: bool,
    /// Wind speed.
    pub wind_speed: Speed,
    /// Horizontal visibility.
    pub visibility: Distance,
    /// Free-text weather category.
    pub weather_description: String,
    /// Instant the readings describe.
    pub sample_timestamp: DateTime<Utc>,
    /// Per-altitude cloud fractions.
    pub cloud_layers: Option<ProviderCloudLayers>,
    /// Cloud base height.
    pub cloud_ceiling: Option<Altitude>,
    /// Pressure readings across the pre-dawn window, oldest first.
    pub pressure_series: Option<Vec<Pressure>>,
    /// Aerosol optical depth (already unitless).
    pub aerosol_optical_depth: Option<f64>,
    /// Hours of rain during the preceding night.
    pub night_rain_hours: Option<f64>,
    /// Latitude of the location in degrees.
    pub latitude_deg: Option<f64>,
}

/// Convert provider readings into the engine's canonical units.
///
/// The conversion is total: values the engine cannot use survive as
/// non-finite numbers and are routed to neutral scores downstream.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunrise_core::{
///     Distance, DistanceUnit, Fraction, FractionScale, ProviderObservation, Speed, SpeedUnit,
///     normalise,
/// };
///
/// let provider = ProviderObservation {
///     cloud_cover: Fraction::new(0.4, FractionScale::Unit),
///     relative_humidity: Fraction::percent(78.0),
///     precip_probability: Fraction::percent(10.0),
///     has_active_precipitation: false,
///     wind_speed: Speed::new(3.0, SpeedUnit::MetresPerSecond),
///     visibility: Distance::new(6.0, DistanceUnit::Miles),
///     weather_description: "Partly cloudy".into(),
///     sample_timestamp: Utc.with_ymd_and_hms(2025, 1, 10, 0, 30, 0).single().unwrap_or_default(),
///     cloud_layers: None,
///     cloud_ceiling: None,
///     pressure_series: None,
///     aerosol_optical_depth: Some(0.12),
///     night_rain_hours: None,
///     latitude_deg: Some(13.0),
/// };
/// let observation = normalise(&provider);
/// assert!((observation.sample.cloud_cover_pct - 40.0).abs() < 1e-9);
/// assert!((observation.sample.wind_speed_kmh - 10.8).abs() < 1e-9);
/// ```
#[must_use]
pub fn normalise(provider: &ProviderObservation) -> Observation {
    let sample = RawSample {
        cloud_cover_pct: provider.cloud_cover.as_percent(),
        relative_humidity_pct: provider.relative_humidity.as_percent(),
        precip_probability_pct: provider.precip_probability.as_percent(),
        has_active_precipitation: provider.has_active_precipitation,
        wind_speed_kmh: provider.wind_speed.kmh(),
        visibility_km: provider.visibility.kilometres(),
        weather_description: provider.weather_description.trim().to_owned(),
        sample_timestamp: provider.sample_timestamp,
    };
    let signals = ExtendedSignals {
        multi_level_cloud: provider.cloud_layers.map(|layers| {
            CloudLayers::new(
                layers.high.as_percent(),
                layers.mid.as_percent(),
                layers.low.as_percent(),
            )
        }),
        cloud_ceiling_m: provider.cloud_ceiling.map(Altitude::metres),
        pressure_series_hpa: provider.pressure_series.as_deref().map(pressure_series),
        aerosol_optical_depth: provider.aerosol_optical_depth,
        night_rain_hours: provider.night_rain_hours,
        latitude_deg: provider.latitude_deg,
    };
    Observation::new(sample, signals)
}

fn pressure_series(readings: &[Pressure]) -> PressureSeries {
    let converted: Vec<f64> = readings.iter().copied().map(Pressure::hpa).collect();
    let discarded = converted.iter().filter(|value| !value.is_finite()).count();
    if discarded > 0 {
        log::debug!(
            "pressure series holds {discarded} unusable reading(s) out of {}",
            converted.len()
        );
    }
    PressureSeries::new(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::equinox_timestamp;
    use crate::{AltitudeUnit, DistanceUnit, FractionScale, PressureUnit, SpeedUnit};
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-6;

    #[fixture]
    fn imperial() -> ProviderObservation {
        ProviderObservation {
            cloud_cover: Fraction::new(0.5, FractionScale::Unit),
            relative_humidity: Fraction::new(0.82, FractionScale::Unit),
            precip_probability: Fraction::percent(15.0),
            has_active_precipitation: false,
            wind_speed: Speed::new(5.0, SpeedUnit::MilesPerHour),
            visibility: Distance::new(10.0, DistanceUnit::Miles),
            weather_description: "  Scattered clouds ".into(),
            sample_timestamp: equinox_timestamp(),
            cloud_layers: Some(ProviderCloudLayers {
                high: Fraction::new(0.3, FractionScale::Unit),
                mid: Fraction::new(0.1, FractionScale::Unit),
                low: Fraction::new(0.05, FractionScale::Unit),
            }),
            cloud_ceiling: Some(Altitude::new(20_000.0, AltitudeUnit::Feet)),
            pressure_series: Some(vec![
                Pressure::new(29.90, PressureUnit::InchesOfMercury),
                Pressure::new(29.85, PressureUnit::InchesOfMercury),
            ]),
            aerosol_optical_depth: Some(0.1),
            night_rain_hours: Some(0.0),
            latitude_deg: Some(25.8),
        }
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail fast on missing signals")]
    fn converts_imperial_readings(imperial: ProviderObservation) {
        let observation = normalise(&imperial);
        let sample = &observation.sample;
        assert!((sample.cloud_cover_pct - 50.0).abs() < TOLERANCE);
        assert!((sample.relative_humidity_pct - 82.0).abs() < TOLERANCE);
        assert!((sample.wind_speed_kmh - 8.046_72).abs() < TOLERANCE);
        assert!((sample.visibility_km - 16.093_44).abs() < TOLERANCE);
        assert_eq!(sample.weather_description, "Scattered clouds");

        let signals = &observation.signals;
        let layers = signals.usable_layers().expect("layers convert");
        assert!((layers.high_pct - 30.0).abs() < TOLERANCE);
        let ceiling = signals.usable_ceiling().expect("ceiling converts");
        assert!((ceiling - 6096.0).abs() < TOLERANCE);
        let delta = signals.usable_pressure_delta().expect("pressure converts");
        assert!((delta + 1.693_194).abs() < 1e-3);
    }

    #[rstest]
    fn missing_optional_readings_stay_absent(mut imperial: ProviderObservation) {
        imperial.cloud_layers = None;
        imperial.cloud_ceiling = None;
        imperial.pressure_series = None;
        imperial.aerosol_optical_depth = None;
        let observation = normalise(&imperial);
        assert!(observation.signals.usable_layers().is_none());
        assert!(observation.signals.usable_ceiling().is_none());
        assert!(observation.signals.usable_pressure_delta().is_none());
        assert!(observation.signals.usable_aod().is_none());
    }

    #[rstest]
    fn non_finite_readings_survive_as_unusable(mut imperial: ProviderObservation) {
        imperial.visibility = Distance::new(f64::NAN, DistanceUnit::Miles);
        let observation = normalise(&imperial);
        assert!(observation.sample.usable_visibility().is_none());
    }
}
