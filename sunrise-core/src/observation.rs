//! Canonical pre-dawn observation records.
//!
//! A [`RawSample`] carries the required readings and an [`ExtendedSignals`]
//! record the optional ones. Both are expressed in the engine's canonical
//! units (percent, kilometres, km/h, hPa, metres) and are produced once per
//! location and day by the data-fetching collaborator, usually through
//! [`normalise`](crate::normalise).
//!
//! Each optional signal has a single `usable_*` predicate here. Scorers call
//! these instead of inspecting raw fields, so "absent" and "invalid" always
//! mean the same thing.

use chrono::{DateTime, Utc};

/// Required readings for one location at the pre-dawn instant.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunrise_core::RawSample;
///
/// let timestamp = Utc.with_ymd_and_hms(2025, 3, 21, 0, 45, 0).single().unwrap_or_default();
/// let sample = RawSample::new(45.0, 60.0, timestamp);
/// assert_eq!(sample.usable_cloud_cover(), Some(45.0));
/// assert!(!sample.has_active_precipitation);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSample {
    /// Total cloud cover in percent.
    pub cloud_cover_pct: f64,
    /// Relative humidity in percent.
    pub relative_humidity_pct: f64,
    /// Probability of precipitation in percent.
    pub precip_probability_pct: f64,
    /// Whether precipitation is falling at the sample instant.
    pub has_active_precipitation: bool,
    /// Wind speed in km/h.
    pub wind_speed_kmh: f64,
    /// Horizontal visibility in kilometres.
    pub visibility_km: f64,
    /// Free-text weather category reported by the provider.
    pub weather_description: String,
    /// Instant the sample describes.
    pub sample_timestamp: DateTime<Utc>,
}

impl RawSample {
    /// Build a sample with the given cloud and humidity readings and benign
    /// defaults elsewhere: no precipitation, calm wind, 20 km visibility and
    /// an empty description.
    #[must_use]
    pub const fn new(
        cloud_cover_pct: f64,
        relative_humidity_pct: f64,
        sample_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            cloud_cover_pct,
            relative_humidity_pct,
            precip_probability_pct: 0.0,
            has_active_precipitation: false,
            wind_speed_kmh: 0.0,
            visibility_km: 20.0,
            weather_description: String::new(),
            sample_timestamp,
        }
    }

    /// Cloud cover when it is a finite percentage.
    #[must_use]
    pub fn usable_cloud_cover(&self) -> Option<f64> {
        percent(self.cloud_cover_pct)
    }

    /// Relative humidity when it is a finite percentage.
    #[must_use]
    pub fn usable_humidity(&self) -> Option<f64> {
        percent(self.relative_humidity_pct)
    }

    /// Precipitation probability when it is a finite percentage.
    #[must_use]
    pub fn usable_precip_probability(&self) -> Option<f64> {
        percent(self.precip_probability_pct)
    }

    /// Wind speed when it is finite and non-negative.
    #[must_use]
    pub fn usable_wind_speed(&self) -> Option<f64> {
        non_negative(self.wind_speed_kmh)
    }

    /// Visibility when it is finite and non-negative.
    #[must_use]
    pub fn usable_visibility(&self) -> Option<f64> {
        non_negative(self.visibility_km)
    }

    /// Names of required fields holding values the engine must ignore.
    ///
    /// Percentages slightly outside `0..=100` are clamped rather than
    /// rejected, so only non-finite or negative readings are reported.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("cloud_cover_pct", self.usable_cloud_cover().is_none()),
            ("relative_humidity_pct", self.usable_humidity().is_none()),
            (
                "precip_probability_pct",
                self.usable_precip_probability().is_none(),
            ),
            ("wind_speed_kmh", self.usable_wind_speed().is_none()),
            ("visibility_km", self.usable_visibility().is_none()),
        ]
        .into_iter()
        .filter_map(|(name, invalid)| invalid.then_some(name))
        .collect()
    }
}

/// Cloud fractions per altitude band, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloudLayers {
    /// High-altitude cloud (cirrus level).
    pub high_pct: f64,
    /// Mid-altitude cloud (alto level).
    pub mid_pct: f64,
    /// Low-altitude cloud (stratus level).
    pub low_pct: f64,
}

impl CloudLayers {
    /// Construct a layer record.
    #[must_use]
    pub const fn new(high_pct: f64, mid_pct: f64, low_pct: f64) -> Self {
        Self {
            high_pct,
            mid_pct,
            low_pct,
        }
    }

    /// Return the layers clamped to `0..=100`, or `None` when any band is
    /// non-finite or negative.
    #[must_use]
    pub fn sanitised(self) -> Option<Self> {
        Some(Self {
            high_pct: percent(self.high_pct)?,
            mid_pct: percent(self.mid_pct)?,
            low_pct: percent(self.low_pct)?,
        })
    }

    /// Sum of the three bands.
    #[expect(clippy::float_arithmetic, reason = "sums three layer fractions")]
    #[must_use]
    pub fn total_pct(self) -> f64 {
        self.high_pct + self.mid_pct + self.low_pct
    }
}

/// Ordered pressure readings in hPa spanning the pre-dawn window.
///
/// Non-finite entries stand for readings the provider could not deliver.
///
/// # Examples
/// ```
/// use sunrise_core::PressureSeries;
///
/// let series = PressureSeries::new(vec![1012.0, 1011.0, 1009.0]);
/// assert_eq!(series.endpoint_delta(), Some(-3.0));
/// assert_eq!(PressureSeries::new(vec![1012.0]).endpoint_delta(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PressureSeries(Vec<f64>);

impl PressureSeries {
    /// Minimum number of finite readings required for a trend.
    pub const MIN_USABLE_POINTS: usize = 2;

    /// Wrap an ordered series of readings.
    #[must_use]
    pub const fn new(readings: Vec<f64>) -> Self {
        Self(readings)
    }

    /// Borrow the raw readings.
    #[must_use]
    pub fn readings(&self) -> &[f64] {
        &self.0
    }

    /// End minus start, provided both endpoints are finite, the series
    /// holds at least [`Self::MIN_USABLE_POINTS`] finite readings and the
    /// difference itself does not overflow.
    #[expect(clippy::float_arithmetic, reason = "trend is an endpoint difference")]
    #[must_use]
    pub fn endpoint_delta(&self) -> Option<f64> {
        let usable = self.0.iter().filter(|reading| reading.is_finite()).count();
        if usable < Self::MIN_USABLE_POINTS {
            return None;
        }
        let first = self.0.first().copied().filter(|value| value.is_finite())?;
        let last = self.0.last().copied().filter(|value| value.is_finite())?;
        Some(last - first).filter(|delta| delta.is_finite())
    }
}

impl From<Vec<f64>> for PressureSeries {
    fn from(readings: Vec<f64>) -> Self {
        Self::new(readings)
    }
}

/// Optional readings; each field is independently nullable.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtendedSignals {
    /// Cloud fractions per altitude band.
    pub multi_level_cloud: Option<CloudLayers>,
    /// Height of the cloud base in metres.
    pub cloud_ceiling_m: Option<f64>,
    /// Pressure readings across the pre-dawn window.
    pub pressure_series_hpa: Option<PressureSeries>,
    /// Aerosol optical depth (unitless).
    pub aerosol_optical_depth: Option<f64>,
    /// Hours with precipitation during the preceding night.
    pub night_rain_hours: Option<f64>,
    /// Latitude of the location in degrees; positive north.
    pub latitude_deg: Option<f64>,
}

impl ExtendedSignals {
    /// Per-altitude cloud fractions when every band is valid.
    #[must_use]
    pub fn usable_layers(&self) -> Option<CloudLayers> {
        self.multi_level_cloud.and_then(CloudLayers::sanitised)
    }

    /// Cloud ceiling when it is finite and non-negative.
    #[must_use]
    pub fn usable_ceiling(&self) -> Option<f64> {
        self.cloud_ceiling_m.and_then(non_negative)
    }

    /// Pressure change across the window, when computable.
    #[must_use]
    pub fn usable_pressure_delta(&self) -> Option<f64> {
        self.pressure_series_hpa
            .as_ref()
            .and_then(PressureSeries::endpoint_delta)
    }

    /// Aerosol optical depth when it is finite and non-negative.
    #[must_use]
    pub fn usable_aod(&self) -> Option<f64> {
        self.aerosol_optical_depth.and_then(non_negative)
    }

    /// Night rain hours when finite and non-negative.
    #[must_use]
    pub fn usable_night_rain_hours(&self) -> Option<f64> {
        self.night_rain_hours.and_then(non_negative)
    }

    /// Latitude when it lies within `-90..=90`.
    #[must_use]
    pub fn usable_latitude(&self) -> Option<f64> {
        self.latitude_deg
            .filter(|latitude| latitude.is_finite() && (-90.0..=90.0).contains(latitude))
    }
}

/// A required sample paired with its optional signals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Required readings.
    pub sample: RawSample,
    /// Optional readings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub signals: ExtendedSignals,
}

impl Observation {
    /// Pair a sample with its signals.
    #[must_use]
    pub const fn new(sample: RawSample, signals: ExtendedSignals) -> Self {
        Self { sample, signals }
    }
}

fn percent(value: f64) -> Option<f64> {
    non_negative(value).map(|pct| pct.min(100.0))
}

fn non_negative(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}
