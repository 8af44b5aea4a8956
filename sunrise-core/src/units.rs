//! Provider-side quantities and their conversion into canonical units.
//!
//! Weather and air-quality providers disagree on units: visibility arrives
//! in miles or metres, cloud ceilings in feet, pressure in inches of mercury
//! and cloud fractions as `0.0..=1.0`. Each quantity here pairs a raw value
//! with its unit, and each unit enum parses the labels providers use.
//!
//! # Examples
//! ```
//! use sunrise_core::{Distance, DistanceUnit};
//!
//! let visibility = Distance::new(10.0, "mi".parse::<DistanceUnit>()?);
//! assert!((visibility.kilometres() - 16.093_44).abs() < 1e-9);
//! # Ok::<(), sunrise_core::UnitError>(())
//! ```

use std::str::FromStr;

use thiserror::Error;

const KM_PER_MILE: f64 = 1.609_344;
const METRES_PER_FOOT: f64 = 0.3048;
const KMH_PER_METRE_PER_SECOND: f64 = 3.6;
const KMH_PER_KNOT: f64 = 1.852;
const HPA_PER_KPA: f64 = 10.0;
const HPA_PER_INCH_HG: f64 = 33.863_886_666_7;
const HPA_PER_MM_HG: f64 = 1.333_223_874_15;

/// Errors raised while parsing provider unit labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The label does not name a supported unit.
    #[error("unknown {kind} unit '{label}'")]
    Unknown {
        /// Quantity being parsed, e.g. `"distance"`.
        kind: &'static str,
        /// Label supplied by the provider.
        label: String,
    },
}

fn unknown(kind: &'static str, label: &str) -> UnitError {
    UnitError::Unknown {
        kind,
        label: label.to_owned(),
    }
}

fn normalised_label(label: &str) -> String {
    label.trim().to_ascii_lowercase().replace(['_', ' '], "")
}

/// Horizontal distance units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceUnit {
    /// Kilometres (canonical).
    Kilometres,
    /// Metres.
    Metres,
    /// Statute miles.
    Miles,
}

impl DistanceUnit {
    /// Multiplier converting one unit into kilometres.
    #[must_use]
    pub const fn kilometres_per_unit(self) -> f64 {
        match self {
            Self::Kilometres => 1.0,
            Self::Metres => 0.001,
            Self::Miles => KM_PER_MILE,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalised_label(s).as_str() {
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Ok(Self::Kilometres),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Metres),
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            _ => Err(unknown("distance", s)),
        }
    }
}

/// A distance reading with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    /// Raw value.
    pub value: f64,
    /// Unit of `value`.
    pub unit: DistanceUnit,
}

impl Distance {
    /// Pair a value with its unit.
    #[must_use]
    pub const fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    /// Value in kilometres.
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    #[must_use]
    pub fn kilometres(self) -> f64 {
        self.value * self.unit.kilometres_per_unit()
    }
}

/// Vertical distance units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AltitudeUnit {
    /// Metres (canonical).
    Metres,
    /// Feet.
    Feet,
}

impl FromStr for AltitudeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalised_label(s).as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Metres),
            "ft" | "foot" | "feet" => Ok(Self::Feet),
            _ => Err(unknown("altitude", s)),
        }
    }
}

/// An altitude reading with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Altitude {
    /// Raw value.
    pub value: f64,
    /// Unit of `value`.
    pub unit: AltitudeUnit,
}

impl Altitude {
    /// Pair a value with its unit.
    #[must_use]
    pub const fn new(value: f64, unit: AltitudeUnit) -> Self {
        Self { value, unit }
    }

    /// Value in metres.
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    #[must_use]
    pub fn metres(self) -> f64 {
        match self.unit {
            AltitudeUnit::Metres => self.value,
            AltitudeUnit::Feet => self.value * METRES_PER_FOOT,
        }
    }
}

/// Wind speed units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpeedUnit {
    /// Kilometres per hour (canonical).
    KilometresPerHour,
    /// Metres per second.
    MetresPerSecond,
    /// Miles per hour.
    MilesPerHour,
    /// Knots.
    Knots,
}

impl SpeedUnit {
    /// Multiplier converting one unit into km/h.
    #[must_use]
    pub const fn kmh_per_unit(self) -> f64 {
        match self {
            Self::KilometresPerHour => 1.0,
            Self::MetresPerSecond => KMH_PER_METRE_PER_SECOND,
            Self::MilesPerHour => KM_PER_MILE,
            Self::Knots => KMH_PER_KNOT,
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalised_label(s).as_str() {
            "km/h" | "kmh" | "kph" => Ok(Self::KilometresPerHour),
            "m/s" | "ms" | "mps" => Ok(Self::MetresPerSecond),
            "mph" => Ok(Self::MilesPerHour),
            "kn" | "kt" | "kts" | "knot" | "knots" => Ok(Self::Knots),
            _ => Err(unknown("speed", s)),
        }
    }
}

/// A wind-speed reading with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed {
    /// Raw value.
    pub value: f64,
    /// Unit of `value`.
    pub unit: SpeedUnit,
}

impl Speed {
    /// Pair a value with its unit.
    #[must_use]
    pub const fn new(value: f64, unit: SpeedUnit) -> Self {
        Self { value, unit }
    }

    /// Value in km/h.
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    #[must_use]
    pub fn kmh(self) -> f64 {
        self.value * self.unit.kmh_per_unit()
    }
}

/// Atmospheric pressure units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PressureUnit {
    /// Hectopascals (canonical); numerically equal to millibars.
    Hectopascals,
    /// Kilopascals.
    Kilopascals,
    /// Inches of mercury.
    InchesOfMercury,
    /// Millimetres of mercury.
    MillimetresOfMercury,
}

impl PressureUnit {
    /// Multiplier converting one unit into hPa.
    #[must_use]
    pub const fn hpa_per_unit(self) -> f64 {
        match self {
            Self::Hectopascals => 1.0,
            Self::Kilopascals => HPA_PER_KPA,
            Self::InchesOfMercury => HPA_PER_INCH_HG,
            Self::MillimetresOfMercury => HPA_PER_MM_HG,
        }
    }
}

impl FromStr for PressureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalised_label(s).as_str() {
            "hpa" | "mb" | "mbar" | "millibar" | "millibars" => Ok(Self::Hectopascals),
            "kpa" => Ok(Self::Kilopascals),
            "inhg" | "in" => Ok(Self::InchesOfMercury),
            "mmhg" | "torr" => Ok(Self::MillimetresOfMercury),
            _ => Err(unknown("pressure", s)),
        }
    }
}

/// A pressure reading with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pressure {
    /// Raw value.
    pub value: f64,
    /// Unit of `value`.
    pub unit: PressureUnit,
}

impl Pressure {
    /// Pair a value with its unit.
    #[must_use]
    pub const fn new(value: f64, unit: PressureUnit) -> Self {
        Self { value, unit }
    }

    /// Value in hPa.
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    #[must_use]
    pub fn hpa(self) -> f64 {
        self.value * self.unit.hpa_per_unit()
    }
}

/// How a provider expresses a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FractionScale {
    /// `0..=100` (canonical).
    Percent,
    /// `0.0..=1.0`.
    Unit,
}

impl FromStr for FractionScale {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalised_label(s).as_str() {
            "%" | "percent" | "pct" => Ok(Self::Percent),
            "fraction" | "unit" | "ratio" => Ok(Self::Unit),
            _ => Err(unknown("fraction", s)),
        }
    }
}

/// A fractional reading (cloud cover, humidity, probability).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction {
    /// Raw value.
    pub value: f64,
    /// Scale of `value`.
    pub scale: FractionScale,
}

impl Fraction {
    /// Pair a value with its scale.
    #[must_use]
    pub const fn new(value: f64, scale: FractionScale) -> Self {
        Self { value, scale }
    }

    /// A value already expressed in percent.
    #[must_use]
    pub const fn percent(value: f64) -> Self {
        Self::new(value, FractionScale::Percent)
    }

    /// Value in percent, clamped to `0..=100`. Clamping is logged at debug
    /// level.
    ///
    /// Non-finite inputs pass through unchanged so the engine can treat them
    /// as absent.
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    #[must_use]
    pub fn as_percent(self) -> f64 {
        let pct = match self.scale {
            FractionScale::Percent => self.value,
            FractionScale::Unit => self.value * 100.0,
        };
        if !pct.is_finite() || (0.0..=100.0).contains(&pct) {
            return pct;
        }
        log::debug!("fraction {pct}% lies outside 0..=100; clamping");
        pct.clamp(0.0, 100.0)
    }
}
