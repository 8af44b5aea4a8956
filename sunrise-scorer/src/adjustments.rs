//! Additive adjustments applied after the base score.
//!
//! Both sit outside the base budget and may push the pre-clamp total above
//! 100; the final clamp absorbs the overshoot.

use std::f64::consts::TAU;

use chrono::{DateTime, Datelike, Utc};
use sunrise_core::{ExtendedSignals, PostRainConfig, RawSample, SolarConfig};

/// Peak solar declination in degrees.
const AXIAL_TILT_DEG: f64 = 23.45;

/// Day-of-year offset that places the December solstice at the minimum.
const DECLINATION_PHASE_DAYS: f64 = 284.0;

/// Mean days per year used by the declination approximation.
const DAYS_PER_YEAR: f64 = 365.0;

/// How post-rain clearing was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostRainEvidence {
    /// The night-rain signal reported enough rain.
    NightRain,
    /// The signal was missing but the readings carry the post-rain signature.
    Signature,
}

/// Outcome of post-rain detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostRain {
    /// Bonus points awarded; zero when not detected.
    pub bonus: u8,
    /// Evidence behind the bonus, if any.
    pub evidence: Option<PostRainEvidence>,
}

impl PostRain {
    const NONE: Self = Self {
        bonus: 0,
        evidence: None,
    };

    /// Whether clearing after rain was detected.
    #[must_use]
    pub const fn detected(&self) -> bool {
        self.evidence.is_some()
    }
}

/// Detect clearing after overnight rain.
///
/// The night-rain signal is authoritative when present: enough rain earns
/// the bonus and too little denies it. Only when the signal is missing does
/// the readings signature (high visibility, mid-band cloud, moderately
/// elevated humidity) stand in for it. Neither path awards the bonus while
/// the precipitation probability is at or above the configured limit, or
/// when that probability is unusable.
#[must_use]
pub fn post_rain(
    sample: &RawSample,
    signals: &ExtendedSignals,
    config: &PostRainConfig,
) -> PostRain {
    let dry_outlook = sample
        .usable_precip_probability()
        .is_some_and(|probability| probability < config.max_precip_probability_pct);
    if !dry_outlook {
        return PostRain::NONE;
    }
    let evidence = match signals.usable_night_rain_hours() {
        Some(hours) => (hours >= config.min_night_rain_hours).then_some(PostRainEvidence::NightRain),
        None => has_signature(sample, config).then_some(PostRainEvidence::Signature),
    };
    evidence.map_or(PostRain::NONE, |found| {
        log::debug!("post-rain clearing detected from {found:?}");
        PostRain {
            bonus: config.bonus,
            evidence: Some(found),
        }
    })
}

fn has_signature(sample: &RawSample, config: &PostRainConfig) -> bool {
    let clear_air = sample
        .usable_visibility()
        .is_some_and(|visibility| visibility >= config.signature_min_visibility_km);
    let mid_cloud = sample
        .usable_cloud_cover()
        .is_some_and(|cloud| config.signature_cloud_band.contains(cloud));
    let damp = sample
        .usable_humidity()
        .is_some_and(|humidity| config.signature_humidity_band.contains(humidity));
    clear_air && mid_cloud && damp
}

/// Solar declination in degrees for the timestamp's calendar date.
///
/// Uses Cooper's approximation; positive values put the sun over the
/// northern hemisphere.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunrise_scorer::solar_declination_deg;
///
/// let solstice = Utc.with_ymd_and_hms(2025, 12, 21, 0, 0, 0).single().unwrap_or_default();
/// assert!(solar_declination_deg(solstice) < -23.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "declination is a sinusoid in day of year")]
#[must_use]
pub fn solar_declination_deg(timestamp: DateTime<Utc>) -> f64 {
    let day = f64::from(timestamp.ordinal());
    AXIAL_TILT_DEG * (TAU * (DECLINATION_PHASE_DAYS + day) / DAYS_PER_YEAR).sin()
}

/// Seasonal adjustment from the sun's declination.
///
/// Declination is oriented towards the location's hemisphere, taken from
/// the latitude signal and assumed northern when it is missing. A sun
/// standing over the opposite hemisphere rises at a low angle and earns the
/// bonus; a sun overhead in the local summer draws the penalty.
#[expect(clippy::float_arithmetic, reason = "declination is mirrored for the southern hemisphere")]
#[must_use]
pub fn solar_bonus(sample: &RawSample, signals: &ExtendedSignals, config: &SolarConfig) -> i8 {
    let declination = solar_declination_deg(sample.sample_timestamp);
    let oriented = match signals.usable_latitude() {
        Some(latitude) if latitude < 0.0 => -declination,
        _ => declination,
    };
    let bonus = if oriented <= config.deep_low_sun_deg {
        config.deep_low_bonus
    } else if oriented <= config.low_sun_deg {
        config.low_bonus
    } else if oriented < config.high_sun_deg {
        0
    } else if oriented < config.deep_high_sun_deg {
        config.high_penalty
    } else {
        config.deep_high_penalty
    };
    bonus.clamp(-config.bound, config.bound)
}
