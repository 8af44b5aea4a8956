//! Total cloud cover.
//!
//! A clear sky has nothing to light up and a full overcast blocks the sun,
//! so the curve peaks across a plateau inside the optimal band and falls
//! away on both sides.

use sunrise_core::{CloudCoverConfig, FactorResult, RawSample};

use super::points;

/// Continuous cloud cover curve before rounding.
///
/// `cover_pct` is clamped to `0..=100`. The result lies within
/// `0..=max_score` for any valid configuration.
///
/// # Examples
/// ```
/// use sunrise_core::CloudCoverConfig;
/// use sunrise_scorer::cloud_cover_curve;
///
/// let config = CloudCoverConfig::default();
/// assert!((cloud_cover_curve(45.0, &config) - 25.0).abs() < 1e-9);
/// assert!((cloud_cover_curve(75.0, &config) - 17.0).abs() < 1e-9);
/// ```
#[expect(clippy::float_arithmetic, reason = "piecewise-linear curve")]
#[must_use]
pub fn cloud_cover_curve(cover_pct: f64, config: &CloudCoverConfig) -> f64 {
    let cover = cover_pct.clamp(0.0, 100.0);
    let max = f64::from(config.max_score);
    let band = config.optimal_band;
    let plateau = config.plateau;
    let raw = if cover < band.low {
        let progress = cover / band.low;
        config.clear_sky_score + (config.band_entry_score - config.clear_sky_score) * progress
    } else if cover < plateau.low {
        let progress = (cover - band.low) / (plateau.low - band.low);
        config.band_entry_score + (max - config.band_entry_score) * progress
    } else if cover <= plateau.high {
        max
    } else if cover <= config.gentle_decay_end_pct {
        max - config.gentle_decay_per_pct * (cover - plateau.high)
    } else {
        let steep_start =
            max - config.gentle_decay_per_pct * (config.gentle_decay_end_pct - plateau.high);
        steep_start - config.steep_decay_per_pct * (cover - config.gentle_decay_end_pct)
    };
    raw.clamp(0.0, max)
}

/// Rounded cloud cover sub-score.
#[must_use]
pub fn cloud_cover_points(cover_pct: f64, config: &CloudCoverConfig) -> u8 {
    points(cloud_cover_curve(cover_pct, config), config.max_score)
}

/// Score total cloud cover, or the neutral score when it is unusable.
#[must_use]
pub fn score_cloud_cover(sample: &RawSample, config: &CloudCoverConfig) -> FactorResult {
    sample.usable_cloud_cover().map_or_else(
        || {
            log::debug!("cloud cover unusable; using neutral score {}", config.neutral_score);
            FactorResult::unavailable(config.neutral_score, config.max_score)
        },
        |cover| FactorResult::measured(cover, cloud_cover_points(cover, config), config.max_score),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sunrise_core::SignalSource;
    use sunrise_core::test_support::equinox_timestamp;

    #[fixture]
    fn config() -> CloudCoverConfig {
        CloudCoverConfig::default()
    }

    #[rstest]
    #[case(0.0, 8)]
    #[case(15.0, 15)]
    #[case(30.0, 22)]
    #[case(35.0, 24)]
    #[case(40.0, 25)]
    #[case(55.0, 25)]
    #[case(60.0, 23)]
    #[case(75.0, 17)]
    #[case(90.0, 7)]
    #[case(95.0, 3)]
    #[case(100.0, 0)]
    #[case(140.0, 0)]
    fn curve_matches_calibration(config: CloudCoverConfig, #[case] cover: f64, #[case] expected: u8) {
        assert_eq!(cloud_cover_points(cover, &config), expected);
    }

    #[rstest]
    fn peak_sits_inside_the_optimal_band(config: CloudCoverConfig) {
        let clear = cloud_cover_points(0.0, &config);
        let overcast = cloud_cover_points(100.0, &config);
        let peak = cloud_cover_points(47.5, &config);
        assert_eq!(peak, config.max_score);
        assert!(clear < peak);
        assert!(overcast < clear);
    }

    #[rstest]
    fn unusable_cover_is_neutral(config: CloudCoverConfig) {
        let sample = RawSample::new(f64::NAN, 60.0, equinox_timestamp());
        let result = score_cloud_cover(&sample, &config);
        assert_eq!(result.score, config.neutral_score);
        assert_eq!(result.source, SignalSource::Unavailable);
    }
}
