//! Cross-factor interaction adjustment.
//!
//! The independent scorers cannot see that dry air under a clear sky is
//! vivid but dull, or that humidity mutes colour even when the cloud is
//! right. This module reads the raw readings (never the factor scores) and
//! returns a signed correction bounded by the configured synergy bound.
//!
//! Fog is a hard override: below the fog visibility threshold the result is
//! the most negative value outright, and below the mist threshold a fixed
//! strong penalty, regardless of every other reading. A murky overcast
//! (near-total cover over near-saturated air in mist) is treated like fog.
//! Both overrides also carry a ceiling for the final score.

use sunrise_core::{PercentBand, RawSample, SynergyConfig};

use crate::LayerComposition;

/// Result of the synergy adjuster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synergy {
    /// Signed adjustment within `±bound`.
    pub adjustment: i8,
    /// Whether the fog override fired.
    pub fog_override: bool,
    /// Highest final score allowed, when an override caps it.
    pub score_ceiling: Option<u8>,
}

/// Compute the synergy adjustment.
///
/// `optimal_band` is the cloud cover band shared with the cloud cover
/// scorer. `composition` is the best available layer composition; when it
/// reports low stratus, the reward for favourable cloud is replaced by a
/// penalty, and a high canvas earns a bonus on top.
///
/// # Examples
/// ```
/// use sunrise_core::{RawSample, ScoringConfig};
/// use sunrise_scorer::synergy;
/// # use chrono::{DateTime, Utc};
///
/// let config = ScoringConfig::default();
/// let mut sample = RawSample::new(45.0, 60.0, DateTime::<Utc>::default());
/// sample.visibility_km = 1.0;
/// let result = synergy(&sample, None, config.cloud_cover.optimal_band, &config.synergy);
/// assert!(result.fog_override);
/// assert_eq!(result.adjustment, -4);
/// assert_eq!(result.score_ceiling, Some(30));
/// ```
#[must_use]
pub fn synergy(
    sample: &RawSample,
    composition: Option<LayerComposition>,
    optimal_band: PercentBand,
    config: &SynergyConfig,
) -> Synergy {
    let bound = config.bound;
    if let Some(visibility) = sample.usable_visibility() {
        let murky = is_grey(sample, config) && visibility < config.mist_visibility_km;
        if visibility < config.fog_visibility_km {
            log::debug!("fog override: visibility {visibility} km");
            let ceiling = if murky {
                config.fog_score_ceiling.min(config.murk_score_ceiling)
            } else {
                config.fog_score_ceiling
            };
            return Synergy {
                adjustment: -bound,
                fog_override: true,
                score_ceiling: Some(ceiling),
            };
        }
        if murky {
            log::debug!("murk override: saturated overcast at {visibility} km");
            return Synergy {
                adjustment: -bound,
                fog_override: false,
                score_ceiling: Some(config.murk_score_ceiling),
            };
        }
        if visibility < config.mist_visibility_km {
            return Synergy {
                adjustment: config.mist_adjustment.clamp(-bound, bound),
                fog_override: false,
                score_ceiling: None,
            };
        }
    }
    let total = interaction_terms(sample, composition, optimal_band, config);
    let clamped = total.clamp(i32::from(-bound), i32::from(bound));
    Synergy {
        adjustment: i8::try_from(clamped).unwrap_or(0),
        fog_override: false,
        score_ceiling: None,
    }
}

/// Near-total cover over near-saturated air.
fn is_grey(sample: &RawSample, config: &SynergyConfig) -> bool {
    sample
        .usable_cloud_cover()
        .is_some_and(|cloud| cloud > config.overcast_cloud_pct)
        && sample
            .usable_humidity()
            .is_some_and(|humidity| humidity > config.overcast_humidity_pct)
}

fn interaction_terms(
    sample: &RawSample,
    composition: Option<LayerComposition>,
    optimal_band: PercentBand,
    config: &SynergyConfig,
) -> i32 {
    let (Some(cloud), Some(humidity)) = (sample.usable_cloud_cover(), sample.usable_humidity())
    else {
        return 0;
    };
    let in_band = optimal_band.contains(cloud);
    let humid = humidity >= config.humid_min_pct;
    let term = |applies: bool, adjustment: i8| if applies { i32::from(adjustment) } else { 0 };

    let boring = term(
        cloud < config.clear_sky_max_pct && humidity < config.dry_humidity_max_pct,
        config.boring_adjustment,
    );
    let washed_out = term(
        humid && cloud < config.sparse_cloud_max_pct,
        config.washed_out_adjustment,
    );
    let muted = term(humid && in_band, config.muted_adjustment);
    let grey = term(is_grey(sample, config), config.grey_adjustment);
    let favourable = if in_band && humidity < config.comfortable_humidity_max_pct {
        match composition {
            Some(LayerComposition::LowStratus) => i32::from(config.low_stratus_adjustment),
            Some(LayerComposition::HighCanvas) => {
                i32::from(config.ideal_adjustment) + i32::from(config.canvas_adjustment)
            }
            _ => i32::from(config.ideal_adjustment),
        }
    } else {
        0
    };
    let clarity = term(
        in_band
            && !humid
            && sample
                .usable_visibility()
                .is_some_and(|visibility| visibility >= config.clarity_visibility_km),
        config.clarity_adjustment,
    );
    boring + washed_out + muted + grey + favourable + clarity
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sunrise_core::ScoringConfig;
    use sunrise_core::test_support::equinox_timestamp;

    #[fixture]
    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    fn sample(cloud: f64, humidity: f64, visibility: f64) -> RawSample {
        let mut raw = RawSample::new(cloud, humidity, equinox_timestamp());
        raw.visibility_km = visibility;
        raw
    }

    fn adjust(
        config: &ScoringConfig,
        raw: &RawSample,
        composition: Option<LayerComposition>,
    ) -> Synergy {
        synergy(raw, composition, config.cloud_cover.optimal_band, &config.synergy)
    }

    #[rstest]
    #[case(sample(5.0, 40.0, 15.0), None, -2)]
    #[case(sample(10.0, 90.0, 15.0), None, -3)]
    #[case(sample(45.0, 90.0, 15.0), None, -1)]
    #[case(sample(45.0, 60.0, 15.0), None, 3)]
    #[case(sample(45.0, 60.0, 15.0), Some(LayerComposition::HighCanvas), 4)]
    #[case(sample(45.0, 60.0, 25.0), Some(LayerComposition::HighCanvas), 4)]
    #[case(sample(45.0, 60.0, 25.0), None, 4)]
    #[case(sample(45.0, 75.0, 25.0), None, 1)]
    #[case(sample(45.0, 60.0, 15.0), Some(LayerComposition::LowStratus), -2)]
    #[case(sample(80.0, 75.0, 15.0), None, 0)]
    #[case(sample(95.0, 92.0, 15.0), None, -4)]
    #[case(sample(95.0, 92.0, 15.0), Some(LayerComposition::LowStratus), -4)]
    #[case(sample(90.0, 95.0, 15.0), None, 0)]
    #[case(sample(95.0, 90.0, 15.0), None, 0)]
    fn interaction_terms_are_summed_and_bounded(
        config: ScoringConfig,
        #[case] raw: RawSample,
        #[case] composition: Option<LayerComposition>,
        #[case] expected: i8,
    ) {
        let result = adjust(&config, &raw, composition);
        assert_eq!(result.adjustment, expected);
        assert!(!result.fog_override);
        assert_eq!(result.score_ceiling, None);
    }

    #[rstest]
    #[case(sample(45.0, 60.0, 2.9))]
    #[case(sample(0.0, 100.0, 0.0))]
    #[case(sample(100.0, 10.0, 1.0))]
    fn fog_forces_the_most_negative_value(config: ScoringConfig, #[case] raw: RawSample) {
        let result = adjust(&config, &raw, Some(LayerComposition::HighCanvas));
        assert_eq!(result.adjustment, -config.synergy.bound);
        assert!(result.fog_override);
        assert_eq!(result.score_ceiling, Some(30));
    }

    #[rstest]
    fn mist_forces_a_fixed_penalty(config: ScoringConfig) {
        let result = adjust(&config, &sample(45.0, 60.0, 4.0), None);
        assert_eq!(result.adjustment, -3);
        assert!(!result.fog_override);
        assert_eq!(result.score_ceiling, None);
    }

    #[rstest]
    #[case(sample(95.0, 92.0, 4.5), 24)]
    #[case(sample(100.0, 100.0, 3.0), 24)]
    #[case(sample(91.0, 91.0, 0.5), 24)]
    fn saturated_overcast_in_mist_is_capped(
        config: ScoringConfig,
        #[case] raw: RawSample,
        #[case] ceiling: u8,
    ) {
        let result = adjust(&config, &raw, Some(LayerComposition::HighCanvas));
        assert_eq!(result.adjustment, -config.synergy.bound);
        assert_eq!(result.score_ceiling, Some(ceiling));
    }

    #[rstest]
    fn grey_dawn_needs_both_cover_and_saturation(config: ScoringConfig) {
        let dry = adjust(&config, &sample(95.0, 80.0, 4.5), None);
        assert_eq!(dry.adjustment, -3);
        assert_eq!(dry.score_ceiling, None);
        let unknown_cover = adjust(&config, &sample(f64::NAN, 95.0, 4.5), None);
        assert_eq!(unknown_cover.score_ceiling, None);
    }

    #[rstest]
    fn missing_readings_contribute_nothing(config: ScoringConfig) {
        let result = adjust(&config, &sample(f64::NAN, 60.0, f64::NAN), None);
        assert_eq!(result.adjustment, 0);
    }
}
