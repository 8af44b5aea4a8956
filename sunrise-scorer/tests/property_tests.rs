//! Property-based tests for the scoring engine.
//!
//! # Invariants tested
//!
//! - **Bounds:** every factor score lies within its maximum and the final
//!   score within `0..=100`, whatever the inputs.
//! - **Synergy bound:** the synergy adjustment never exceeds ±4.
//! - **Monotonicity:** raising humidity or aerosol optical depth never
//!   raises the corresponding factor score.
//! - **Determinism:** identical inputs give identical breakdowns.
//! - **Fog override:** sub-threshold visibility caps the final score.
//! - **Murk override:** a saturated overcast in mist under hazy air scores
//!   below 25 whatever the other readings are.


use proptest::prelude::*;
use sunrise_core::{AodConfig, HumidityConfig, Observation, SYNERGY_LIMIT, SunriseScorer};
use sunrise_scorer::{ScoringEngine, aod_points, humidity_points};

use proptest_support::{observation_strategy, sample_strategy, signals_strategy};

/// Whether an override caps the final score below the clamped total.
fn capped(observation: &Observation) -> bool {
    let sample = &observation.sample;
    let Some(visibility) = sample.usable_visibility() else {
        return false;
    };
    let saturated_overcast = sample.usable_cloud_cover().is_some_and(|cloud| cloud > 90.0)
        && sample.usable_humidity().is_some_and(|humidity| humidity > 90.0);
    visibility < 3.0 || (saturated_overcast && visibility < 5.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: scores stay inside their documented ranges.
    #[test]
    fn scores_are_bounded(observation in observation_strategy()) {
        let breakdown = ScoringEngine::new().score_observation(&observation);
        for (_, result) in breakdown.factors() {
            prop_assert!(result.score <= result.max_score);
        }
        prop_assert!(breakdown.final_score <= 100);
        prop_assert!(breakdown.synergy.abs() <= SYNERGY_LIMIT);
        prop_assert!(breakdown.post_rain_bonus == 0 || breakdown.post_rain_bonus == 5);
        prop_assert!(breakdown.solar_bonus.abs() <= 2);
    }

    /// Property: the final score is the clamped sum of its components,
    /// unless the fog or murk cap applies.
    #[test]
    fn final_score_follows_assembly(observation in observation_strategy()) {
        let breakdown = ScoringEngine::new().score_observation(&observation);
        let clamped = breakdown.unclamped_total().clamp(0, 100);
        prop_assert!(i32::from(breakdown.final_score) <= clamped);
        if !capped(&observation) {
            prop_assert_eq!(i32::from(breakdown.final_score), clamped);
        }
    }

    /// Property: more humidity never scores better.
    #[test]
    fn humidity_is_monotonic(low in 0.0_f64..=100.0, high in 0.0_f64..=100.0) {
        let config = HumidityConfig::default();
        let (drier, wetter) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(humidity_points(wetter, &config) <= humidity_points(drier, &config));
    }

    /// Property: above the Goldilocks range, more aerosol never scores better.
    #[test]
    fn aod_haze_is_monotonic(low in 0.05_f64..=2.0, high in 0.05_f64..=2.0) {
        let config = AodConfig::default();
        let (cleaner, hazier) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(aod_points(hazier, &config) <= aod_points(cleaner, &config));
    }

    /// Property: scoring is a pure function of its inputs.
    #[test]
    fn scoring_is_deterministic(observation in observation_strategy()) {
        let engine = ScoringEngine::new();
        prop_assert_eq!(
            engine.score_observation(&observation),
            engine.score_observation(&observation)
        );
    }

    /// Property: fog caps the final score at 30 regardless of other readings.
    #[test]
    fn fog_caps_every_morning(
        mut sample in sample_strategy(),
        signals in signals_strategy(),
        visibility in 0.0_f64..3.0,
    ) {
        sample.visibility_km = visibility;
        let breakdown = ScoringEngine::new().score(&sample, &signals);
        prop_assert_eq!(breakdown.synergy, -SYNERGY_LIMIT);
        prop_assert!(breakdown.final_score <= 30);
    }

    /// Property: a saturated overcast in mist under hazy air stays below 25,
    /// however the remaining readings fall.
    #[test]
    fn murky_overcast_stays_below_25(
        mut sample in sample_strategy(),
        mut signals in signals_strategy(),
        cloud in 90.5_f64..=100.0,
        humidity in 90.5_f64..=100.0,
        visibility in 0.0_f64..5.0,
        aod in 0.81_f64..3.0,
    ) {
        sample.cloud_cover_pct = cloud;
        sample.relative_humidity_pct = humidity;
        sample.visibility_km = visibility;
        signals.aerosol_optical_depth = Some(aod);
        let breakdown = ScoringEngine::new().score(&sample, &signals);
        prop_assert_eq!(breakdown.synergy, -SYNERGY_LIMIT);
        prop_assert!(breakdown.final_score < 25, "final score {}", breakdown.final_score);
    }
}
