//! Deterministic observation generation for scoring benchmarks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sunrise_core::test_support::timestamp_on;
use sunrise_core::{CloudLayers, ExtendedSignals, Observation, PressureSeries, RawSample};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Provider descriptions cycled through the generated samples.
const DESCRIPTIONS: [&str; 5] = ["Clear", "Partly cloudy", "Overcast", "Haze", "Light rain"];

/// Generate `count` observations with every optional signal populated.
#[must_use]
pub fn generate_observations(count: usize, seed: u64) -> Vec<Observation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let month = rng.gen_range(1..=12);
            let day = rng.gen_range(1..=28);
            let mut sample = RawSample::new(
                rng.gen_range(0.0..=100.0),
                rng.gen_range(30.0..=100.0),
                timestamp_on(2025, month, day),
            );
            sample.precip_probability_pct = rng.gen_range(0.0..=100.0);
            sample.wind_speed_kmh = rng.gen_range(0.0..=60.0);
            sample.visibility_km = rng.gen_range(0.5..=40.0);
            sample.weather_description = DESCRIPTIONS
                .get(rng.gen_range(0..DESCRIPTIONS.len()))
                .copied()
                .unwrap_or_default()
                .to_owned();
            let start: f64 = rng.gen_range(1000.0..=1025.0);
            let end: f64 = rng.gen_range(1000.0..=1025.0);
            let signals = ExtendedSignals {
                multi_level_cloud: Some(CloudLayers::new(
                    rng.gen_range(0.0..=60.0),
                    rng.gen_range(0.0..=60.0),
                    rng.gen_range(0.0..=90.0),
                )),
                cloud_ceiling_m: Some(rng.gen_range(300.0..=9000.0)),
                pressure_series_hpa: Some(PressureSeries::new(vec![start, end])),
                aerosol_optical_depth: Some(rng.gen_range(0.01..=1.2)),
                night_rain_hours: Some(rng.gen_range(0.0..=6.0)),
                latitude_deg: Some(rng.gen_range(-60.0..=60.0)),
            };
            Observation::new(sample, signals)
        })
        .collect()
}
