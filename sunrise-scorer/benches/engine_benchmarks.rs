//! Criterion benchmarks for the scoring engine.
//!
//! Measures batch scoring across 1, 100 and 1000 locations to track the
//! per-observation cost and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package sunrise-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sunrise_core::SunriseScorer;
use sunrise_scorer::{ScoringEngine, rank_locations};

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_observations};

/// Batch sizes to benchmark.
const BATCH_SIZES: &[u64] = &[1, 100, 1000];

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_batch");
    let engine = ScoringEngine::new();

    for &size in BATCH_SIZES {
        let count = usize::try_from(size).unwrap_or(usize::MAX);
        let observations = generate_observations(count, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("observations", size), &size, |b, _| {
            b.iter(|| {
                for observation in &observations {
                    black_box(engine.score_observation(black_box(observation)));
                }
            });
        });
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let engine = ScoringEngine::new();
    let observations = generate_observations(100, BENCHMARK_SEED);
    let named: Vec<(String, _)> = observations
        .iter()
        .enumerate()
        .map(|(index, observation)| (format!("location-{index}"), observation))
        .collect();
    c.bench_function("rank_100_locations", |b| {
        b.iter(|| black_box(rank_locations(&engine, named.iter().cloned())));
    });
}

criterion_group!(benches, bench_scoring, bench_ranking);
criterion_main!(benches);
