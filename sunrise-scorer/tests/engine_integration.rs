#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when serialisation breaks"
)]

//! Integration coverage for sharing the engine and serialising its output.

use std::thread;

use rstest::{fixture, rstest};
use sunrise_core::test_support::{
    fog_observation, heavy_overcast_observation, near_ideal_observation, post_rain_observation,
};
use sunrise_core::{Observation, SunriseScorer};
use sunrise_scorer::{Evaluation, ScoringEngine};

#[fixture]
fn observations() -> Vec<Observation> {
    vec![
        near_ideal_observation(),
        heavy_overcast_observation(),
        fog_observation(),
        post_rain_observation(),
    ]
}

#[rstest]
fn one_engine_serves_many_threads(observations: Vec<Observation>) {
    let engine = ScoringEngine::new();
    let sequential: Vec<u8> = observations
        .iter()
        .map(|observation| engine.score_observation(observation).final_score)
        .collect();
    let concurrent: Vec<u8> = thread::scope(|scope| {
        let handles: Vec<_> = observations
            .iter()
            .map(|observation| {
                let shared = &engine;
                scope.spawn(move || shared.score_observation(observation).final_score)
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("scoring thread completes"))
            .collect()
    });
    assert_eq!(concurrent, sequential);
    assert_eq!(sequential, [98, 24, 30, 98]);
}

#[rstest]
fn engine_is_usable_as_a_trait_object() {
    let scorer: Box<dyn SunriseScorer> = Box::new(ScoringEngine::new());
    assert_eq!(scorer.score_observation(&fog_observation()).final_score, 30);
}

#[rstest]
fn evaluation_serialises_with_camel_case_breakdown() {
    let evaluation = ScoringEngine::new().evaluate_observation(&post_rain_observation());
    let json = serde_json::to_value(&evaluation).expect("serialise evaluation");
    assert_eq!(json["score"], 98);
    assert_eq!(json["verdict"], "exceptional");
    assert_eq!(json["recommendation"], "go");
    let breakdown = &json["breakdown"];
    assert_eq!(breakdown["postRainBonus"], 5);
    assert_eq!(breakdown["isPostRain"], true);
    assert_eq!(breakdown["finalScore"], 98);
    assert_eq!(breakdown["cloudCover"]["maxScore"], 25);
    assert_eq!(breakdown["multiLevelCloud"]["source"], "measured");

    let restored: Evaluation = serde_json::from_value(json).expect("deserialise evaluation");
    assert_eq!(restored.score, evaluation.score);
    assert_eq!(restored.breakdown.synergy, evaluation.breakdown.synergy);
}

#[rstest]
fn unavailable_factors_serialise_without_a_value() {
    let mut observation = near_ideal_observation();
    observation.signals.aerosol_optical_depth = None;
    let evaluation = ScoringEngine::new().evaluate_observation(&observation);
    let json = serde_json::to_value(&evaluation.breakdown).expect("serialise breakdown");
    assert!(json["aod"]["value"].is_null());
    assert_eq!(json["aod"]["source"], "unavailable");
}
