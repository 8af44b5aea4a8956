#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when a scenario step is skipped"
)]

//! Behavioural coverage for provider normalisation.

use std::cell::RefCell;

use chrono::{TimeZone, Utc};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use sunrise_core::{
    Distance, DistanceUnit, Fraction, FractionScale, Observation, Pressure, PressureUnit,
    ProviderObservation, Speed, SpeedUnit, normalise,
};

const TOLERANCE: f64 = 1e-3;

#[fixture]
fn provider() -> RefCell<ProviderObservation> {
    RefCell::new(ProviderObservation {
        cloud_cover: Fraction::percent(40.0),
        relative_humidity: Fraction::percent(70.0),
        precip_probability: Fraction::percent(10.0),
        has_active_precipitation: false,
        wind_speed: Speed::new(10.0, SpeedUnit::KilometresPerHour),
        visibility: Distance::new(20.0, DistanceUnit::Kilometres),
        weather_description: "Partly cloudy".to_owned(),
        sample_timestamp: Utc
            .with_ymd_and_hms(2025, 3, 21, 0, 45, 0)
            .single()
            .expect("valid timestamp"),
        cloud_layers: None,
        cloud_ceiling: None,
        pressure_series: None,
        aerosol_optical_depth: None,
        night_rain_hours: None,
        latitude_deg: None,
    })
}

#[fixture]
fn observation() -> RefCell<Option<Observation>> {
    RefCell::new(None)
}

#[given("a provider reporting 10 miles of visibility")]
fn visibility_in_miles(#[from(provider)] provider: &RefCell<ProviderObservation>) {
    provider.borrow_mut().visibility = Distance::new(10.0, DistanceUnit::Miles);
}

#[given("a provider reporting a 5 mph wind")]
fn wind_in_mph(#[from(provider)] provider: &RefCell<ProviderObservation>) {
    provider.borrow_mut().wind_speed = Speed::new(5.0, SpeedUnit::MilesPerHour);
}

#[given("a provider reporting cloud cover as the fraction 0.45")]
fn cloud_as_fraction(#[from(provider)] provider: &RefCell<ProviderObservation>) {
    provider.borrow_mut().cloud_cover = Fraction::new(0.45, FractionScale::Unit);
}

#[given("a provider reporting pressure falling from 30.00 to 29.90 inHg")]
fn pressure_in_inches(#[from(provider)] provider: &RefCell<ProviderObservation>) {
    provider.borrow_mut().pressure_series = Some(vec![
        Pressure::new(30.00, PressureUnit::InchesOfMercury),
        Pressure::new(29.95, PressureUnit::InchesOfMercury),
        Pressure::new(29.90, PressureUnit::InchesOfMercury),
    ]);
}

#[given("a provider reporting visibility that is not a number")]
fn visibility_nan(#[from(provider)] provider: &RefCell<ProviderObservation>) {
    provider.borrow_mut().visibility = Distance::new(f64::NAN, DistanceUnit::Kilometres);
}

#[when("the readings are normalised")]
fn normalise_readings(
    #[from(provider)] provider: &RefCell<ProviderObservation>,
    #[from(observation)] observation: &RefCell<Option<Observation>>,
) {
    *observation.borrow_mut() = Some(normalise(&provider.borrow()));
}

#[then("the visibility is {expected} kilometres")]
#[expect(clippy::float_arithmetic, reason = "assertions compare floating point values")]
fn visibility_is(expected: f64, #[from(observation)] observation: &RefCell<Option<Observation>>) {
    let recorded = observation.borrow();
    let sample = &recorded.as_ref().expect("readings normalised").sample;
    assert!((sample.visibility_km - expected).abs() < TOLERANCE);
}

#[then("the wind speed is {expected} km/h")]
#[expect(clippy::float_arithmetic, reason = "assertions compare floating point values")]
fn wind_is(expected: f64, #[from(observation)] observation: &RefCell<Option<Observation>>) {
    let recorded = observation.borrow();
    let sample = &recorded.as_ref().expect("readings normalised").sample;
    assert!((sample.wind_speed_kmh - expected).abs() < TOLERANCE);
}

#[then("the cloud cover is {expected} percent")]
#[expect(clippy::float_arithmetic, reason = "assertions compare floating point values")]
fn cloud_is(expected: f64, #[from(observation)] observation: &RefCell<Option<Observation>>) {
    let recorded = observation.borrow();
    let sample = &recorded.as_ref().expect("readings normalised").sample;
    assert!((sample.cloud_cover_pct - expected).abs() < TOLERANCE);
}

#[then("the pressure trend is {expected} hPa")]
#[expect(clippy::float_arithmetic, reason = "assertions compare floating point values")]
fn pressure_trend_is(
    expected: f64,
    #[from(observation)] observation: &RefCell<Option<Observation>>,
) {
    let recorded = observation.borrow();
    let delta = recorded
        .as_ref()
        .expect("readings normalised")
        .signals
        .usable_pressure_delta()
        .expect("pressure trend available");
    assert!((delta - expected).abs() < TOLERANCE);
}

#[then("visibility is the only invalid field")]
fn visibility_invalid(#[from(observation)] observation: &RefCell<Option<Observation>>) {
    let recorded = observation.borrow();
    let sample = &recorded.as_ref().expect("readings normalised").sample;
    assert_eq!(sample.invalid_fields(), vec!["visibility_km"]);
}

#[scenario(path = "tests/features/normalisation.feature", index = 0)]
fn imperial_readings_become_metric(
    provider: RefCell<ProviderObservation>,
    observation: RefCell<Option<Observation>>,
) {
    let _ = (provider, observation);
}

#[scenario(path = "tests/features/normalisation.feature", index = 1)]
fn unit_fractions_become_percentages(
    provider: RefCell<ProviderObservation>,
    observation: RefCell<Option<Observation>>,
) {
    let _ = (provider, observation);
}

#[scenario(path = "tests/features/normalisation.feature", index = 2)]
fn pressure_converts_to_hectopascals(
    provider: RefCell<ProviderObservation>,
    observation: RefCell<Option<Observation>>,
) {
    let _ = (provider, observation);
}

#[scenario(path = "tests/features/normalisation.feature", index = 3)]
fn unusable_readings_are_flagged(
    provider: RefCell<ProviderObservation>,
    observation: RefCell<Option<Observation>>,
) {
    let _ = (provider, observation);
}
