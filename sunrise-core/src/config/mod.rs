//! Central scoring configuration.
//!
//! Every factor weight, band boundary, step table, neutral fallback and
//! bonus constant lives here, grouped by component. Recalibrating the
//! engine is therefore a data change: build a [`ScoringConfig`] (or load
//! one from JSON with the `serde` feature), call
//! [`ScoringConfig::validate`], and hand it to the engine.
//!
//! The default revision spends a base budget of 95 points across the eight
//! factors and allows a synergy swing of ±4, for 99 points in total. The
//! post-rain and solar bonuses sit outside that budget; the final clamp
//! absorbs any overshoot.
//!
//! # Examples
//! ```
//! use sunrise_core::ScoringConfig;
//!
//! let config = ScoringConfig::default().validate()?;
//! assert_eq!(config.factor_budget(), 95);
//! assert_eq!(config.total_budget(), 99);
//! # Ok::<(), sunrise_core::ConfigError>(())
//! ```

mod error;
mod validation;

pub use error::ConfigError;

/// Largest synergy swing a configuration may request.
pub const SYNERGY_LIMIT: i8 = 4;

/// Largest solar-angle adjustment a configuration may request.
pub const SOLAR_LIMIT: i8 = 2;

/// An inclusive percentage (or other unit) range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentBand {
    /// Lower bound, inclusive.
    pub low: f64,
    /// Upper bound, inclusive.
    pub high: f64,
}

impl PercentBand {
    /// Construct a band.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies inside the band.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// One row of a [`StepTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdStep {
    /// Boundary value for the row.
    pub threshold: f64,
    /// Score (or penalty) awarded by the row.
    pub score: u8,
}

impl ThresholdStep {
    /// Construct a row.
    #[must_use]
    pub const fn new(threshold: f64, score: u8) -> Self {
        Self { threshold, score }
    }
}

/// A piecewise-constant mapping from a reading to a score.
///
/// Tables are read in one of two directions. [`StepTable::at_or_below`]
/// expects ascending thresholds and awards the first row whose threshold is
/// not exceeded; [`StepTable::at_or_above`] expects descending thresholds
/// and awards the first row the reading reaches. Readings matching no row
/// receive `otherwise`.
///
/// # Examples
/// ```
/// use sunrise_core::{StepTable, ThresholdStep};
///
/// let table = StepTable::new(
///     vec![ThresholdStep::new(10.0, 5), ThresholdStep::new(20.0, 3)],
///     0,
/// );
/// assert_eq!(table.at_or_below(10.0), 5);
/// assert_eq!(table.at_or_below(15.0), 3);
/// assert_eq!(table.at_or_below(25.0), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepTable {
    /// Rows in reading order.
    pub steps: Vec<ThresholdStep>,
    /// Score for readings beyond the last row.
    pub otherwise: u8,
}

impl StepTable {
    /// Construct a table.
    #[must_use]
    pub const fn new(steps: Vec<ThresholdStep>, otherwise: u8) -> Self {
        Self { steps, otherwise }
    }

    /// Score for `value` in an ascending table.
    #[must_use]
    pub fn at_or_below(&self, value: f64) -> u8 {
        self.steps
            .iter()
            .find(|step| value <= step.threshold)
            .map_or(self.otherwise, |step| step.score)
    }

    /// Score for `value` in a descending table.
    #[must_use]
    pub fn at_or_above(&self, value: f64) -> u8 {
        self.steps
            .iter()
            .find(|step| value >= step.threshold)
            .map_or(self.otherwise, |step| step.score)
    }

    /// Largest score the table can award.
    #[must_use]
    pub fn max_score(&self) -> u8 {
        self.steps
            .iter()
            .map(|step| step.score)
            .fold(self.otherwise, u8::max)
    }
}

fn steps(rows: &[(f64, u8)], otherwise: u8) -> StepTable {
    StepTable::new(
        rows.iter()
            .map(|&(threshold, score)| ThresholdStep::new(threshold, score))
            .collect(),
        otherwise,
    )
}

/// Top-level configuration handed to the scoring engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// Sum the eight factor maxima must reach.
    pub base_budget: u8,
    /// Total cloud cover curve.
    pub cloud_cover: CloudCoverConfig,
    /// Cloud layer distribution scorer.
    pub cloud_layers: CloudLayerConfig,
    /// Humidity step function.
    pub humidity: HumidityConfig,
    /// Pressure trend bands.
    pub pressure: PressureConfig,
    /// Aerosol optical depth curve.
    pub aod: AodConfig,
    /// Visibility steps.
    pub visibility: VisibilityConfig,
    /// Weather-condition penalty gate.
    pub weather: WeatherConfig,
    /// Wind curve.
    pub wind: WindConfig,
    /// Cross-factor synergy adjuster.
    pub synergy: SynergyConfig,
    /// Post-rain bonus detection.
    pub post_rain: PostRainConfig,
    /// Seasonal solar-angle bonus.
    pub solar: SolarConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_budget: 95,
            cloud_cover: CloudCoverConfig::default(),
            cloud_layers: CloudLayerConfig::default(),
            humidity: HumidityConfig::default(),
            pressure: PressureConfig::default(),
            aod: AodConfig::default(),
            visibility: VisibilityConfig::default(),
            weather: WeatherConfig::default(),
            wind: WindConfig::default(),
            synergy: SynergyConfig::default(),
            post_rain: PostRainConfig::default(),
            solar: SolarConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Maximum scores of the eight factors in breakdown order.
    #[must_use]
    pub const fn factor_maxima(&self) -> [u8; 8] {
        [
            self.cloud_cover.max_score,
            self.cloud_layers.max_score,
            self.humidity.max_score,
            self.pressure.max_score,
            self.aod.max_score,
            self.visibility.max_score,
            self.weather.max_score,
            self.wind.max_score,
        ]
    }

    /// Sum of the eight factor maxima.
    #[must_use]
    pub fn factor_budget(&self) -> u32 {
        self.factor_maxima().into_iter().map(u32::from).sum()
    }

    /// Factor budget plus the synergy bound.
    #[must_use]
    pub fn total_budget(&self) -> u32 {
        self.factor_budget() + u32::from(self.synergy.bound.unsigned_abs())
    }

    /// Parse a JSON configuration and validate it.
    ///
    /// Omitted fields take their default values.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and any validation
    /// error raised by [`ScoringConfig::validate`].
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let parsed: Self =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })?;
        parsed.validate()
    }
}

/// Piecewise curve over total cloud cover.
///
/// The score climbs from `clear_sky_score` at 0% to `band_entry_score` at
/// the start of the optimal band, reaches `max_score` across the plateau,
/// then decays gently until `gentle_decay_end_pct` and steeply after it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CloudCoverConfig {
    /// Factor weight.
    pub max_score: u8,
    /// Score used when cloud cover is unusable.
    pub neutral_score: u8,
    /// Score for a completely clear sky.
    pub clear_sky_score: f64,
    /// Score at the lower edge of the optimal band.
    pub band_entry_score: f64,
    /// Cover range considered favourable; shared with the synergy adjuster.
    pub optimal_band: PercentBand,
    /// Inner range awarding full marks.
    pub plateau: PercentBand,
    /// Cover at which the decay turns steep.
    pub gentle_decay_end_pct: f64,
    /// Points lost per percent between the plateau and the steep section.
    pub gentle_decay_per_pct: f64,
    /// Points lost per percent beyond `gentle_decay_end_pct`.
    pub steep_decay_per_pct: f64,
}

impl Default for CloudCoverConfig {
    fn default() -> Self {
        Self {
            max_score: 25,
            neutral_score: 12,
            clear_sky_score: 8.0,
            band_entry_score: 22.0,
            optimal_band: PercentBand::new(30.0, 60.0),
            plateau: PercentBand::new(40.0, 55.0),
            gentle_decay_end_pct: 75.0,
            gentle_decay_per_pct: 0.4,
            steep_decay_per_pct: 0.68,
        }
    }
}

/// Cloud layer classification thresholds and per-class scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CloudLayerConfig {
    /// Factor weight.
    pub max_score: u8,
    /// Score when neither layers nor a usable ceiling are available.
    pub neutral_score: u8,
    /// High cloud needed to count as a lit canvas.
    pub high_canvas_min_pct: f64,
    /// Low cloud below which the horizon counts as clear.
    pub low_clear_max_pct: f64,
    /// Low cloud at which the horizon counts as blocked.
    pub low_blocked_min_pct: f64,
    /// Mid cloud needed to act as a canvas when high cloud is missing.
    pub mid_canvas_min_pct: f64,
    /// Mid cloud that starts to interfere with a high canvas.
    pub mid_interference_pct: f64,
    /// Mid cloud that interferes heavily.
    pub mid_heavy_pct: f64,
    /// Points a high canvas loses to interfering mid cloud.
    pub mid_interference_penalty: u8,
    /// Points a high canvas loses to heavy mid cloud; mixed skies lose the
    /// interference penalty instead.
    pub mid_heavy_penalty: u8,
    /// Share of layered cloud that makes low cloud dominant.
    pub low_stratus_share: f64,
    /// Minimum low cloud for the dominance rule to apply.
    pub low_stratus_min_pct: f64,
    /// High canvas over a clear horizon.
    pub canvas_score: u8,
    /// High cloud with partial low cloud.
    pub mixed_score: u8,
    /// High cloud above a blocked horizon.
    pub blocked_score: u8,
    /// Mid-level canvas with no high cloud.
    pub mid_canvas_score: u8,
    /// Thin or absent cloud at every level.
    pub thin_score: u8,
    /// Sky dominated by low stratus.
    pub low_stratus_score: u8,
    /// Total cover needed before a ceiling reading is trusted.
    pub ceiling_min_cover_pct: f64,
    /// Ceiling height (m) to score, descending thresholds.
    pub ceiling_steps: StepTable,
    /// Ceiling below which cloud is treated as low stratus.
    pub stratus_ceiling_max_m: f64,
    /// Ceiling at or above which cloud is treated as a high canvas.
    pub canvas_ceiling_min_m: f64,
}

impl Default for CloudLayerConfig {
    fn default() -> Self {
        Self {
            max_score: 10,
            neutral_score: 5,
            high_canvas_min_pct: 20.0,
            low_clear_max_pct: 30.0,
            low_blocked_min_pct: 60.0,
            mid_canvas_min_pct: 20.0,
            mid_interference_pct: 30.0,
            mid_heavy_pct: 50.0,
            mid_interference_penalty: 1,
            mid_heavy_penalty: 2,
            low_stratus_share: 0.7,
            low_stratus_min_pct: 15.0,
            canvas_score: 10,
            mixed_score: 6,
            blocked_score: 3,
            mid_canvas_score: 3,
            thin_score: 2,
            low_stratus_score: 1,
            ceiling_min_cover_pct: 10.0,
            ceiling_steps: steps(&[(6000.0, 9), (3000.0, 7), (2000.0, 5), (1000.0, 3)], 1),
            stratus_ceiling_max_m: 1000.0,
            canvas_ceiling_min_m: 6000.0,
        }
    }
}

/// Non-increasing humidity step function.
///
/// Typical coastal pre-dawn humidity (80–95%) keeps well over half the
/// weight; only fog-adjacent readings above 95% fall towards the floor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HumidityConfig {
    /// Factor weight.
    pub max_score: u8,
    /// Score used when humidity is unusable.
    pub neutral_score: u8,
    /// Humidity (%) to score, ascending thresholds.
    pub steps: StepTable,
}

impl Default for HumidityConfig {
    fn default() -> Self {
        Self {
            max_score: 15,
            neutral_score: 8,
            steps: steps(
                &[
                    (55.0, 15),
                    (65.0, 14),
                    (75.0, 13),
                    (85.0, 12),
                    (90.0, 11),
                    (95.0, 9),
                    (97.0, 5),
                    (98.0, 3),
                ],
                1,
            ),
        }
    }
}

/// Pressure trend bands over the endpoint delta (hPa).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PressureConfig {
    /// Factor weight.
    pub max_score: u8,
    /// Score used when the series is unusable.
    pub neutral_score: u8,
    /// Fall beyond which a storm is arriving.
    pub storm_fall_hpa: f64,
    /// Fall at which a clearing front is signalled.
    pub clearing_fall_hpa: f64,
    /// Fall that still registers as a trend.
    pub small_fall_hpa: f64,
    /// Rise that registers as a trend.
    pub rise_hpa: f64,
    /// Rapid fall.
    pub storm_score: u8,
    /// Moderate fall.
    pub clearing_score: u8,
    /// Small fall.
    pub small_fall_score: u8,
    /// Stable pressure.
    pub stable_score: u8,
    /// Rising pressure.
    pub rising_score: u8,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            max_score: 10,
            neutral_score: 5,
            storm_fall_hpa: 5.0,
            clearing_fall_hpa: 2.0,
            small_fall_hpa: 0.5,
            rise_hpa: 0.5,
            storm_score: 2,
            clearing_score: 10,
            small_fall_score: 7,
            stable_score: 5,
            rising_score: 4,
        }
    }
}

/// Goldilocks curve over aerosol optical depth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AodConfig {
    /// Factor weight, awarded across the Goldilocks band.
    pub max_score: u8,
    /// Score used when AOD is absent or invalid.
    pub neutral_score: u8,
    /// AOD below which air is too clean to scatter well.
    pub pristine_below: f64,
    /// Score for pristine air.
    pub pristine_score: u8,
    /// Upper edge of the Goldilocks band.
    pub goldilocks_max: f64,
    /// Haze (AOD) to score beyond the band, ascending thresholds.
    pub haze_steps: StepTable,
}

impl Default for AodConfig {
    fn default() -> Self {
        Self {
            max_score: 15,
            neutral_score: 8,
            pristine_below: 0.05,
            pristine_score: 12,
            goldilocks_max: 0.15,
            haze_steps: steps(
                &[(0.25, 12), (0.4, 9), (0.6, 6), (0.8, 4), (1.0, 2)],
                1,
            ),
        }
    }
}

/// Coarse visibility steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisibilityConfig {
    /// Factor weight.
    pub max_score: u8,
    /// Score used when visibility is unusable.
    pub neutral_score: u8,
    /// Visibility (km) to score, descending thresholds.
    pub steps: StepTable,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            max_score: 5,
            neutral_score: 3,
            steps: steps(&[(20.0, 5), (10.0, 4), (5.0, 3), (3.0, 2), (1.0, 1)], 0),
        }
    }
}

/// Penalty gate for precipitation and adverse conditions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeatherConfig {
    /// Factor weight; the gate starts here.
    pub max_score: u8,
    /// Precipitation probability (%) to penalty, descending thresholds.
    pub precip_penalties: StepTable,
    /// Penalty while precipitation is falling.
    pub active_precip_penalty: u8,
    /// Penalty for storm descriptions.
    pub storm_penalty: u8,
    /// Penalty for fog or mist descriptions.
    pub fog_penalty: u8,
    /// Penalty for haze, smoke or dust descriptions.
    pub haze_penalty: u8,
    /// Credit for an explicitly clear description.
    pub clear_credit: u8,
    /// Description fragments meaning storm.
    pub storm_terms: Vec<String>,
    /// Description fragments meaning fog.
    pub fog_terms: Vec<String>,
    /// Description fragments meaning haze.
    pub haze_terms: Vec<String>,
    /// Description fragments meaning clear sky.
    pub clear_terms: Vec<String>,
}

fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|&word| word.to_owned()).collect()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            max_score: 10,
            precip_penalties: steps(&[(70.0, 6), (40.0, 4), (20.0, 2)], 0),
            active_precip_penalty: 4,
            storm_penalty: 5,
            fog_penalty: 4,
            haze_penalty: 2,
            clear_credit: 1,
            storm_terms: terms(&["thunder", "storm", "squall", "cyclone", "tornado"]),
            fog_terms: terms(&["fog", "mist"]),
            haze_terms: terms(&["haze", "smoke", "dust", "smog", "sand"]),
            clear_terms: terms(&["clear", "sunny", "fair"]),
        }
    }
}

/// Named wind curves.
///
/// Whether calm air or a light breeze makes for the better sunrise is a
/// tunable calibration choice; both shapes are kept and selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WindCurve {
    /// Monotonically decreasing: calm air preserves cloud structure and
    /// suits long exposures.
    #[default]
    CalmPreferred,
    /// Peaked: dead calm traps boundary-layer haze, a moderate breeze
    /// clears it, strong wind breaks structure up.
    ModerateBreeze,
}

/// Parameters of [`WindCurve::ModerateBreeze`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModerateBreeze {
    /// Speed (km/h) below which air counts as dead calm.
    pub dead_calm_below_kmh: f64,
    /// Score for dead calm.
    pub dead_calm_score: u8,
    /// Speed (km/h) to score above dead calm, ascending thresholds.
    pub steps: StepTable,
}

impl Default for ModerateBreeze {
    fn default() -> Self {
        Self {
            dead_calm_below_kmh: 3.0,
            dead_calm_score: 3,
            steps: steps(&[(15.0, 5), (25.0, 4), (35.0, 2), (50.0, 1)], 0),
        }
    }
}

/// Wind scoring parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindConfig {
    /// Factor weight.
    pub max_score: u8,
    /// Score used when wind speed is unusable.
    pub neutral_score: u8,
    /// Curve in use.
    pub curve: WindCurve,
    /// Speed (km/h) to score for [`WindCurve::CalmPreferred`], ascending.
    pub calm_preferred: StepTable,
    /// Parameters for [`WindCurve::ModerateBreeze`].
    pub moderate_breeze: ModerateBreeze,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            max_score: 5,
            neutral_score: 3,
            curve: WindCurve::default(),
            calm_preferred: steps(&[(10.0, 5), (20.0, 4), (30.0, 3), (40.0, 2), (50.0, 1)], 0),
            moderate_breeze: ModerateBreeze::default(),
        }
    }
}

/// Cross-factor interaction terms.
///
/// Adjustments are signed points; their sum is clamped to `±bound`. The fog
/// override bypasses the sum and returns `-bound` outright, as does a murky
/// overcast: near-total cover, near-saturated air and mist together.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynergyConfig {
    /// Magnitude of the largest adjustment.
    pub bound: i8,
    /// Visibility (km) below which fog forces `-bound`.
    pub fog_visibility_km: f64,
    /// Visibility (km) below which mist forces `mist_adjustment`.
    pub mist_visibility_km: f64,
    /// Fixed adjustment under mist.
    pub mist_adjustment: i8,
    /// Highest final score allowed while the fog override is active.
    pub fog_score_ceiling: u8,
    /// Cover (%) above which the sky counts as overcast.
    pub overcast_cloud_pct: f64,
    /// Humidity (%) above which overcast air counts as saturated.
    pub overcast_humidity_pct: f64,
    /// Overcast and saturated: a grey, colourless dawn.
    pub grey_adjustment: i8,
    /// Highest final score allowed when a grey dawn is also misty.
    pub murk_score_ceiling: u8,
    /// Cover (%) below which the sky counts as clear.
    pub clear_sky_max_pct: f64,
    /// Humidity (%) below which air counts as dry.
    pub dry_humidity_max_pct: f64,
    /// Clear and dry: vivid but no canvas.
    pub boring_adjustment: i8,
    /// Humidity (%) at which air counts as humid.
    pub humid_min_pct: f64,
    /// Cover (%) below which cloud counts as sparse.
    pub sparse_cloud_max_pct: f64,
    /// Humid with sparse cloud: washed out.
    pub washed_out_adjustment: i8,
    /// Humid with favourable cloud: muted colour.
    pub muted_adjustment: i8,
    /// Humidity (%) below which favourable cloud is rewarded.
    pub comfortable_humidity_max_pct: f64,
    /// Comfortable humidity with favourable cloud.
    pub ideal_adjustment: i8,
    /// Extra reward when that cloud is a high canvas.
    pub canvas_adjustment: i8,
    /// Replaces the ideal reward when that cloud is low stratus.
    pub low_stratus_adjustment: i8,
    /// Visibility (km) that sharpens favourable conditions.
    pub clarity_visibility_km: f64,
    /// Reward for clear air under favourable cloud.
    pub clarity_adjustment: i8,
}

impl Default for SynergyConfig {
    fn default() -> Self {
        Self {
            bound: SYNERGY_LIMIT,
            fog_visibility_km: 3.0,
            mist_visibility_km: 5.0,
            mist_adjustment: -3,
            fog_score_ceiling: 30,
            overcast_cloud_pct: 90.0,
            overcast_humidity_pct: 90.0,
            grey_adjustment: -4,
            murk_score_ceiling: 24,
            clear_sky_max_pct: 10.0,
            dry_humidity_max_pct: 50.0,
            boring_adjustment: -2,
            humid_min_pct: 85.0,
            sparse_cloud_max_pct: 20.0,
            washed_out_adjustment: -3,
            muted_adjustment: -1,
            comfortable_humidity_max_pct: 70.0,
            ideal_adjustment: 3,
            canvas_adjustment: 1,
            low_stratus_adjustment: -2,
            clarity_visibility_km: 20.0,
            clarity_adjustment: 1,
        }
    }
}

/// Post-rain clearing detection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PostRainConfig {
    /// Bonus awarded when clearing after rain is detected.
    pub bonus: u8,
    /// Night rain (hours) that counts as recent rain.
    pub min_night_rain_hours: f64,
    /// Precipitation probability (%) at or above which no bonus is given.
    pub max_precip_probability_pct: f64,
    /// Visibility (km) required by the fallback signature.
    pub signature_min_visibility_km: f64,
    /// Cloud cover (%) range required by the fallback signature.
    pub signature_cloud_band: PercentBand,
    /// Humidity (%) range required by the fallback signature.
    pub signature_humidity_band: PercentBand,
}

impl Default for PostRainConfig {
    fn default() -> Self {
        Self {
            bonus: 5,
            min_night_rain_hours: 1.0,
            max_precip_probability_pct: 20.0,
            signature_min_visibility_km: 20.0,
            signature_cloud_band: PercentBand::new(20.0, 70.0),
            signature_humidity_band: PercentBand::new(70.0, 90.0),
        }
    }
}

/// Seasonal solar-angle bonus over the sun's declination.
///
/// Declination is measured towards the location's hemisphere: negative
/// values mean the sun is in the opposite hemisphere and rises low.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolarConfig {
    /// Magnitude of the largest adjustment.
    pub bound: i8,
    /// Declination (degrees) at or below which the deep low-sun bonus applies.
    pub deep_low_sun_deg: f64,
    /// Declination at or below which the low-sun bonus applies.
    pub low_sun_deg: f64,
    /// Declination at or above which the high-sun penalty applies.
    pub high_sun_deg: f64,
    /// Declination at or above which the deep high-sun penalty applies.
    pub deep_high_sun_deg: f64,
    /// Deep low-sun season.
    pub deep_low_bonus: i8,
    /// Low-sun season.
    pub low_bonus: i8,
    /// High-sun season.
    pub high_penalty: i8,
    /// Deep high-sun season.
    pub deep_high_penalty: i8,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            bound: SOLAR_LIMIT,
            deep_low_sun_deg: -15.0,
            low_sun_deg: -8.0,
            high_sun_deg: 8.0,
            deep_high_sun_deg: 15.0,
            deep_low_bonus: 2,
            low_bonus: 1,
            high_penalty: -1,
            deep_high_penalty: -2,
        }
    }
}
