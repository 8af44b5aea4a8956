//! Consistency checks applied before a configuration reaches the engine.

use super::{
    AodConfig, CloudCoverConfig, CloudLayerConfig, ConfigError, HumidityConfig, PercentBand,
    PostRainConfig, PressureConfig, SOLAR_LIMIT, SYNERGY_LIMIT, ScoringConfig, SolarConfig,
    StepTable, SynergyConfig, VisibilityConfig, WeatherConfig, WindConfig,
};

#[derive(Clone, Copy)]
enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    fn ordered(self, earlier: f64, later: f64) -> bool {
        match self {
            Self::Ascending => earlier < later,
            Self::Descending => earlier > later,
        }
    }
}

impl ScoringConfig {
    /// Check the configuration for internal consistency.
    ///
    /// The eight factor maxima must sum to `base_budget`; every neutral
    /// fallback and step score must fit under its factor's maximum; step
    /// tables must be strictly ordered with scores that never improve as
    /// conditions worsen; bands must be well formed; and the synergy and
    /// the synergy bound must equal ±4 and the solar bound may not exceed ±2.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered.
    ///
    /// # Examples
    /// ```
    /// use sunrise_core::{ConfigError, ScoringConfig};
    ///
    /// let mut config = ScoringConfig::default();
    /// config.humidity.max_score = 20;
    /// assert!(matches!(
    ///     config.validate(),
    ///     Err(ConfigError::BudgetMismatch { expected: 95, actual: 100 })
    /// ));
    /// ```
    pub fn validate(self) -> Result<Self, ConfigError> {
        let actual = self.factor_budget();
        let expected = u32::from(self.base_budget);
        if actual != expected {
            return Err(ConfigError::BudgetMismatch { expected, actual });
        }
        self.cloud_cover.check()?;
        self.cloud_layers.check()?;
        self.humidity.check()?;
        self.pressure.check()?;
        self.aod.check()?;
        self.visibility.check()?;
        self.weather.check()?;
        self.wind.check()?;
        self.synergy.check()?;
        self.post_rain.check()?;
        self.solar.check()?;
        Ok(self)
    }
}

impl CloudCoverConfig {
    fn check(&self) -> Result<(), ConfigError> {
        const FACTOR: &str = "cloud_cover";
        neutral(FACTOR, self.neutral_score, self.max_score)?;
        finite("cloud_cover.clear_sky_score", self.clear_sky_score)?;
        finite("cloud_cover.band_entry_score", self.band_entry_score)?;
        finite("cloud_cover.gentle_decay_end_pct", self.gentle_decay_end_pct)?;
        finite("cloud_cover.gentle_decay_per_pct", self.gentle_decay_per_pct)?;
        finite("cloud_cover.steep_decay_per_pct", self.steep_decay_per_pct)?;
        band("cloud_cover.optimal_band", self.optimal_band)?;
        band("cloud_cover.plateau", self.plateau)?;
        let curve = |reason| ConfigError::InvalidCurve {
            factor: FACTOR,
            reason,
        };
        if self.optimal_band.low <= 0.0 {
            return Err(curve("optimal band must start above 0%"));
        }
        if self.plateau.low <= self.optimal_band.low {
            return Err(curve("plateau must start inside the optimal band"));
        }
        if self.gentle_decay_end_pct <= self.plateau.high || self.gentle_decay_end_pct > 100.0 {
            return Err(curve("gentle decay must end between the plateau and 100%"));
        }
        let max = f64::from(self.max_score);
        if !(0.0..=self.band_entry_score).contains(&self.clear_sky_score)
            || self.band_entry_score > max
        {
            return Err(curve("scores must rise from clear sky to the maximum"));
        }
        if self.gentle_decay_per_pct < 0.0 || self.steep_decay_per_pct < 0.0 {
            return Err(curve("decay rates must be non-negative"));
        }
        Ok(())
    }
}

impl CloudLayerConfig {
    fn check(&self) -> Result<(), ConfigError> {
        const FACTOR: &str = "multi_level_cloud";
        neutral(FACTOR, self.neutral_score, self.max_score)?;
        for (field, score) in [
            ("canvas_score", self.canvas_score),
            ("mixed_score", self.mixed_score),
            ("blocked_score", self.blocked_score),
            ("mid_canvas_score", self.mid_canvas_score),
            ("thin_score", self.thin_score),
            ("low_stratus_score", self.low_stratus_score),
        ] {
            within_max(FACTOR, field, score, self.max_score)?;
        }
        for (field, value) in [
            ("cloud_layers.high_canvas_min_pct", self.high_canvas_min_pct),
            ("cloud_layers.low_clear_max_pct", self.low_clear_max_pct),
            ("cloud_layers.low_blocked_min_pct", self.low_blocked_min_pct),
            ("cloud_layers.mid_canvas_min_pct", self.mid_canvas_min_pct),
            ("cloud_layers.mid_interference_pct", self.mid_interference_pct),
            ("cloud_layers.mid_heavy_pct", self.mid_heavy_pct),
            ("cloud_layers.low_stratus_share", self.low_stratus_share),
            ("cloud_layers.low_stratus_min_pct", self.low_stratus_min_pct),
            ("cloud_layers.ceiling_min_cover_pct", self.ceiling_min_cover_pct),
            ("cloud_layers.stratus_ceiling_max_m", self.stratus_ceiling_max_m),
            ("cloud_layers.canvas_ceiling_min_m", self.canvas_ceiling_min_m),
        ] {
            finite(field, value)?;
        }
        let curve = |reason| ConfigError::InvalidCurve {
            factor: FACTOR,
            reason,
        };
        if self.low_clear_max_pct > self.low_blocked_min_pct {
            return Err(curve("clear horizon limit must not exceed the blocked limit"));
        }
        if self.mid_interference_pct > self.mid_heavy_pct {
            return Err(curve("mid interference must not exceed heavy interference"));
        }
        if self.mid_interference_penalty > self.mid_heavy_penalty {
            return Err(curve("mid interference penalty must not exceed the heavy penalty"));
        }
        if self.low_stratus_share <= 0.0 || self.low_stratus_share > 1.0 {
            return Err(curve("low stratus share must lie in (0, 1]"));
        }
        if self.stratus_ceiling_max_m >= self.canvas_ceiling_min_m {
            return Err(curve("stratus ceiling must lie below canvas ceiling"));
        }
        ordered_steps(
            FACTOR,
            "cloud_layers.ceiling_steps",
            &self.ceiling_steps,
            Direction::Descending,
            self.max_score,
        )
    }
}

impl HumidityConfig {
    fn check(&self) -> Result<(), ConfigError> {
        neutral("humidity", self.neutral_score, self.max_score)?;
        ordered_steps(
            "humidity",
            "humidity.steps",
            &self.steps,
            Direction::Ascending,
            self.max_score,
        )
    }
}

impl PressureConfig {
    fn check(&self) -> Result<(), ConfigError> {
        const FACTOR: &str = "pressure_trend";
        neutral(FACTOR, self.neutral_score, self.max_score)?;
        for (field, score) in [
            ("storm_score", self.storm_score),
            ("clearing_score", self.clearing_score),
            ("small_fall_score", self.small_fall_score),
            ("stable_score", self.stable_score),
            ("rising_score", self.rising_score),
        ] {
            within_max(FACTOR, field, score, self.max_score)?;
        }
        finite("pressure.storm_fall_hpa", self.storm_fall_hpa)?;
        finite("pressure.clearing_fall_hpa", self.clearing_fall_hpa)?;
        finite("pressure.small_fall_hpa", self.small_fall_hpa)?;
        finite("pressure.rise_hpa", self.rise_hpa)?;
        let ordered = 0.0 < self.small_fall_hpa
            && self.small_fall_hpa <= self.clearing_fall_hpa
            && self.clearing_fall_hpa < self.storm_fall_hpa
            && self.rise_hpa > 0.0;
        if !ordered {
            return Err(ConfigError::InvalidCurve {
                factor: FACTOR,
                reason: "falls must satisfy 0 < small <= clearing < storm and rise must be positive",
            });
        }
        Ok(())
    }
}

impl AodConfig {
    fn check(&self) -> Result<(), ConfigError> {
        const FACTOR: &str = "aod";
        neutral(FACTOR, self.neutral_score, self.max_score)?;
        within_max(FACTOR, "pristine_score", self.pristine_score, self.max_score)?;
        finite("aod.pristine_below", self.pristine_below)?;
        finite("aod.goldilocks_max", self.goldilocks_max)?;
        if self.pristine_below < 0.0 || self.pristine_below >= self.goldilocks_max {
            return Err(ConfigError::InvalidCurve {
                factor: FACTOR,
                reason: "pristine limit must lie below the Goldilocks ceiling",
            });
        }
        ordered_steps(
            FACTOR,
            "aod.haze_steps",
            &self.haze_steps,
            Direction::Ascending,
            self.max_score,
        )?;
        let haze_starts_after_band = self
            .haze_steps
            .steps
            .first()
            .is_none_or(|step| step.threshold > self.goldilocks_max);
        if !haze_starts_after_band {
            return Err(ConfigError::InvalidCurve {
                factor: FACTOR,
                reason: "haze steps must start above the Goldilocks ceiling",
            });
        }
        Ok(())
    }
}

impl VisibilityConfig {
    fn check(&self) -> Result<(), ConfigError> {
        neutral("visibility", self.neutral_score, self.max_score)?;
        ordered_steps(
            "visibility",
            "visibility.steps",
            &self.steps,
            Direction::Descending,
            self.max_score,
        )
    }
}

impl WeatherConfig {
    fn check(&self) -> Result<(), ConfigError> {
        const FACTOR: &str = "weather";
        for (field, score) in [
            ("active_precip_penalty", self.active_precip_penalty),
            ("storm_penalty", self.storm_penalty),
            ("fog_penalty", self.fog_penalty),
            ("haze_penalty", self.haze_penalty),
            ("clear_credit", self.clear_credit),
        ] {
            within_max(FACTOR, field, score, self.max_score)?;
        }
        ordered_steps(
            FACTOR,
            "weather.precip_penalties",
            &self.precip_penalties,
            Direction::Descending,
            self.max_score,
        )
    }
}

impl WindConfig {
    fn check(&self) -> Result<(), ConfigError> {
        const FACTOR: &str = "wind";
        neutral(FACTOR, self.neutral_score, self.max_score)?;
        ordered_steps(
            FACTOR,
            "wind.calm_preferred",
            &self.calm_preferred,
            Direction::Ascending,
            self.max_score,
        )?;
        let breeze = &self.moderate_breeze;
        within_max(FACTOR, "dead_calm_score", breeze.dead_calm_score, self.max_score)?;
        finite("wind.moderate_breeze.dead_calm_below_kmh", breeze.dead_calm_below_kmh)?;
        ordered_steps(
            FACTOR,
            "wind.moderate_breeze.steps",
            &breeze.steps,
            Direction::Ascending,
            self.max_score,
        )
    }
}

impl SynergyConfig {
    fn check(&self) -> Result<(), ConfigError> {
        if self.bound != SYNERGY_LIMIT {
            return Err(ConfigError::BoundExceeded {
                field: "synergy.bound",
                value: self.bound,
                limit: SYNERGY_LIMIT,
            });
        }
        for (field, value) in [
            ("synergy.mist_adjustment", self.mist_adjustment),
            ("synergy.boring_adjustment", self.boring_adjustment),
            ("synergy.washed_out_adjustment", self.washed_out_adjustment),
            ("synergy.muted_adjustment", self.muted_adjustment),
            ("synergy.low_stratus_adjustment", self.low_stratus_adjustment),
            ("synergy.clarity_adjustment", self.clarity_adjustment),
            ("synergy.grey_adjustment", self.grey_adjustment),
            (
                "synergy.ideal_adjustment",
                self.ideal_adjustment.saturating_add(self.canvas_adjustment),
            ),
        ] {
            bounded(field, value, self.bound)?;
        }
        for (field, value) in [
            ("synergy.fog_visibility_km", self.fog_visibility_km),
            ("synergy.mist_visibility_km", self.mist_visibility_km),
            ("synergy.clear_sky_max_pct", self.clear_sky_max_pct),
            ("synergy.dry_humidity_max_pct", self.dry_humidity_max_pct),
            ("synergy.humid_min_pct", self.humid_min_pct),
            ("synergy.sparse_cloud_max_pct", self.sparse_cloud_max_pct),
            (
                "synergy.comfortable_humidity_max_pct",
                self.comfortable_humidity_max_pct,
            ),
            ("synergy.clarity_visibility_km", self.clarity_visibility_km),
            ("synergy.overcast_cloud_pct", self.overcast_cloud_pct),
            ("synergy.overcast_humidity_pct", self.overcast_humidity_pct),
        ] {
            finite(field, value)?;
        }
        if self.fog_visibility_km > self.mist_visibility_km {
            return Err(ConfigError::InvalidCurve {
                factor: "synergy",
                reason: "fog visibility must not exceed mist visibility",
            });
        }
        if self.fog_score_ceiling > 100 {
            return Err(ConfigError::InvalidCurve {
                factor: "synergy",
                reason: "fog score ceiling must not exceed 100",
            });
        }
        if self.murk_score_ceiling > 100 {
            return Err(ConfigError::InvalidCurve {
                factor: "synergy",
                reason: "murk score ceiling must not exceed 100",
            });
        }
        Ok(())
    }
}

impl PostRainConfig {
    fn check(&self) -> Result<(), ConfigError> {
        finite("post_rain.min_night_rain_hours", self.min_night_rain_hours)?;
        finite(
            "post_rain.max_precip_probability_pct",
            self.max_precip_probability_pct,
        )?;
        finite(
            "post_rain.signature_min_visibility_km",
            self.signature_min_visibility_km,
        )?;
        band("post_rain.signature_cloud_band", self.signature_cloud_band)?;
        band(
            "post_rain.signature_humidity_band",
            self.signature_humidity_band,
        )
    }
}

impl SolarConfig {
    fn check(&self) -> Result<(), ConfigError> {
        if !(0..=SOLAR_LIMIT).contains(&self.bound) {
            return Err(ConfigError::BoundExceeded {
                field: "solar.bound",
                value: self.bound,
                limit: SOLAR_LIMIT,
            });
        }
        for (field, value) in [
            ("solar.deep_low_bonus", self.deep_low_bonus),
            ("solar.low_bonus", self.low_bonus),
            ("solar.high_penalty", self.high_penalty),
            ("solar.deep_high_penalty", self.deep_high_penalty),
        ] {
            bounded(field, value, self.bound)?;
        }
        for (field, value) in [
            ("solar.deep_low_sun_deg", self.deep_low_sun_deg),
            ("solar.low_sun_deg", self.low_sun_deg),
            ("solar.high_sun_deg", self.high_sun_deg),
            ("solar.deep_high_sun_deg", self.deep_high_sun_deg),
        ] {
            finite(field, value)?;
        }
        let ordered = self.deep_low_sun_deg <= self.low_sun_deg
            && self.low_sun_deg < self.high_sun_deg
            && self.high_sun_deg <= self.deep_high_sun_deg;
        if !ordered {
            return Err(ConfigError::InvalidCurve {
                factor: "solar",
                reason: "declination thresholds must ascend from deep low to deep high",
            });
        }
        Ok(())
    }
}

fn neutral(factor: &'static str, neutral: u8, max: u8) -> Result<(), ConfigError> {
    if neutral > max {
        return Err(ConfigError::NeutralAboveMax {
            factor,
            neutral,
            max,
        });
    }
    Ok(())
}

fn within_max(
    factor: &'static str,
    field: &'static str,
    score: u8,
    max: u8,
) -> Result<(), ConfigError> {
    if score > max {
        return Err(ConfigError::ScoreAboveMax {
            factor,
            field,
            score,
            max,
        });
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn bounded(field: &'static str, value: i8, limit: i8) -> Result<(), ConfigError> {
    if value.unsigned_abs() > limit.unsigned_abs() {
        return Err(ConfigError::BoundExceeded {
            field,
            value,
            limit,
        });
    }
    Ok(())
}

fn band(field: &'static str, range: PercentBand) -> Result<(), ConfigError> {
    let valid = range.low.is_finite()
        && range.high.is_finite()
        && 0.0 <= range.low
        && range.low <= range.high
        && range.high <= 100.0;
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidBand { field })
    }
}

fn ordered_steps(
    factor: &'static str,
    table_name: &'static str,
    table: &StepTable,
    direction: Direction,
    max: u8,
) -> Result<(), ConfigError> {
    if table.steps.is_empty() {
        return Err(ConfigError::EmptySteps { table: table_name });
    }
    for step in &table.steps {
        finite(table_name, step.threshold)?;
    }
    within_max(factor, table_name, table.max_score(), max)?;
    let pairs = table.steps.iter().zip(table.steps.iter().skip(1));
    for (earlier, later) in pairs.clone() {
        if !direction.ordered(earlier.threshold, later.threshold) {
            return Err(ConfigError::UnorderedSteps {
                table: table_name,
                direction: direction.label(),
            });
        }
    }
    let scores_fall = pairs
        .map(|(earlier, later)| (earlier.score, later.score))
        .chain(table.steps.last().map(|last| (last.score, table.otherwise)))
        .all(|(earlier, later)| later <= earlier);
    if !scores_fall {
        return Err(ConfigError::NonMonotonicSteps { table: table_name });
    }
    Ok(())
}
