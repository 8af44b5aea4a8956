//! Cloud distribution across altitude bands.
//!
//! Total cover says nothing about where the cloud sits. A high canvas above
//! a clear horizon catches the light; the same percentage of low stratus
//! simply blocks it. Composition, not coverage, gates the top scores.

use sunrise_core::{CloudLayerConfig, CloudLayers, ExtendedSignals, FactorResult, RawSample};

/// Qualitative shape of a layered sky, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayerComposition {
    /// High cloud over a clear horizon.
    HighCanvas,
    /// High cloud with gaps in a partial low deck.
    HighMixed,
    /// High cloud above a near-total low deck.
    HighBlocked,
    /// No high cloud; a mid-level deck provides some structure.
    MidCanvas,
    /// Little cloud at any level.
    Thin,
    /// Low cloud dominates and no canvas exists aloft.
    LowStratus,
}

impl LayerComposition {
    /// Classify per-altitude fractions.
    ///
    /// # Examples
    /// ```
    /// use sunrise_core::{CloudLayerConfig, CloudLayers};
    /// use sunrise_scorer::LayerComposition;
    ///
    /// let config = CloudLayerConfig::default();
    /// let stratus = CloudLayers::new(0.0, 0.0, 45.0);
    /// assert_eq!(LayerComposition::classify(stratus, &config), LayerComposition::LowStratus);
    /// ```
    #[expect(clippy::float_arithmetic, reason = "dominance compares a share of the total")]
    #[must_use]
    pub fn classify(layers: CloudLayers, config: &CloudLayerConfig) -> Self {
        if layers.high_pct >= config.high_canvas_min_pct {
            return if layers.low_pct < config.low_clear_max_pct {
                Self::HighCanvas
            } else if layers.low_pct < config.low_blocked_min_pct {
                Self::HighMixed
            } else {
                Self::HighBlocked
            };
        }
        let low_dominant = layers.low_pct >= config.low_stratus_min_pct
            && layers.low_pct >= config.low_stratus_share * layers.total_pct();
        if layers.low_pct >= config.low_clear_max_pct || low_dominant {
            Self::LowStratus
        } else if layers.mid_pct >= config.mid_canvas_min_pct {
            Self::MidCanvas
        } else {
            Self::Thin
        }
    }

    /// Infer a coarse composition from the cloud base alone.
    ///
    /// Only the extremes are informative: a very low base means stratus, a
    /// very high one means a canvas. Returns `None` in between.
    #[must_use]
    pub fn from_ceiling(ceiling_m: f64, config: &CloudLayerConfig) -> Option<Self> {
        if ceiling_m < config.stratus_ceiling_max_m {
            Some(Self::LowStratus)
        } else if ceiling_m >= config.canvas_ceiling_min_m {
            Some(Self::HighCanvas)
        } else {
            None
        }
    }

    /// Sub-score for this composition, including mid-level interference.
    #[must_use]
    pub fn points(self, layers: CloudLayers, config: &CloudLayerConfig) -> u8 {
        let heavy_mid = layers.mid_pct >= config.mid_heavy_pct;
        let score = match self {
            Self::HighCanvas => {
                let interference = if heavy_mid {
                    config.mid_heavy_penalty
                } else if layers.mid_pct >= config.mid_interference_pct {
                    config.mid_interference_penalty
                } else {
                    0
                };
                config.canvas_score.saturating_sub(interference)
            }
            Self::HighMixed if heavy_mid => config
                .mixed_score
                .saturating_sub(config.mid_interference_penalty),
            Self::HighMixed => config.mixed_score,
            Self::HighBlocked => config.blocked_score,
            Self::MidCanvas => config.mid_canvas_score,
            Self::Thin => config.thin_score,
            Self::LowStratus => config.low_stratus_score,
        };
        score.min(config.max_score)
    }
}

/// Sub-score for a cloud base height when layers are unavailable.
#[must_use]
pub fn ceiling_points(ceiling_m: f64, config: &CloudLayerConfig) -> u8 {
    config.ceiling_steps.at_or_above(ceiling_m).min(config.max_score)
}

fn usable_ceiling(
    sample: &RawSample,
    signals: &ExtendedSignals,
    config: &CloudLayerConfig,
) -> Option<f64> {
    let cover = sample.usable_cloud_cover()?;
    if cover < config.ceiling_min_cover_pct {
        return None;
    }
    signals.usable_ceiling()
}

/// Best available composition: from layers, else from the ceiling.
#[must_use]
pub fn composition_hint(
    sample: &RawSample,
    signals: &ExtendedSignals,
    config: &CloudLayerConfig,
) -> Option<LayerComposition> {
    signals.usable_layers().map_or_else(
        || {
            usable_ceiling(sample, signals, config)
                .and_then(|ceiling| LayerComposition::from_ceiling(ceiling, config))
        },
        |layers| Some(LayerComposition::classify(layers, config)),
    )
}

/// Score the layer distribution.
///
/// Falls back to the cloud ceiling (reported as
/// [`SignalSource::Estimated`](sunrise_core::SignalSource::Estimated)) when
/// only total cover is non-trivial, and to the neutral score otherwise.
#[must_use]
pub fn score_cloud_layers(
    sample: &RawSample,
    signals: &ExtendedSignals,
    config: &CloudLayerConfig,
) -> FactorResult {
    if let Some(layers) = signals.usable_layers() {
        let composition = LayerComposition::classify(layers, config);
        return FactorResult::measured(
            layers.high_pct,
            composition.points(layers, config),
            config.max_score,
        );
    }
    if let Some(ceiling) = usable_ceiling(sample, signals, config) {
        return FactorResult::estimated(ceiling, ceiling_points(ceiling, config), config.max_score);
    }
    log::debug!(
        "cloud layers and ceiling unavailable; using neutral score {}",
        config.neutral_score
    );
    FactorResult::unavailable(config.neutral_score, config.max_score)
}
