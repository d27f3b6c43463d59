use serde::{Deserialize, Serialize};

use crate::core::{AxisTickConfig, DEFAULT_BBOX_PADDING_RATIO, ScaleMode, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::InteractionMode;

/// Public axes bootstrap configuration.
///
/// Serializable so host applications can persist and reload plot setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub xscale: ScaleMode,
    #[serde(default)]
    pub yscale: ScaleMode,
    #[serde(default)]
    pub x_ticks: AxisTickConfig,
    #[serde(default)]
    pub y_ticks: AxisTickConfig,
    /// Fraction of the data span added around lines and points on autoscale.
    #[serde(default = "default_bbox_padding_ratio")]
    pub bbox_padding_ratio: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub xlabel: String,
    #[serde(default)]
    pub ylabel: String,
    #[serde(default)]
    pub interaction_mode: InteractionMode,
}

impl AxesConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            xscale: ScaleMode::Linear,
            yscale: ScaleMode::Linear,
            x_ticks: AxisTickConfig::default(),
            y_ticks: AxisTickConfig::default(),
            bbox_padding_ratio: default_bbox_padding_ratio(),
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            interaction_mode: InteractionMode::Navigate,
        }
    }

    #[must_use]
    pub fn with_xscale(mut self, scale: ScaleMode) -> Self {
        self.xscale = scale;
        self
    }

    #[must_use]
    pub fn with_yscale(mut self, scale: ScaleMode) -> Self {
        self.yscale = scale;
        self
    }

    #[must_use]
    pub fn with_x_ticks(mut self, config: AxisTickConfig) -> Self {
        self.x_ticks = config;
        self
    }

    #[must_use]
    pub fn with_y_ticks(mut self, config: AxisTickConfig) -> Self {
        self.y_ticks = config;
        self
    }

    #[must_use]
    pub fn with_bbox_padding_ratio(mut self, ratio: f64) -> Self {
        self.bbox_padding_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_xlabel(mut self, label: impl Into<String>) -> Self {
        self.xlabel = label.into();
        self
    }

    #[must_use]
    pub fn with_ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = label.into();
        self
    }

    #[must_use]
    pub fn with_interaction_mode(mut self, mode: InteractionMode) -> Self {
        self.interaction_mode = mode;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self::new(Viewport::new(200, 200))
    }
}

fn default_bbox_padding_ratio() -> f64 {
    DEFAULT_BBOX_PADDING_RATIO
}
