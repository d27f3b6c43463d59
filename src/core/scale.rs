use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Window;
use crate::error::PlotError;

/// Mapping mode of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// View space equals data space.
    #[default]
    Linear,
    /// View space is `log10` of data space (all data-space bounds must be > 0).
    Log,
}

impl ScaleMode {
    /// Converts a data-space value to the space the camera and transforms work in.
    ///
    /// Returns `None` for values outside the scale domain (non-positive values
    /// under `Log`).
    #[must_use]
    pub fn to_view_space(self, value: f64) -> Option<f64> {
        match self {
            Self::Linear => Some(value),
            Self::Log if value > 0.0 => Some(value.log10()),
            Self::Log => None,
        }
    }

    /// Converts a view-space value back to data space.
    #[must_use]
    pub fn to_data_space(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log => 10.0_f64.powf(value),
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        match self {
            Self::Linear => value.is_finite(),
            Self::Log => value.is_finite() && value > 0.0,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleMode {
    type Err = PlotError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "linear" => Ok(Self::Linear),
            "log" => Ok(Self::Log),
            other => Err(PlotError::InvalidData(format!(
                "unknown scale mode `{other}` (expected `linear` or `log`)"
            ))),
        }
    }
}

/// How a requested range had to be altered before it could drive a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeRepair {
    None,
    /// Bounds were given high-to-low.
    Swapped,
    /// Bounds were equal and got widened around their common value.
    Widened,
    /// Bounds were unusable and the default window was substituted.
    Defaulted,
}

/// Widens an empty `[value, value]` range by half its magnitude on each side.
#[must_use]
pub fn widen_empty_range(value: f64) -> (f64, f64) {
    let delta = if value == 0.0 { 0.5 } else { 0.5 * value.abs() };
    (value - delta, value + delta)
}

/// Turns any pair of view-space bounds into a usable window.
///
/// Non-finite input falls back to `[0, 1]`, which is `[0, 1]` in data space for
/// linear axes and `[1, 10]` for log axes.
#[must_use]
pub fn repair_view_range(low: f64, high: f64) -> (Window, RangeRepair) {
    if !low.is_finite() || !high.is_finite() {
        return (Window::default(), RangeRepair::Defaulted);
    }

    let (low, high, repair) = if low < high {
        (low, high, RangeRepair::None)
    } else if low > high {
        (high, low, RangeRepair::Swapped)
    } else {
        let (low, high) = widen_empty_range(low);
        (low, high, RangeRepair::Widened)
    };

    match Window::new(low, high) {
        Ok(window) => (window, repair),
        Err(_) => (Window::default(), RangeRepair::Defaulted),
    }
}
