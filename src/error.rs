use thiserror::Error;

use crate::core::{Axis, ScaleMode};

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("degenerate range: low={low}, high={high}")]
    DegenerateRange { low: f64, high: f64 },

    #[error("{axis} axis bound {value} is outside the log-scale domain (must be > 0)")]
    InvalidScaleDomain { axis: Axis, value: f64 },

    #[error("{scale} scale is not supported by artists: {}", .artists.join(", "))]
    UnsupportedScaleCapability {
        scale: ScaleMode,
        artists: Vec<String>,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
