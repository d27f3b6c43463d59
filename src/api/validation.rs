use crate::core::{AxisTickConfig, FormatterKind, LocatorKind, Viewport};
use crate::error::{PlotError, PlotResult};

use super::AxesConfig;

const MAX_LOCATOR_BINS: usize = 100;
const MAX_FORMATTER_PRECISION: u8 = 12;

pub(super) fn validate_viewport(viewport: Viewport) -> PlotResult<Viewport> {
    if !viewport.is_valid() {
        return Err(PlotError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_bbox_padding_ratio(ratio: f64) -> PlotResult<f64> {
    if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
        return Err(PlotError::InvalidData(format!(
            "bbox padding ratio must be finite and in [0, 1], got {ratio}"
        )));
    }
    Ok(ratio)
}

pub(super) fn validate_tick_config(config: &AxisTickConfig) -> PlotResult<()> {
    match &config.locator {
        LocatorKind::Auto => {}
        LocatorKind::MaxN { bins } => {
            if !(1..=MAX_LOCATOR_BINS).contains(bins) {
                return Err(PlotError::InvalidData(format!(
                    "tick locator bins must be in 1..={MAX_LOCATOR_BINS}"
                )));
            }
        }
        LocatorKind::Fixed { values } => {
            if !values.iter().any(|value| value.is_finite()) {
                return Err(PlotError::InvalidData(
                    "fixed tick locator needs at least one finite value".to_owned(),
                ));
            }
        }
    }

    match config.formatter {
        FormatterKind::Auto => {}
        FormatterKind::FixedDecimals { precision } => {
            if precision > MAX_FORMATTER_PRECISION {
                return Err(PlotError::InvalidData(format!(
                    "tick label precision must be <= {MAX_FORMATTER_PRECISION}"
                )));
            }
        }
    }
    Ok(())
}

pub(super) fn validate_axes_config(config: &AxesConfig) -> PlotResult<()> {
    validate_viewport(config.viewport)?;
    validate_bbox_padding_ratio(config.bbox_padding_ratio)?;
    validate_tick_config(&config.x_ticks)?;
    validate_tick_config(&config.y_ticks)?;
    Ok(())
}
