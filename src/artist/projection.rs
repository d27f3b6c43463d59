#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{BBox, ScaleMode, padded_limits};
use crate::error::{PlotError, PlotResult};

/// Maps paired data-space samples into view-space vertices at depth `z`.
///
/// Samples outside an axis' domain become `NaN` vertices so index positions
/// stay aligned with the input.
pub(crate) fn project_vertices(
    x: &[f64],
    y: &[f64],
    xscale: ScaleMode,
    yscale: ScaleMode,
    z: f64,
) -> Vec<[f64; 3]> {
    let project = |(x, y): (&f64, &f64)| [view_or_nan(xscale, *x), view_or_nan(yscale, *y), z];

    #[cfg(feature = "parallel-projection")]
    {
        x.par_iter().zip(y.par_iter()).map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        x.iter().zip(y.iter()).map(project).collect()
    }
}

/// Padded extent of paired samples under the given scales.
///
/// An axis without any usable sample reports an inverted infinite range so
/// it drops out of aggregation.
pub(crate) fn padded_bbox(
    x: &[f64],
    y: &[f64],
    xscale: ScaleMode,
    yscale: ScaleMode,
    pad_ratio: f64,
) -> BBox {
    let empty = (f64::INFINITY, f64::NEG_INFINITY);
    let (left, right) = padded_limits(x, xscale, pad_ratio).unwrap_or(empty);
    let (bottom, top) = padded_limits(y, yscale, pad_ratio).unwrap_or(empty);
    BBox::new(left, right, bottom, top)
}

pub(crate) fn validate_samples(x: &[f64], y: &[f64]) -> PlotResult<()> {
    if x.len() != y.len() {
        return Err(PlotError::InvalidData(format!(
            "x and y must have the same length (got {} and {})",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(PlotError::InvalidData(
            "artist data must not be empty".to_owned(),
        ));
    }
    Ok(())
}

fn view_or_nan(mode: ScaleMode, value: f64) -> f64 {
    mode.to_view_space(value).unwrap_or(f64::NAN)
}
