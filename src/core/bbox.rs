use crate::core::{BBox, ScaleMode, widen_empty_range};

/// Default fraction of the data span added around line and point artists.
pub const DEFAULT_BBOX_PADDING_RATIO: f64 = 0.03;

/// Combines artist extents into one autoscale extent.
///
/// No padding is added here; each artist pads its own extent. With no input
/// the result is [`BBox::empty`], which callers must repair before use.
#[must_use]
pub fn aggregate_bboxes<I>(bboxes: I) -> BBox
where
    I: IntoIterator<Item = BBox>,
{
    bboxes.into_iter().fold(BBox::empty(), |acc, bbox| BBox {
        left: acc.left.min(bbox.left),
        right: acc.right.max(bbox.right),
        bottom: acc.bottom.min(bbox.bottom),
        top: acc.top.max(bbox.top),
    })
}

/// Padded data-space limits of `values` as seen through `mode`.
///
/// Values outside the scale domain are ignored. Padding is applied in view
/// space, so log axes are padded by a ratio rather than an offset. Returns
/// `None` when no value is usable.
#[must_use]
pub fn padded_limits(values: &[f64], mode: ScaleMode, pad_ratio: f64) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for view in values
        .iter()
        .filter(|value| mode.contains(**value))
        .filter_map(|value| mode.to_view_space(*value))
    {
        min = min.min(view);
        max = max.max(view);
    }

    if !min.is_finite() || !max.is_finite() {
        return None;
    }

    let (low, high) = if min == max {
        widen_empty_range(min)
    } else {
        let pad = pad_ratio * (max - min);
        (min - pad, max + pad)
    };
    Some((mode.to_data_space(low), mode.to_data_space(high)))
}
