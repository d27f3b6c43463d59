pub mod bbox;
pub mod locator;
pub mod scale;
pub mod ticks;
pub mod transform;
pub mod types;

pub use bbox::{DEFAULT_BBOX_PADDING_RATIO, aggregate_bboxes, padded_limits};
pub use locator::{
    AutoLocator, FixedLocator, Locator, LogLocator, MaxNLocator, TickValues,
    axis_tick_target_count,
};
pub use scale::{RangeRepair, ScaleMode, repair_view_range, widen_empty_range};
pub use ticks::{
    AxisTickConfig, FixedDecimalsFormatter, FormatterKind, LocatorKind, LogFormatter,
    ScalarFormatter, Tick, TickFormatter, TickRequest, generate_ticks, target_spacing_px,
};
pub use transform::{Transform, Window};
pub use types::{Axis, BBox, Viewport};
