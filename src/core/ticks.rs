use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{
    AutoLocator, Axis, FixedLocator, Locator, LogLocator, MaxNLocator, ScaleMode, Transform,
};

/// Ticks within this distance outside `[0, 1]` still count as visible.
const VISIBLE_EDGE_TOLERANCE: f64 = 1e-9;
const MAX_LABEL_PRECISION: usize = 12;
/// Non-zero labels below this magnitude are written in scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;

pub const AXIS_X_TARGET_SPACING_PX: f64 = 72.0;
pub const AXIS_Y_TARGET_SPACING_PX: f64 = 48.0;

/// One visible tick: data value, normalized position, pixel offset and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
    pub pixel: f64,
    pub label: String,
}

/// Everything the generator needs to know about one axis.
#[derive(Debug, Clone, Copy)]
pub struct TickRequest<'a> {
    pub axis: Axis,
    /// Visible data-space range.
    pub range: (f64, f64),
    pub scale: ScaleMode,
    pub transform: &'a Transform,
    /// Axis length in pixels.
    pub span_px: f64,
}

impl TickRequest<'_> {
    /// Normalized axis position of a data value, `None` outside the scale domain.
    #[must_use]
    pub fn to_visible(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let view = self.scale.to_view_space(value)?;
        let position = self.transform.evaluate(view);
        position.is_finite().then_some(position)
    }

    fn pixel(&self, position: f64) -> f64 {
        match self.axis {
            Axis::X => position * self.span_px,
            // Screen rows grow downward.
            Axis::Y => self.span_px - position * self.span_px,
        }
    }
}

/// Renders the data values of all visible ticks at once, so precision can be
/// chosen from the neighbours.
pub trait TickFormatter {
    fn format_ticks(&self, values: &[f64]) -> Vec<String>;
}

/// Plain decimal labels with just enough digits to keep neighbours distinct.
///
/// Tiny magnitudes, and ranges fixed decimals cannot tell apart, switch to
/// scientific notation such as `2e-17`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarFormatter;

impl TickFormatter for ScalarFormatter {
    fn format_ticks(&self, values: &[f64]) -> Vec<String> {
        let largest = values
            .iter()
            .map(|value| value.abs())
            .filter(|value| value.is_finite())
            .fold(0.0, f64::max);
        if largest == 0.0 || largest >= SCIENTIFIC_BELOW {
            let start = precision_from_step(min_step(values));
            let fixed = (start..=MAX_LABEL_PRECISION)
                .map(|precision| format_decimals(values, precision))
                .find(|labels| all_distinct(labels));
            if let Some(labels) = fixed {
                return labels;
            }
        }
        (0..=MAX_LABEL_PRECISION)
            .map(|precision| format_scientific(values, precision))
            .find(|labels| all_distinct(labels))
            .unwrap_or_else(|| format_scientific(values, MAX_LABEL_PRECISION))
    }
}

/// Decade labels as `10ⁿ`; other values with significant digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFormatter;

impl TickFormatter for LogFormatter {
    fn format_ticks(&self, values: &[f64]) -> Vec<String> {
        values.iter().map(|value| format_log_label(*value)).collect()
    }
}

/// Always the same number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecimalsFormatter {
    pub precision: u8,
}

impl TickFormatter for FixedDecimalsFormatter {
    fn format_ticks(&self, values: &[f64]) -> Vec<String> {
        format_decimals(values, usize::from(self.precision))
    }
}

/// Produces the visible ticks of one axis, ascending in position.
///
/// Candidates that are non-finite, outside the log domain, or whose visible
/// position falls outside `[0, 1]` are dropped.
#[must_use]
pub fn generate_ticks(
    request: &TickRequest<'_>,
    locator: &dyn Locator,
    formatter: &dyn TickFormatter,
) -> Vec<Tick> {
    let (low, high) = request.range;
    if !low.is_finite() || !high.is_finite() || high <= low {
        return Vec::new();
    }

    let mut visible: Vec<(f64, f64)> = locator
        .locate(low, high)
        .into_iter()
        .filter_map(|value| {
            let position = request.to_visible(value)?;
            let inside = (-VISIBLE_EDGE_TOLERANCE..=1.0 + VISIBLE_EDGE_TOLERANCE)
                .contains(&position);
            inside.then_some((value, position.clamp(0.0, 1.0)))
        })
        .collect();
    visible.sort_by_key(|(_, position)| OrderedFloat(*position));
    visible.dedup_by(|next, prev| next.0 == prev.0);

    let values: Vec<f64> = visible.iter().map(|(value, _)| *value).collect();
    let labels = formatter.format_ticks(&values);

    visible
        .into_iter()
        .zip(labels)
        .map(|((value, position), label)| Tick {
            value,
            position,
            pixel: request.pixel(position),
            label,
        })
        .collect()
}

/// Serializable choice of locator for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum LocatorKind {
    /// Pixel-sized nice-number locator on linear axes, decades on log axes.
    #[default]
    Auto,
    /// At most `bins + 1` ticks.
    MaxN { bins: usize },
    /// Exactly these values, where visible.
    Fixed { values: Vec<f64> },
}

/// Serializable choice of label formatter for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FormatterKind {
    /// Disambiguating decimals on linear axes, decade notation on log axes.
    #[default]
    Auto,
    FixedDecimals { precision: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisTickConfig {
    #[serde(default)]
    pub locator: LocatorKind,
    #[serde(default)]
    pub formatter: FormatterKind,
}

impl AxisTickConfig {
    #[must_use]
    pub fn with_locator(mut self, locator: LocatorKind) -> Self {
        self.locator = locator;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = formatter;
        self
    }

    /// Builds the locator for the axis' current scale and pixel length.
    #[must_use]
    pub fn resolve_locator(&self, axis: Axis, scale: ScaleMode, span_px: f64) -> Box<dyn Locator> {
        match (&self.locator, scale) {
            (LocatorKind::Auto, ScaleMode::Linear) => {
                Box::new(AutoLocator::for_axis_span(span_px, target_spacing_px(axis)))
            }
            (LocatorKind::Auto, ScaleMode::Log) => Box::new(LogLocator::default()),
            (LocatorKind::MaxN { bins }, ScaleMode::Linear) => Box::new(MaxNLocator::new(*bins)),
            (LocatorKind::MaxN { bins }, ScaleMode::Log) => Box::new(LogLocator::new(*bins)),
            (LocatorKind::Fixed { values }, _) => Box::new(FixedLocator::new(values)),
        }
    }

    #[must_use]
    pub fn resolve_formatter(&self, scale: ScaleMode) -> Box<dyn TickFormatter> {
        match (self.formatter, scale) {
            (FormatterKind::Auto, ScaleMode::Linear) => Box::new(ScalarFormatter),
            (FormatterKind::Auto, ScaleMode::Log) => Box::new(LogFormatter),
            (FormatterKind::FixedDecimals { precision }, _) => {
                Box::new(FixedDecimalsFormatter { precision })
            }
        }
    }
}

#[must_use]
pub fn target_spacing_px(axis: Axis) -> f64 {
    match axis {
        Axis::X => AXIS_X_TARGET_SPACING_PX,
        Axis::Y => AXIS_Y_TARGET_SPACING_PX,
    }
}

fn min_step(values: &[f64]) -> f64 {
    values
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .filter(|step| step.is_finite() && *step > 0.0)
        .fold(f64::INFINITY, f64::min)
}

fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().min(MAX_LABEL_PRECISION)
}

fn format_decimals(values: &[f64], precision: usize) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            let text = format!("{value:.precision$}");
            if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
                text[1..].to_owned()
            } else {
                text
            }
        })
        .collect()
}

fn format_scientific(values: &[f64], precision: usize) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            if *value == 0.0 {
                "0".to_owned()
            } else {
                format!("{value:.precision$e}")
            }
        })
        .collect()
}

fn all_distinct(labels: &[String]) -> bool {
    labels.windows(2).all(|pair| pair[0] != pair[1])
}

fn format_log_label(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "nan".to_owned();
    }
    let exponent = value.log10();
    let rounded = exponent.round();
    if (exponent - rounded).abs() <= 1e-9 {
        return format!("10{}", superscript(rounded as i32));
    }
    // Four significant digits, then trailing zeros trimmed.
    let decimals = (3 - exponent.floor() as i32).clamp(0, MAX_LABEL_PRECISION as i32) as usize;
    let text = format!("{value:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        text
    }
}

fn superscript(exponent: i32) -> String {
    exponent
        .to_string()
        .chars()
        .map(|ch| match ch {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        AxisTickConfig, FixedDecimalsFormatter, FormatterKind, LocatorKind, LogFormatter,
        ScalarFormatter, TickFormatter, TickRequest, generate_ticks, superscript,
    };
    use crate::core::{Axis, FixedLocator, ScaleMode, Transform};

    fn request(transform: &Transform, range: (f64, f64), scale: ScaleMode) -> TickRequest<'_> {
        TickRequest {
            axis: Axis::X,
            range,
            scale,
            transform,
            span_px: 500.0,
        }
    }

    #[test]
    fn out_of_range_candidates_are_filtered() {
        let transform = Transform::new(0.0, 10.0).expect("transform");
        let locator = FixedLocator::new(&[0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        let ticks = generate_ticks(
            &request(&transform, (0.0, 10.0), ScaleMode::Linear),
            &locator,
            &ScalarFormatter,
        );
        let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
        assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks[5].position, 1.0);
        assert_eq!(ticks[5].pixel, 500.0);
        assert_eq!(ticks[1].label, "2");
    }

    #[test]
    fn log_ticks_skip_non_positive_candidates() {
        let transform = Transform::new(0.0, 2.0).expect("transform");
        let locator = FixedLocator::new(&[-1.0, 0.0, 1.0, 10.0, 100.0]);
        let ticks = generate_ticks(
            &request(&transform, (1.0, 100.0), ScaleMode::Log),
            &locator,
            &LogFormatter,
        );
        let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["10⁰", "10¹", "10²"]);
        assert!((ticks[1].position - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn y_axis_pixels_grow_downward() {
        let transform = Transform::new(0.0, 1.0).expect("transform");
        let request = TickRequest {
            axis: Axis::Y,
            range: (0.0, 1.0),
            scale: ScaleMode::Linear,
            transform: &transform,
            span_px: 200.0,
        };
        let ticks = generate_ticks(&request, &FixedLocator::new(&[0.0, 1.0]), &ScalarFormatter);
        assert_eq!(ticks[0].pixel, 200.0);
        assert_eq!(ticks[1].pixel, 0.0);
    }

    #[test]
    fn empty_range_yields_no_ticks() {
        let transform = Transform::default();
        let ticks = generate_ticks(
            &request(&transform, (1.0, 1.0), ScaleMode::Linear),
            &FixedLocator::new(&[1.0]),
            &ScalarFormatter,
        );
        assert!(ticks.is_empty());
    }

    #[test]
    fn scalar_formatter_disambiguates_neighbours() {
        let labels = ScalarFormatter.format_ticks(&[0.1, 0.15, 0.2]);
        assert_eq!(labels, vec!["0.10", "0.15", "0.20"]);

        let labels = ScalarFormatter.format_ticks(&[1.0, 1.0001]);
        assert_eq!(labels, vec!["1.0000", "1.0001"]);
    }

    #[test]
    fn scalar_formatter_switches_to_scientific_for_tiny_values() {
        let labels = ScalarFormatter.format_ticks(&[1e-20, 2e-20, 3e-20, 4e-20, 5e-20]);
        assert_eq!(labels, vec!["1e-20", "2e-20", "3e-20", "4e-20", "5e-20"]);

        let labels = ScalarFormatter.format_ticks(&[0.0, 2e-17, 4e-17, 6e-17, 8e-17, 1e-16]);
        assert_eq!(labels, vec!["0", "2e-17", "4e-17", "6e-17", "8e-17", "1e-16"]);

        let labels = ScalarFormatter.format_ticks(&[1e-5, 1.5e-5, 2e-5]);
        assert_eq!(labels, vec!["1.0e-5", "1.5e-5", "2.0e-5"]);
    }

    #[test]
    fn scalar_formatter_falls_back_to_scientific_when_decimals_collide() {
        let labels = ScalarFormatter.format_ticks(&[1e-3, 1e-3 + 1e-14]);
        assert_eq!(labels.len(), 2);
        assert_ne!(labels[0], labels[1]);
        assert!(labels.iter().all(|label| label.contains('e')));
    }

    #[test]
    fn superscript_maps_every_digit() {
        assert_eq!(superscript(-12), "⁻¹²");
        assert_eq!(superscript(3_456_789), "³⁴⁵⁶⁷⁸⁹");
        assert_eq!(superscript(0), "⁰");
    }

    #[test]
    fn scalar_formatter_never_prints_negative_zero() {
        let labels = ScalarFormatter.format_ticks(&[-0.0, 1.0]);
        assert_eq!(labels[0], "0");
    }

    #[test]
    fn log_formatter_handles_negative_exponents_and_subdecades() {
        let labels = LogFormatter.format_ticks(&[0.01, 20.0, 0.5]);
        assert_eq!(labels, vec!["10⁻²", "20", "0.5"]);
    }

    #[test]
    fn fixed_decimals_formatter_uses_constant_precision() {
        let labels = FixedDecimalsFormatter { precision: 2 }.format_ticks(&[1.0, 2.5]);
        assert_eq!(labels, vec!["1.00", "2.50"]);
    }

    #[test]
    fn tick_config_resolves_per_scale() {
        let config = AxisTickConfig::default()
            .with_locator(LocatorKind::MaxN { bins: 4 })
            .with_formatter(FormatterKind::FixedDecimals { precision: 1 });
        let locator = config.resolve_locator(Axis::X, ScaleMode::Linear, 400.0);
        assert_eq!(locator.locate(0.0, 8.0).as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0]);
        let formatter = config.resolve_formatter(ScaleMode::Log);
        assert_eq!(formatter.format_ticks(&[3.0]), vec!["3.0"]);
    }
}
