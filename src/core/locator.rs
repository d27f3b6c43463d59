use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// Candidate tick values, ascending and finite.
pub type TickValues = SmallVec<[f64; 16]>;

/// Upper bound on candidates produced by the built-in locators.
const MAX_CANDIDATES: usize = 1_000;
const MAX_SNAP_DECIMALS: i32 = 300;

/// Chooses "nice" candidate tick values for a data-space range.
///
/// Implementations may return values outside `[low, high]`; the tick
/// generator filters them against the visible window. Callers only query with
/// `low < high`.
pub trait Locator {
    fn locate(&self, low: f64, high: f64) -> TickValues;
}

/// Number of bins that keeps ticks about `target_spacing_px` apart.
#[must_use]
pub fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Linear locator producing at most `bins + 1` multiples of a nice step.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxNLocator {
    bins: usize,
    steps: SmallVec<[f64; 8]>,
}

impl MaxNLocator {
    pub const DEFAULT_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

    #[must_use]
    pub fn new(bins: usize) -> Self {
        Self {
            bins: bins.max(1),
            steps: SmallVec::from_slice(&Self::DEFAULT_STEPS),
        }
    }

    /// Restricts step mantissas; values outside `[1, 10]` are dropped.
    #[must_use]
    pub fn with_steps(mut self, steps: &[f64]) -> Self {
        let mut steps: SmallVec<[f64; 8]> = steps
            .iter()
            .copied()
            .filter(|step| step.is_finite() && (1.0..=10.0).contains(step))
            .collect();
        steps.sort_by_key(|step| OrderedFloat(*step));
        steps.dedup();
        if steps.last().copied() != Some(10.0) {
            steps.push(10.0);
        }
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.bins
    }

    fn nice_step(&self, raw_step: f64) -> f64 {
        let magnitude = 10.0_f64.powf(raw_step.log10().floor());
        let mantissa = raw_step / magnitude;
        let step = self
            .steps
            .iter()
            .copied()
            .find(|step| *step >= mantissa * (1.0 - 1e-9))
            .unwrap_or(10.0);
        step * magnitude
    }
}

impl Locator for MaxNLocator {
    fn locate(&self, low: f64, high: f64) -> TickValues {
        if !low.is_finite() || !high.is_finite() || high <= low {
            return TickValues::new();
        }

        let raw_step = (high - low) / self.bins as f64;
        let step = self.nice_step(raw_step);
        if !step.is_finite() || step <= 0.0 {
            return TickValues::new();
        }

        let first = (low / step + 1e-9).floor();
        let last = (high / step - 1e-9).ceil();
        let count = last - first + 1.0;
        if !count.is_finite() || count > MAX_CANDIDATES as f64 {
            return TickValues::new();
        }

        // Snap one digit below the step; subnormal steps are left as computed.
        let decimals = (1 - step.log10().floor() as i32).max(0);
        let precision = (decimals <= MAX_SNAP_DECIMALS).then(|| 10.0_f64.powi(decimals));
        (0..count as usize)
            .map(|index| {
                let value = (first + index as f64) * step;
                // Drop float noise such as 0.30000000000000004 or -0.0.
                let snapped = precision
                    .map(|precision| (value * precision).round() / precision)
                    .filter(|snapped| snapped.is_finite())
                    .unwrap_or(value);
                if snapped == 0.0 { 0.0 } else { snapped }
            })
            .collect()
    }
}

/// Default linear locator sized from the axis pixel length.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoLocator {
    inner: MaxNLocator,
}

impl AutoLocator {
    pub const MIN_BINS: usize = 2;
    pub const MAX_BINS: usize = 10;

    #[must_use]
    pub fn for_axis_span(axis_span_px: f64, target_spacing_px: f64) -> Self {
        let bins = axis_tick_target_count(
            axis_span_px,
            target_spacing_px,
            Self::MIN_BINS,
            Self::MAX_BINS,
        );
        Self {
            inner: MaxNLocator::new(bins),
        }
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.inner.bins()
    }
}

impl Locator for AutoLocator {
    fn locate(&self, low: f64, high: f64) -> TickValues {
        self.inner.locate(low, high)
    }
}

/// Returns a fixed list of values regardless of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLocator {
    values: TickValues,
}

impl FixedLocator {
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut values: TickValues = values.iter().copied().filter(|v| v.is_finite()).collect();
        values.sort_by_key(|value| OrderedFloat(*value));
        values.dedup();
        Self { values }
    }
}

impl Locator for FixedLocator {
    fn locate(&self, _low: f64, _high: f64) -> TickValues {
        self.values.clone()
    }
}

/// Base-10 locator placing ticks on decades, with 1..9 subdivisions when the
/// range spans less than two decades.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLocator {
    max_ticks: usize,
}

impl LogLocator {
    #[must_use]
    pub fn new(max_ticks: usize) -> Self {
        Self {
            max_ticks: max_ticks.max(2),
        }
    }
}

impl Default for LogLocator {
    fn default() -> Self {
        Self::new(AutoLocator::MAX_BINS)
    }
}

impl Locator for LogLocator {
    fn locate(&self, low: f64, high: f64) -> TickValues {
        if !low.is_finite() || !high.is_finite() || high <= low || high <= 0.0 {
            return TickValues::new();
        }
        let low = if low > 0.0 { low } else { high * 1e-6 };

        let first_decade = low.log10().floor() as i32;
        let last_decade = high.log10().ceil() as i32;
        let decades = (last_decade - first_decade).max(1) as usize;
        if decades > MAX_CANDIDATES {
            return TickValues::new();
        }

        let subs: &[f64] = if decades <= 2 {
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        } else {
            &[1.0]
        };
        let stride = decades.div_ceil(self.max_ticks).max(1) as i32;

        let mut values = TickValues::new();
        let mut decade = first_decade - first_decade.rem_euclid(stride);
        while decade <= last_decade {
            let magnitude = 10.0_f64.powi(decade);
            for sub in subs {
                values.push(sub * magnitude);
            }
            decade += stride;
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::{AutoLocator, FixedLocator, LogLocator, Locator, MaxNLocator, axis_tick_target_count};

    #[test]
    fn max_n_locator_prefers_round_steps() {
        let values = MaxNLocator::new(5).locate(0.0, 10.0);
        assert_eq!(values.as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn max_n_locator_extends_to_cover_range() {
        let values = MaxNLocator::new(4).locate(0.3, 2.7);
        assert_eq!(values.first().copied(), Some(0.0));
        assert_eq!(values.last().copied(), Some(3.0));
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn max_n_locator_snaps_float_noise() {
        let values = MaxNLocator::new(10).locate(0.0, 1.0);
        assert!(values.contains(&0.3));
        assert!(values.contains(&0.7));
    }

    #[test]
    fn max_n_locator_keeps_distinct_values_on_tiny_ranges() {
        let values = MaxNLocator::new(4).locate(1e-20, 5e-20);
        assert_eq!(values.len(), 5);
        for (value, expected) in values.iter().zip([1e-20, 2e-20, 3e-20, 4e-20, 5e-20]) {
            assert!(((value - expected) / expected).abs() <= 1e-12, "{value} vs {expected}");
        }

        let values = MaxNLocator::new(5).locate(0.0, 1e-16);
        assert_eq!(values.first().copied(), Some(0.0));
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(values.len() >= 5);
    }

    #[test]
    fn max_n_locator_rejects_empty_range() {
        assert!(MaxNLocator::new(5).locate(1.0, 1.0).is_empty());
        assert!(MaxNLocator::new(5).locate(f64::NAN, 1.0).is_empty());
    }

    #[test]
    fn auto_locator_bins_follow_pixel_span() {
        assert_eq!(AutoLocator::for_axis_span(400.0, 72.0).bins(), 6);
        assert_eq!(AutoLocator::for_axis_span(50.0, 72.0).bins(), 2);
        assert_eq!(AutoLocator::for_axis_span(5_000.0, 72.0).bins(), 10);
        assert_eq!(axis_tick_target_count(f64::NAN, 72.0, 2, 10), 2);
    }

    #[test]
    fn fixed_locator_sorts_and_drops_non_finite() {
        let values = FixedLocator::new(&[4.0, f64::NAN, 0.0, 2.0, 2.0]).locate(0.0, 1.0);
        assert_eq!(values.as_slice(), &[0.0, 2.0, 4.0]);
    }

    #[test]
    fn log_locator_places_decades_for_wide_ranges() {
        let values = LogLocator::default().locate(1.0, 1_000_000.0);
        assert_eq!(values.len(), 7);
        assert!((values[3] - 1_000.0).abs() <= 1e-9);
    }

    #[test]
    fn log_locator_subdivides_narrow_ranges() {
        let values = LogLocator::default().locate(2.0, 50.0);
        assert!(values.iter().any(|value| (value - 20.0).abs() <= 1e-9));
        assert!(values.iter().any(|value| (value - 5.0).abs() <= 1e-9));
    }
}
