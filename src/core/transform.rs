use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// A finite, non-empty `[low, high]` interval in view space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    low: f64,
    high: f64,
}

impl Window {
    pub fn new(low: f64, high: f64) -> PlotResult<Self> {
        if !low.is_finite() || !high.is_finite() || high <= low {
            return Err(PlotError::DegenerateRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub fn low(self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.low, self.high)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.high - self.low
    }

    /// Offset subtracted before scaling.
    #[must_use]
    pub fn origin(self) -> f64 {
        self.low
    }

    /// Normalization factor, `1 / (high - low)`.
    #[must_use]
    pub fn scale(self) -> f64 {
        1.0 / self.span()
    }

    #[must_use]
    fn normalize(self, value: f64) -> f64 {
        // Dividing by the span (instead of multiplying by `scale`) keeps
        // `normalize(high) == 1.0` exact.
        (value - self.low) / self.span()
    }

    #[must_use]
    fn denormalize(self, normalized: f64) -> f64 {
        self.low + normalized * self.span()
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}

/// Maps view-space scalars onto the normalized `[0, 1]` axis coordinate.
///
/// The base window is set from autoscale or explicit limits. A zoom window can
/// be layered on top of it without discarding the base; `reset` drops only the
/// zoom layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    base: Window,
    zoom: Option<Window>,
}

impl Transform {
    pub fn new(low: f64, high: f64) -> PlotResult<Self> {
        Ok(Self {
            base: Window::new(low, high)?,
            zoom: None,
        })
    }

    /// Window currently used for evaluation (zoom wins over base).
    #[must_use]
    pub fn active_window(&self) -> Window {
        self.zoom.unwrap_or(self.base)
    }

    #[must_use]
    pub fn base_window(&self) -> Window {
        self.base
    }

    #[must_use]
    pub fn zoom_window(&self) -> Option<Window> {
        self.zoom
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_some()
    }

    #[must_use]
    pub fn evaluate(&self, value: f64) -> f64 {
        self.active_window().normalize(value)
    }

    #[must_use]
    pub fn inverse(&self, normalized: f64) -> f64 {
        self.active_window().denormalize(normalized)
    }

    /// Replaces the base window. An active zoom window is left in place.
    pub fn update(&mut self, low: f64, high: f64) -> PlotResult<()> {
        self.set_base(Window::new(low, high)?);
        Ok(())
    }

    /// Overlays a temporary window on top of the base window.
    pub fn zoom(&mut self, low: f64, high: f64) -> PlotResult<()> {
        self.set_zoom(Window::new(low, high)?);
        Ok(())
    }

    pub fn set_base(&mut self, window: Window) {
        self.base = window;
    }

    pub fn set_zoom(&mut self, window: Window) {
        self.zoom = Some(window);
    }

    pub fn reset(&mut self) {
        self.zoom = None;
    }
}
