use tracing::{debug, warn};

use crate::core::{Axis, BBox, RangeRepair, ScaleMode, repair_view_range};
use crate::error::{PlotError, PlotResult};
use crate::extensions::AxesEvent;
use crate::render::SceneHost;

use super::{Axes, ViewLimits};

impl<S: SceneHost> Axes<S> {
    /// Visible data-space x range (zoom-aware).
    #[must_use]
    pub fn get_xlim(&self) -> (f64, f64) {
        self.x.visible_limits()
    }

    #[must_use]
    pub fn get_ylim(&self) -> (f64, f64) {
        self.y.visible_limits()
    }

    #[must_use]
    pub fn view_limits(&self) -> ViewLimits {
        let (xmin, xmax) = self.x.visible_limits();
        let (ymin, ymax) = self.y.visible_limits();
        ViewLimits {
            xmin,
            xmax,
            ymin,
            ymax,
            xscale: self.x.scale,
            yscale: self.y.scale,
        }
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.x.transform.is_zoomed() || self.y.transform.is_zoomed()
    }

    /// Sets the base x range in data space, bypassing autoscale.
    ///
    /// Reversed bounds are swapped and equal bounds widened. On a log axis a
    /// non-positive bound fails with [`PlotError::InvalidScaleDomain`] and
    /// nothing changes.
    pub fn set_xlim(&mut self, left: f64, right: f64) -> PlotResult<()> {
        self.set_axis_limits(Axis::X, left, right)
    }

    pub fn set_ylim(&mut self, bottom: f64, top: f64) -> PlotResult<()> {
        self.set_axis_limits(Axis::Y, bottom, top)
    }

    fn set_axis_limits(&mut self, axis: Axis, low: f64, high: f64) -> PlotResult<()> {
        let scale = self.axis_view(axis).scale;
        if scale == ScaleMode::Log {
            if let Some(value) = [low, high].into_iter().find(|value| *value <= 0.0) {
                return Err(PlotError::InvalidScaleDomain { axis, value });
            }
        }

        let to_view = |value: f64| scale.to_view_space(value).unwrap_or(f64::NAN);
        let (window, repair) = repair_view_range(to_view(low), to_view(high));
        if repair != RangeRepair::None {
            warn!(%axis, low, high, ?repair, "repaired requested axis limits");
        }

        let view = self.axis_view_mut(axis);
        view.transform.set_base(window);
        view.transform.reset();
        let (low, high) = view.visible_limits();

        self.sync_camera();
        self.refresh_ticks(axis);
        debug!(%axis, low, high, "axis limits set");
        self.emit_plugin_event(AxesEvent::LimitsChanged { axis, low, high });
        Ok(())
    }

    /// Installs `view_box` (view space) as the zoom window of both axes.
    ///
    /// Degenerate extents are repaired; a non-finite box is ignored.
    pub fn zoom(&mut self, view_box: BBox) {
        if !view_box.is_finite() {
            warn!(?view_box, "ignoring non-finite zoom box");
            return;
        }

        let (x_window, x_repair) = repair_view_range(view_box.left, view_box.right);
        let (y_window, y_repair) = repair_view_range(view_box.bottom, view_box.top);
        if x_repair != RangeRepair::None || y_repair != RangeRepair::None {
            warn!(?view_box, ?x_repair, ?y_repair, "repaired zoom box");
        }
        self.x.transform.set_zoom(x_window);
        self.y.transform.set_zoom(y_window);

        self.sync_camera();
        self.refresh_ticks(Axis::X);
        self.refresh_ticks(Axis::Y);
        debug!(xlim = ?self.get_xlim(), ylim = ?self.get_ylim(), "zoomed");
        self.emit_plugin_event(AxesEvent::Zoomed);
    }

    /// Drops zoom windows; the view returns to the base limits.
    pub fn reset(&mut self) {
        self.x.transform.reset();
        self.y.transform.reset();
        self.sync_camera();
        self.refresh_ticks(Axis::X);
        self.refresh_ticks(Axis::Y);
        debug!(xlim = ?self.get_xlim(), ylim = ?self.get_ylim(), "zoom reset");
        self.emit_plugin_event(AxesEvent::ZoomReset);
    }

    /// Toolbar alias of [`Axes::reset`].
    pub fn home(&mut self) {
        self.reset();
    }
}
