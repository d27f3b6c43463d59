use tracing::trace;

use crate::core::{Axis, AxisTickConfig, Tick, TickRequest, generate_ticks};
use crate::error::PlotResult;
use crate::render::SceneHost;

use super::Axes;
use super::validation::validate_tick_config;

impl<S: SceneHost> Axes<S> {
    #[must_use]
    pub fn x_ticks(&self) -> &[Tick] {
        &self.x.ticks
    }

    #[must_use]
    pub fn y_ticks(&self) -> &[Tick] {
        &self.y.ticks
    }

    #[must_use]
    pub fn tick_config(&self, axis: Axis) -> &AxisTickConfig {
        &self.axis_view(axis).tick_config
    }

    pub fn set_x_tick_config(&mut self, config: AxisTickConfig) -> PlotResult<()> {
        self.set_tick_config(Axis::X, config)
    }

    pub fn set_y_tick_config(&mut self, config: AxisTickConfig) -> PlotResult<()> {
        self.set_tick_config(Axis::Y, config)
    }

    fn set_tick_config(&mut self, axis: Axis, config: AxisTickConfig) -> PlotResult<()> {
        validate_tick_config(&config)?;
        self.axis_view_mut(axis).tick_config = config;
        self.refresh_ticks(axis);
        Ok(())
    }

    /// Regenerates one axis' ticks from its current window, scale and pixel
    /// span, and hands them to the scene.
    pub(super) fn refresh_ticks(&mut self, axis: Axis) {
        let ticks = {
            let view = self.axis_view(axis);
            let span_px = self.viewport.span_px(axis);
            let locator = view.tick_config.resolve_locator(axis, view.scale, span_px);
            let formatter = view.tick_config.resolve_formatter(view.scale);
            let request = TickRequest {
                axis,
                range: view.visible_limits(),
                scale: view.scale,
                transform: &view.transform,
                span_px,
            };
            generate_ticks(&request, locator.as_ref(), formatter.as_ref())
        };
        trace!(%axis, count = ticks.len(), "ticks regenerated");
        self.scene.set_axis_ticks(axis, &ticks);
        self.axis_view_mut(axis).ticks = ticks;
    }
}
