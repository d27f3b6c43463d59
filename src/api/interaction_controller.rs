use tracing::{debug, trace};

use crate::core::{Axis, BBox, Viewport};
use crate::error::PlotResult;
use crate::extensions::AxesEvent;
use crate::interaction::{
    GestureOutcome, InteractionMode, PointerDisposition, PointerEvent, ZoomGestureController,
};
use crate::render::SceneHost;

use super::Axes;
use super::validation::validate_viewport;

impl<S: SceneHost> Axes<S> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn zoom_gesture(&self) -> &ZoomGestureController {
        self.interaction.gesture()
    }

    /// Enters or leaves box-zoom mode. While active, the host's navigation
    /// controls are disabled.
    pub fn set_zoom_mode(&mut self, enabled: bool) {
        let mode = if enabled {
            InteractionMode::BoxZoom
        } else {
            InteractionMode::Navigate
        };
        self.set_interaction_mode(mode);
    }

    /// Enables or disables host panning. Enabling it leaves box-zoom mode.
    pub fn toggle_pan(&mut self, enabled: bool) {
        self.interaction.set_pan_enabled(enabled);
        if enabled {
            self.set_interaction_mode(InteractionMode::Navigate);
        } else {
            let navigation = self.interaction.navigation_enabled();
            self.scene.set_navigation_enabled(navigation);
        }
    }

    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        let changed = self.interaction.mode() != mode;
        if self.interaction.set_mode(mode) {
            self.scene.set_drag_rect(self.interaction.gesture().drag_rect());
            debug!("active box zoom drag discarded by mode switch");
        }
        let navigation = self.interaction.navigation_enabled();
        self.scene.set_navigation_enabled(navigation);
        if changed {
            debug!(?mode, "interaction mode changed");
            self.emit_plugin_event(AxesEvent::InteractionModeChanged { mode });
        }
    }

    /// Routes one pointer event (normalized axes coordinates).
    ///
    /// In navigate mode the event is left to the host. In box-zoom mode it
    /// drives the gesture; a committed rectangle is mapped through the
    /// active transforms into view space and zoomed to.
    pub fn pointer_event(&mut self, event: PointerEvent) -> PointerDisposition {
        if self.interaction.mode() == InteractionMode::Navigate {
            return PointerDisposition::Navigation;
        }

        let outcome = self.interaction.gesture_mut().handle(event);
        trace!(?event, ?outcome, "pointer event");
        match outcome {
            GestureOutcome::Ignored => PointerDisposition::Consumed,
            GestureOutcome::RectChanged | GestureOutcome::Released => {
                self.scene.set_drag_rect(self.interaction.gesture().drag_rect());
                PointerDisposition::Consumed
            }
            GestureOutcome::Committed(pointer_box) => {
                self.scene.set_drag_rect(self.interaction.gesture().drag_rect());
                let view = self.pointer_box_to_view(pointer_box);
                self.zoom(view);
                PointerDisposition::Zoomed { view }
            }
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> PointerDisposition {
        self.pointer_event(PointerEvent::down(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> PointerDisposition {
        self.pointer_event(PointerEvent::moved(x, y))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> PointerDisposition {
        self.pointer_event(PointerEvent::up(x, y))
    }

    /// Data-space coordinates under a normalized pointer position.
    #[must_use]
    pub fn cursor_data_position(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.x.scale.to_data_space(self.x.transform.inverse(x)),
            self.y.scale.to_data_space(self.y.transform.inverse(y)),
        )
    }

    /// Resizes the axes. Only axes whose pixel span changed get new ticks.
    pub fn set_size(&mut self, width: u32, height: u32) -> PlotResult<()> {
        let viewport = validate_viewport(Viewport::new(width, height))?;
        let previous = self.viewport;
        if previous == viewport {
            return Ok(());
        }
        self.viewport = viewport;
        if previous.width != width {
            self.refresh_ticks(Axis::X);
        }
        if previous.height != height {
            self.refresh_ticks(Axis::Y);
        }
        debug!(width, height, "axes resized");
        self.emit_plugin_event(AxesEvent::Resized { width, height });
        Ok(())
    }

    fn pointer_box_to_view(&self, pointer_box: BBox) -> BBox {
        BBox {
            left: self.x.transform.inverse(pointer_box.left),
            right: self.x.transform.inverse(pointer_box.right),
            bottom: self.y.transform.inverse(pointer_box.bottom),
            top: self.y.transform.inverse(pointer_box.top),
        }
    }
}
