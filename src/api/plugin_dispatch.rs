use crate::extensions::{AxesContext, AxesEvent};
use crate::render::SceneHost;

use super::Axes;

impl<S: SceneHost> Axes<S> {
    pub(super) fn plugin_context(&self) -> AxesContext {
        AxesContext {
            viewport: self.viewport,
            xlim: self.x.visible_limits(),
            ylim: self.y.visible_limits(),
            xscale: self.x.scale,
            yscale: self.y.scale,
            zoomed: self.is_zoomed(),
            artist_count: self.artists.len(),
            interaction_mode: self.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: AxesEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
