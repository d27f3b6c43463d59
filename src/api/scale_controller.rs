use tracing::{debug, warn};

use crate::core::{Axis, ScaleMode};
use crate::error::{PlotError, PlotResult};
use crate::extensions::AxesEvent;
use crate::artist::ArtistId;
use crate::render::{Renderable, SceneHost};

use super::Axes;

impl<S: SceneHost> Axes<S> {
    #[must_use]
    pub fn xscale(&self) -> ScaleMode {
        self.x.scale
    }

    #[must_use]
    pub fn yscale(&self) -> ScaleMode {
        self.y.scale
    }

    pub fn set_xscale(&mut self, mode: ScaleMode) -> PlotResult<()> {
        self.set_scale(Axis::X, mode)
    }

    pub fn set_yscale(&mut self, mode: ScaleMode) -> PlotResult<()> {
        self.set_scale(Axis::Y, mode)
    }

    /// Switches one axis' scale, re-projects every artist and autoscales.
    ///
    /// Every artist is checked before anything changes, so an unsupported
    /// scale leaves the axes untouched. The new mode is committed only after
    /// the scene accepted every re-projected artist; on a scene error the
    /// already pushed artists are restored.
    pub fn set_scale(&mut self, axis: Axis, mode: ScaleMode) -> PlotResult<()> {
        if self.axis_view(axis).scale == mode {
            return Ok(());
        }

        let unsupported: Vec<String> = self
            .artists
            .iter()
            .filter(|(_, artist)| !artist.supports_scale(axis, mode))
            .map(|(id, artist)| format!("{} {id}", artist.kind()))
            .collect();
        if !unsupported.is_empty() {
            return Err(PlotError::UnsupportedScaleCapability {
                scale: mode,
                artists: unsupported,
            });
        }

        let mut reprojected = self.artists.clone();
        for artist in reprojected.values_mut() {
            artist.set_scale(axis, mode)?;
        }

        let mut pushed = Vec::with_capacity(reprojected.len());
        for (id, artist) in &reprojected {
            let update = self.scene.update(Renderable {
                id: *id,
                geometry: artist.geometry(),
            });
            if let Err(err) = update {
                self.restore_scene_geometry(&pushed);
                warn!(%axis, scale = %mode, %id, %err, "scale change rejected by scene");
                return Err(err);
            }
            pushed.push(*id);
        }

        self.artists = reprojected;
        self.axis_view_mut(axis).scale = mode;
        debug!(%axis, scale = %mode, artists = self.artists.len(), "axis scale changed");
        self.emit_plugin_event(AxesEvent::ScaleChanged { axis, scale: mode });
        self.autoscale();
        Ok(())
    }

    /// Pushes the committed geometry of `ids` back to the scene after a
    /// partially applied update.
    fn restore_scene_geometry(&mut self, ids: &[ArtistId]) {
        for id in ids {
            let Some(artist) = self.artists.get(id) else {
                continue;
            };
            let restored = self.scene.update(Renderable {
                id: *id,
                geometry: artist.geometry(),
            });
            if let Err(err) = restored {
                warn!(%id, %err, "failed to restore artist geometry");
            }
        }
    }
}
