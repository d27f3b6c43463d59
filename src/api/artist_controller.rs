use tracing::{debug, warn};

use crate::artist::{Artist, ArtistId, Image, Line, Mesh, Points};
use crate::core::{Axis, RangeRepair, aggregate_bboxes, repair_view_range};
use crate::error::{PlotError, PlotResult};
use crate::extensions::AxesEvent;
use crate::render::{Color, Renderable, SceneHost};

use super::Axes;

impl<S: SceneHost> Axes<S> {
    /// Adds an artist under the current axis scales and autoscales.
    ///
    /// Artists without an explicit color get the next entry of the default
    /// cycle for their kind.
    pub fn add_artist(&mut self, artist: impl Into<Artist>) -> PlotResult<ArtistId> {
        let mut artist = artist.into();
        artist.set_xscale(self.x.scale)?;
        artist.set_yscale(self.y.scale)?;
        let kind = artist.kind();
        let same_kind = self.artists.values().filter(|other| other.kind() == kind).count();
        artist.set_default_color(Color::cycle(same_kind));

        let id = ArtistId(self.next_artist_id);
        self.scene.add(Renderable {
            id,
            geometry: artist.geometry(),
        })?;
        self.next_artist_id += 1;
        self.artists.insert(id, artist);

        debug!(%id, %kind, "artist added");
        self.emit_plugin_event(AxesEvent::ArtistAdded { id, kind });
        self.autoscale();
        Ok(id)
    }

    /// Solid line through `(x, y)`.
    pub fn plot(&mut self, x: Vec<f64>, y: Vec<f64>) -> PlotResult<ArtistId> {
        self.add_artist(Line::new(x, y)?)
    }

    /// Adds a pre-configured line (format, color, width ...).
    pub fn plot_with(&mut self, line: Line) -> PlotResult<ArtistId> {
        self.add_artist(line)
    }

    pub fn scatter(&mut self, x: Vec<f64>, y: Vec<f64>) -> PlotResult<ArtistId> {
        self.add_artist(Points::new(x, y)?)
    }

    pub fn imshow(&mut self, image: Image) -> PlotResult<ArtistId> {
        self.add_artist(image)
    }

    pub fn pcolormesh(&mut self, mesh: Mesh) -> PlotResult<ArtistId> {
        self.add_artist(mesh)
    }

    /// Removes an artist from the axes and the scene. Returns `true` when
    /// removed.
    pub fn remove_artist(&mut self, id: ArtistId) -> bool {
        if self.artists.shift_remove(&id).is_none() {
            return false;
        }
        self.scene.remove(id);
        debug!(%id, "artist removed");
        self.emit_plugin_event(AxesEvent::ArtistRemoved { id });
        self.autoscale();
        true
    }

    /// Edits an artist in place, re-syncs its scene payload and autoscales.
    ///
    /// The edit is applied to a copy first; on error nothing changes.
    pub fn update_artist<F>(&mut self, id: ArtistId, edit: F) -> PlotResult<()>
    where
        F: FnOnce(&mut Artist) -> PlotResult<()>,
    {
        let mut artist = self
            .artists
            .get(&id)
            .cloned()
            .ok_or_else(|| PlotError::InvalidData(format!("unknown artist `{id}`")))?;
        edit(&mut artist)?;
        artist.set_xscale(self.x.scale)?;
        artist.set_yscale(self.y.scale)?;
        self.scene.update(Renderable {
            id,
            geometry: artist.geometry(),
        })?;
        self.artists.insert(id, artist);
        self.autoscale();
        Ok(())
    }

    #[must_use]
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(&id)
    }

    /// Artists in insertion order.
    pub fn artists(&self) -> impl Iterator<Item = (ArtistId, &Artist)> {
        self.artists.iter().map(|(id, artist)| (*id, artist))
    }

    #[must_use]
    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// Fits both base windows to the union of all artist extents and drops
    /// any zoom.
    ///
    /// Unusable extents (no artists, nothing inside a log domain) fall back to
    /// the unit view window.
    pub fn autoscale(&mut self) {
        let pad_ratio = self.bbox_padding_ratio;
        let bbox = aggregate_bboxes(
            self.artists
                .values()
                .map(|artist| artist.bbox_with_padding(pad_ratio)),
        );

        for axis in [Axis::X, Axis::Y] {
            let has_artists = !self.artists.is_empty();
            let view = self.axis_view_mut(axis);
            let (low, high) = bbox.range(axis);
            let scale = view.scale;
            let to_view = |value: f64| scale.to_view_space(value).unwrap_or(f64::NAN);
            let (window, repair) = repair_view_range(to_view(low), to_view(high));
            if repair != RangeRepair::None && has_artists {
                warn!(%axis, low, high, ?repair, "repaired autoscale extent");
            }
            view.transform.set_base(window);
            view.transform.reset();
        }

        self.sync_camera();
        self.refresh_ticks(Axis::X);
        self.refresh_ticks(Axis::Y);
        debug!(
            artists = self.artists.len(),
            xlim = ?self.get_xlim(),
            ylim = ?self.get_ylim(),
            "autoscaled"
        );
        self.emit_plugin_event(AxesEvent::Autoscaled);
    }
}
