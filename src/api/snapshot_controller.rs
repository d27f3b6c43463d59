use indexmap::IndexMap;

use crate::error::{PlotError, PlotResult};
use crate::render::SceneHost;

use super::axes::AxisView;
use super::{ArtistSummary, Axes, AxesSnapshot, AxisSnapshot};

impl<S: SceneHost> Axes<S> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> AxesSnapshot {
        let artists: IndexMap<String, ArtistSummary> = self
            .artists
            .iter()
            .map(|(id, artist)| {
                let bbox = artist.bbox_with_padding(self.bbox_padding_ratio);
                let summary = ArtistSummary {
                    kind: artist.kind(),
                    len: artist.len(),
                    bbox: bbox.is_finite().then_some(bbox),
                    color: artist.color().map(|color| color.to_hex()),
                };
                (id.to_string(), summary)
            })
            .collect();

        AxesSnapshot {
            viewport: self.viewport,
            title: self.title.clone(),
            x: axis_snapshot(&self.x),
            y: axis_snapshot(&self.y),
            interaction_mode: self.interaction.mode(),
            artists,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

fn axis_snapshot(view: &AxisView) -> AxisSnapshot {
    AxisSnapshot {
        scale: view.scale,
        label: view.label.clone(),
        base_limits: view.base_limits(),
        visible_limits: view.visible_limits(),
        zoomed: view.transform.is_zoomed(),
        ticks: view.ticks.clone(),
    }
}
