mod geometry;
mod primitives;
mod recording_scene;

pub use geometry::{CameraWindow, Geometry, Renderable};
pub use primitives::{Color, LineStrokeStyle};
pub use recording_scene::RecordingScene;

use crate::artist::ArtistId;
use crate::core::{Axis, Tick};
use crate::error::PlotResult;
use crate::interaction::DragRect;

/// Contract implemented by the 3-D scene hosting the axes.
///
/// The axes only hand over view-space payloads; camera projection, materials
/// and color mapping stay on the host side.
pub trait SceneHost {
    fn add(&mut self, renderable: Renderable) -> PlotResult<()>;

    /// Returns `false` when `id` was not part of the scene.
    fn remove(&mut self, id: ArtistId) -> bool;

    /// Replaces the payload of an existing handle.
    fn update(&mut self, renderable: Renderable) -> PlotResult<()> {
        self.remove(renderable.id);
        self.add(renderable)
    }

    fn set_camera_window(&mut self, camera: CameraWindow);

    fn set_drag_rect(&mut self, rect: &DragRect);

    /// Enables or disables the host's own pan/zoom controls.
    fn set_navigation_enabled(&mut self, enabled: bool);

    fn set_axis_ticks(&mut self, axis: Axis, ticks: &[Tick]);
}
