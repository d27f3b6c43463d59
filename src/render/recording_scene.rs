use indexmap::IndexMap;

use crate::artist::ArtistId;
use crate::core::{Axis, Tick};
use crate::error::{PlotError, PlotResult};
use crate::interaction::DragRect;
use crate::render::{CameraWindow, Geometry, Renderable, SceneHost};

/// In-memory scene host used by tests and headless usage.
///
/// It validates every payload it receives so tests catch malformed geometry
/// before a real backend sees it.
#[derive(Debug)]
pub struct RecordingScene {
    renderables: IndexMap<ArtistId, Geometry>,
    camera: Option<CameraWindow>,
    drag_rect: DragRect,
    navigation_enabled: bool,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
    pub update_count: usize,
    pub camera_update_count: usize,
    pub x_tick_update_count: usize,
    pub y_tick_update_count: usize,
}

impl Default for RecordingScene {
    fn default() -> Self {
        Self {
            renderables: IndexMap::new(),
            camera: None,
            drag_rect: DragRect::default(),
            navigation_enabled: true,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            update_count: 0,
            camera_update_count: 0,
            x_tick_update_count: 0,
            y_tick_update_count: 0,
        }
    }
}

impl RecordingScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn renderable_count(&self) -> usize {
        self.renderables.len()
    }

    #[must_use]
    pub fn geometry(&self, id: ArtistId) -> Option<&Geometry> {
        self.renderables.get(&id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ArtistId> + '_ {
        self.renderables.keys().copied()
    }

    #[must_use]
    pub fn camera(&self) -> Option<CameraWindow> {
        self.camera
    }

    #[must_use]
    pub fn drag_rect(&self) -> DragRect {
        self.drag_rect
    }

    #[must_use]
    pub fn navigation_enabled(&self) -> bool {
        self.navigation_enabled
    }

    #[must_use]
    pub fn ticks(&self, axis: Axis) -> &[Tick] {
        match axis {
            Axis::X => &self.x_ticks,
            Axis::Y => &self.y_ticks,
        }
    }
}

impl SceneHost for RecordingScene {
    fn add(&mut self, renderable: Renderable) -> PlotResult<()> {
        renderable.geometry.validate()?;
        if self.renderables.contains_key(&renderable.id) {
            return Err(PlotError::InvalidData(format!(
                "{} is already part of the scene",
                renderable.id
            )));
        }
        self.renderables.insert(renderable.id, renderable.geometry);
        Ok(())
    }

    fn remove(&mut self, id: ArtistId) -> bool {
        self.renderables.shift_remove(&id).is_some()
    }

    fn update(&mut self, renderable: Renderable) -> PlotResult<()> {
        renderable.geometry.validate()?;
        let Some(slot) = self.renderables.get_mut(&renderable.id) else {
            return Err(PlotError::InvalidData(format!(
                "{} is not part of the scene",
                renderable.id
            )));
        };
        *slot = renderable.geometry;
        self.update_count += 1;
        Ok(())
    }

    fn set_camera_window(&mut self, camera: CameraWindow) {
        self.camera = Some(camera);
        self.camera_update_count += 1;
    }

    fn set_drag_rect(&mut self, rect: &DragRect) {
        self.drag_rect = *rect;
    }

    fn set_navigation_enabled(&mut self, enabled: bool) {
        self.navigation_enabled = enabled;
    }

    fn set_axis_ticks(&mut self, axis: Axis, ticks: &[Tick]) {
        match axis {
            Axis::X => {
                self.x_ticks = ticks.to_vec();
                self.x_tick_update_count += 1;
            }
            Axis::Y => {
                self.y_ticks = ticks.to_vec();
                self.y_tick_update_count += 1;
            }
        }
    }
}
