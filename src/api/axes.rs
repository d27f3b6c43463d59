use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::artist::{Artist, ArtistId};
use crate::core::{Axis, AxisTickConfig, ScaleMode, Tick, Transform, Viewport};
use crate::error::PlotResult;
use crate::extensions::AxesPlugin;
use crate::interaction::InteractionState;
use crate::render::{CameraWindow, SceneHost};

use super::AxesConfig;
use super::validation::validate_axes_config;

/// Visible data-space limits and scales of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewLimits {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub xscale: ScaleMode,
    pub yscale: ScaleMode,
}

/// Per-axis state: scale, view-space transform and latest ticks.
#[derive(Debug, Clone)]
pub(super) struct AxisView {
    pub(super) scale: ScaleMode,
    pub(super) transform: Transform,
    pub(super) ticks: Vec<Tick>,
    pub(super) tick_config: AxisTickConfig,
    pub(super) label: String,
}

impl AxisView {
    fn new(scale: ScaleMode, tick_config: AxisTickConfig, label: String) -> Self {
        Self {
            scale,
            transform: Transform::default(),
            ticks: Vec::new(),
            tick_config,
            label,
        }
    }

    /// Data-space bounds of the active (zoom or base) window.
    pub(super) fn visible_limits(&self) -> (f64, f64) {
        let (low, high) = self.transform.active_window().bounds();
        (self.scale.to_data_space(low), self.scale.to_data_space(high))
    }

    pub(super) fn base_limits(&self) -> (f64, f64) {
        let (low, high) = self.transform.base_window().bounds();
        (self.scale.to_data_space(low), self.scale.to_data_space(high))
    }
}

/// 2-D plotting area orchestrating artists, view limits, ticks and the
/// box-zoom gesture on top of a host scene.
///
/// All mutations run synchronously: transforms and the camera are updated
/// before ticks are regenerated, and artists are re-projected before
/// autoscale reads their extents.
pub struct Axes<S: SceneHost> {
    pub(super) scene: S,
    pub(super) viewport: Viewport,
    pub(super) x: AxisView,
    pub(super) y: AxisView,
    pub(super) artists: IndexMap<ArtistId, Artist>,
    pub(super) next_artist_id: u64,
    pub(super) bbox_padding_ratio: f64,
    pub(super) title: String,
    pub(super) interaction: InteractionState,
    pub(super) plugins: Vec<Box<dyn AxesPlugin>>,
}

impl<S: SceneHost> Axes<S> {
    pub fn new(scene: S, config: AxesConfig) -> PlotResult<Self> {
        validate_axes_config(&config)?;

        let mut axes = Self {
            scene,
            viewport: config.viewport,
            x: AxisView::new(config.xscale, config.x_ticks, config.xlabel),
            y: AxisView::new(config.yscale, config.y_ticks, config.ylabel),
            artists: IndexMap::new(),
            next_artist_id: 0,
            bbox_padding_ratio: config.bbox_padding_ratio,
            title: config.title,
            interaction: InteractionState::new(config.interaction_mode),
            plugins: Vec::new(),
        };

        let navigation = axes.interaction.navigation_enabled();
        axes.scene.set_navigation_enabled(navigation);
        axes.sync_camera();
        axes.refresh_ticks(Axis::X);
        axes.refresh_ticks(Axis::Y);
        debug!(
            width = axes.viewport.width,
            height = axes.viewport.height,
            xscale = %axes.x.scale,
            yscale = %axes.y.scale,
            "axes created"
        );
        Ok(axes)
    }

    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    #[must_use]
    pub fn into_scene(self) -> S {
        self.scene
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn xlabel(&self) -> &str {
        &self.x.label
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.x.label = label.into();
    }

    #[must_use]
    pub fn ylabel(&self) -> &str {
        &self.y.label
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.y.label = label.into();
    }

    /// Base plus zoom transform of one axis, in view space.
    #[must_use]
    pub fn transform(&self, axis: Axis) -> &Transform {
        &self.axis_view(axis).transform
    }

    pub(super) fn axis_view(&self, axis: Axis) -> &AxisView {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub(super) fn axis_view_mut(&mut self, axis: Axis) -> &mut AxisView {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// Pushes the active view-space windows of both axes to the camera.
    pub(super) fn sync_camera(&mut self) {
        let (left, right) = self.x.transform.active_window().bounds();
        let (bottom, top) = self.y.transform.active_window().bounds();
        self.scene.set_camera_window(CameraWindow {
            left,
            right,
            bottom,
            top,
        });
    }
}
