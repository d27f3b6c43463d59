use serde::{Deserialize, Serialize};

use crate::artist::{ArtistId, ArtistKind};
use crate::core::{Axis, ScaleMode, Viewport};
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxesContext {
    pub viewport: Viewport,
    /// Visible data-space x range.
    pub xlim: (f64, f64),
    /// Visible data-space y range.
    pub ylim: (f64, f64),
    pub xscale: ScaleMode,
    pub yscale: ScaleMode,
    pub zoomed: bool,
    pub artist_count: usize,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxesEvent {
    ArtistAdded { id: ArtistId, kind: ArtistKind },
    ArtistRemoved { id: ArtistId },
    Autoscaled,
    LimitsChanged { axis: Axis, low: f64, high: f64 },
    ScaleChanged { axis: Axis, scale: ScaleMode },
    Zoomed,
    ZoomReset,
    InteractionModeChanged { mode: InteractionMode },
    Resized { width: u32, height: u32 },
}

/// Observer hook for bounded custom logic.
///
/// Plugins see events and read axes context without mutating axes internals.
pub trait AxesPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: AxesEvent, context: AxesContext);
}
