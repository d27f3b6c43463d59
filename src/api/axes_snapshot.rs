use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::artist::ArtistKind;
use crate::core::{BBox, ScaleMode, Tick, Viewport};
use crate::interaction::InteractionMode;

/// Serializable summary of one artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub kind: ArtistKind,
    pub len: usize,
    /// Padded data-space extent; `None` when no sample lies in the scale domain.
    pub bbox: Option<BBox>,
    /// `#rrggbb`, for artists drawn with a single color.
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub scale: ScaleMode,
    pub label: String,
    /// Data-space limits set by autoscale or explicit limits.
    pub base_limits: (f64, f64),
    /// Data-space limits currently on screen.
    pub visible_limits: (f64, f64),
    pub zoomed: bool,
    pub ticks: Vec<Tick>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesSnapshot {
    pub viewport: Viewport,
    pub title: String,
    pub x: AxisSnapshot,
    pub y: AxisSnapshot,
    pub interaction_mode: InteractionMode,
    /// Keyed by artist id, in insertion order.
    pub artists: IndexMap<String, ArtistSummary>,
}
