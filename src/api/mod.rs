//! Public orchestration surface: [`Axes`] and its configuration, snapshot
//! and plugin plumbing.

mod artist_controller;
mod axes;
mod axes_config;
mod axes_snapshot;
mod interaction_controller;
mod json_contract;
mod limits_controller;
mod plugin_dispatch;
mod plugin_registry;
mod scale_controller;
mod snapshot_controller;
mod tick_controller;
mod validation;

pub use axes::{Axes, ViewLimits};
pub use axes_config::AxesConfig;
pub use axes_snapshot::{ArtistSummary, AxesSnapshot, AxisSnapshot};
pub use json_contract::{AXES_SNAPSHOT_JSON_SCHEMA_V1, AxesSnapshotJsonContractV1};
