//! plotgl-rs: viewport and interaction core for 2-D plots hosted in a 3-D
//! scene.
//!
//! Data coordinates are mapped into a per-axis view space (identity on linear
//! axes, `log10` on log axes) and normalized through [`core::Transform`]. The
//! [`api::Axes`] orchestrator keeps artists, view limits, ticks and the
//! box-zoom gesture consistent and talks to the host through
//! [`render::SceneHost`].

pub mod api;
pub mod artist;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Axes, AxesConfig};
pub use error::{PlotError, PlotResult};
