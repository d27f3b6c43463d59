//! Optional feature modules live here.
//!
//! Keep extensions decoupled from core paths.

mod plugins;

pub use plugins::{AxesContext, AxesEvent, AxesPlugin};
