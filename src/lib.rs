//! chart-axes: axis layout core for interactive charts.
//!
//! Decides which ticks each axis shows, how their labels are formatted and
//! placed, how much room rotated labels need and which labels to cull.
//! Drawing is delegated to an [`render::AxisRenderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxesConfig, AxisFacade};
pub use error::{AxisError, AxisResult};
