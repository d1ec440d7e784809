//! chart-markers: triangle markers for financial charts.
//!
//! A marker is laid out once from a pixel point and a per-datum style, then
//! emitted either as a declarative polygon node (`render`) or as imperative
//! drawing calls against a 2D context (`draw_on_context`).

pub mod config;
pub mod core;
pub mod error;
pub mod markers;
pub mod render;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use markers::{MarkerDirection, StyleValue, TriangleMarkerStyle};
