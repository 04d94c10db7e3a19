//! microstop-chart: headless data layer for micro-stop stacked bar charts.
//!
//! Records are grouped into per-date buckets by [`crate::core::aggregate`], and the
//! per-series hidden flags driven by legend clicks live in
//! [`interaction::VisibilityState`]. [`api::MicroStopChart`] ties both
//! together for a renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{MicroStopChart, MicroStopChartConfig};
pub use error::{ChartError, ChartResult};
