//! chart-axes: axis layout engine for tabular charts.
//!
//! Given column roles and a dataset, the crate infers each axis' type,
//! computes its domain, lays out grouped categorical ticks, and splits
//! measures across two main axes with aligned zero lines.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    AxisConfig, AxisDescriptor, ChartSettings, SplitMainAxes, build_axis, build_split_main_axes,
};
pub use error::{AxisError, AxisResult};
