mod axis_config;
mod axis_factory;
mod dual_axis;
mod settings;

pub use axis_config::AxisConfig;
pub use axis_factory::{AxisComponent, AxisDescriptor, build_axis};
pub use dual_axis::{SplitMainAxes, build_split_main_axes, build_split_main_axes_with};
pub use settings::{AxisMemo, ChartSettings, ZoomTransform};
