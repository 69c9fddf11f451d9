pub mod axis_type;
pub mod domain;
pub mod label_collision;
pub mod origin_alignment;
pub mod padding;
pub mod scale;
pub mod splitter;
pub mod tick_layout;
pub mod types;
pub mod value_format;

pub use axis_type::{AxisRole, AxisType, infer_axis_type};
pub use domain::{
    CROSS_VALUE, Domain, DomainFunction, LinearDomain, MAIN_VALUE, OrdinalDomain, TimeDomain,
    minimum_gap,
};
pub use label_collision::{
    LabelNode, LabelRect, ROTATED_LABEL_GAP_PX, hide_overlapping_labels,
};
pub use origin_alignment::{domain_match_origins, match_extent_origins, origin_ratio};
pub use padding::{PadUnit, PaddingMode, PaddingStrategy};
pub use scale::{AxisScale, BandScale, LinearScale, ScaleKind, TimeScale};
pub use splitter::{SplitAssignment, SplitData, SplitStrategy, split, split_with};
pub use tick_layout::{
    LabelRotation, TickGroup, TickLayout, TickLevel, TickSizeInner, group_ticks, level_geometry,
};
pub use types::{
    COMPOSITE_KEY_DELIMITER, ColumnDescriptor, ColumnType, Datum, Extent, Orientation, Row,
    Series, Value, Viewport, flatten_rows, row,
};
pub use value_format::{
    AxisValue, LabelFunction, TickFormat, format_grouped_decimal, format_time_tick,
    precision_for_span,
};
