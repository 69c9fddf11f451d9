mod frame;
mod measure;
mod multi_level_axis;
mod null_renderer;
mod primitives;

pub use frame::{FrameStats, RenderFrame};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use multi_level_axis::{AxisEdge, AxisStyle, MultiLevelAxisRenderer};
pub use null_renderer::NullRenderer;
pub use primitives::{AxisLine, Color, LineKind, TextHAlign, TickLabel};

use crate::error::AxisResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully laid out `RenderFrame`; hidden labels stay in the
/// frame with `visible == false` so hosts can toggle them without relayout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()>;
}
