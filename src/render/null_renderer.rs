use crate::error::AxisResult;
use crate::render::{FrameStats, RenderFrame, Renderer};

/// Headless backend that validates frames and records what it was given.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last: Option<FrameStats>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()> {
        frame.validate()?;
        self.last = Some(frame.stats());
        Ok(())
    }
}
