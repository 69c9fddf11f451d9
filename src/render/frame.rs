use crate::core::Viewport;
use crate::error::{AxisError, AxisResult};
use crate::render::{AxisLine, TickLabel};

/// Backend-agnostic scene for one axis draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<AxisLine>,
    /// Labels in render order: level by level, each along the axis.
    pub labels: Vec<TickLabel>,
}

/// Primitive counts of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub lines: usize,
    pub labels: usize,
    pub hidden_labels: usize,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: AxisLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Labels of one tick level, in order along the axis.
    pub fn level_labels(&self, level: usize) -> impl Iterator<Item = &TickLabel> {
        self.labels.iter().filter(move |l| l.level == level)
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            lines: self.lines.len(),
            labels: self.labels.len(),
            hidden_labels: self.labels.iter().filter(|l| !l.visible).count(),
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.viewport.is_valid() {
            return Err(AxisError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(index) = self.lines.iter().position(|l| !l.is_finite()) {
            return Err(AxisError::InvalidData(format!(
                "axis line {index} has non-finite geometry"
            )));
        }
        if let Some(label) = self.labels.iter().find(|l| !l.is_finite()) {
            return Err(AxisError::InvalidData(format!(
                "tick label `{}` has non-finite placement",
                label.text
            )));
        }
        Ok(())
    }
}
