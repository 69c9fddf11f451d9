//! Draws a categorical [`TickLayout`] into a [`RenderFrame`].
//!
//! Labels are placed level by level, nearest the axis line first, then handed
//! to the axis component for de-collision in the same order they were
//! emitted.

use tracing::{debug, trace};

use crate::api::AxisDescriptor;
use crate::core::{AxisScale, BandScale, LabelNode, LabelRect, TickLevel, Viewport};
use crate::error::{AxisError, AxisResult};
use crate::render::{
    AxisLine, Color, HeuristicTextMeasurer, LineKind, RenderFrame, TextHAlign, TextMeasurer,
    TickLabel,
};

/// Side of the plot area the axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisEdge {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl AxisEdge {
    const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// +1 when levels grow towards larger pixel coordinates.
    const fn outward(self) -> f64 {
        match self {
            Self::Bottom | Self::Right => 1.0,
            Self::Top | Self::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub font_size_px: f64,
    pub label_color: Color,
    pub line_color: Color,
    pub stroke_width: f64,
    /// Gap between a level's start and its labels.
    pub label_padding_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            font_size_px: 11.0,
            label_color: Color::rgb(0.2, 0.2, 0.2),
            line_color: Color::rgb(0.6, 0.6, 0.6),
            stroke_width: 1.0,
            label_padding_px: 4.0,
        }
    }
}

/// Renders ordinal axes with grouped, possibly rotated, labels.
#[derive(Debug, Clone, Default)]
pub struct MultiLevelAxisRenderer<M = HeuristicTextMeasurer> {
    measurer: M,
    style: AxisStyle,
    edge: AxisEdge,
}

impl MultiLevelAxisRenderer<HeuristicTextMeasurer> {
    #[must_use]
    pub fn new(edge: AxisEdge) -> Self {
        Self {
            measurer: HeuristicTextMeasurer,
            style: AxisStyle::default(),
            edge,
        }
    }
}

impl<M: TextMeasurer> MultiLevelAxisRenderer<M> {
    #[must_use]
    pub fn with_measurer<N: TextMeasurer>(self, measurer: N) -> MultiLevelAxisRenderer<N> {
        MultiLevelAxisRenderer {
            measurer,
            style: self.style,
            edge: self.edge,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn edge(&self) -> AxisEdge {
        self.edge
    }

    /// Lays out `axis` along `range` with its line at `axis_position`
    /// (y for horizontal edges, x for vertical ones).
    ///
    /// Labels that collide or leave the viewport come back with
    /// `visible == false`.
    pub fn render(
        &self,
        axis: &AxisDescriptor,
        range: (f64, f64),
        axis_position: f64,
        viewport: Viewport,
    ) -> AxisResult<RenderFrame> {
        if !viewport.is_valid() {
            return Err(AxisError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let Some(layout) = axis.component.layout() else {
            return Err(AxisError::InvalidData(
                "axis has no categorical tick layout".to_owned(),
            ));
        };
        let AxisScale::Band(scale) = axis.scale(range)? else {
            return Err(AxisError::InvalidData(
                "categorical layout needs a band scale".to_owned(),
            ));
        };

        let visible_area = LabelRect::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        );
        let mut frame = RenderFrame::new(viewport).with_line(self.along(
            range.0,
            range.1,
            axis_position,
        ));

        for (index, level) in layout.levels.iter().enumerate() {
            let first_label = frame.labels.len();
            let rotation = axis.component.rotation(index).degrees();
            let mut placed =
                self.place_level(index, level, &scale, axis_position, rotation, &mut frame);
            axis.decorate(index, &mut placed, visible_area);
            for (label, node) in frame.labels[first_label..].iter_mut().zip(&placed) {
                label.visible = !node.hidden;
            }
        }

        let stats = frame.stats();
        debug!(
            levels = layout.levels.len(),
            lines = stats.lines,
            labels = stats.labels,
            hidden = stats.hidden_labels,
            "rendered multi-level axis"
        );
        Ok(frame)
    }

    fn place_level(
        &self,
        index: usize,
        level: &TickLevel,
        scale: &BandScale,
        axis_position: f64,
        rotation: f64,
        frame: &mut RenderFrame,
    ) -> Vec<PlacedLabel> {
        let outward = self.edge.outward();
        let level_start = axis_position + outward * level.offset;
        let level_end = axis_position + outward * (level.offset + level.size);

        let mut labels = Vec::with_capacity(level.groups.len());
        let mut last_end = None;
        for group in &level.groups {
            let (Some(first), Some(last)) = (group.domain.first(), group.domain.last()) else {
                continue;
            };
            let (Some(start), Some(end)) = (scale.band_start(first), scale.band_end(last)) else {
                trace!(group = %group.text, "group keys missing from band scale");
                continue;
            };
            frame.lines.push(self.across(index, start, level_start, level_end));
            last_end = Some(end);

            if group.text.is_empty() {
                continue;
            }
            let (label, placed) =
                self.label(&group.text, index, (start + end) / 2.0, level_start, rotation);
            frame.labels.push(label);
            labels.push(placed);
        }
        if let Some(end) = last_end {
            frame.lines.push(self.across(index, end, level_start, level_end));
        }
        labels
    }

    fn label(
        &self,
        text: &str,
        level: usize,
        center: f64,
        level_start: f64,
        rotation: f64,
    ) -> (TickLabel, PlacedLabel) {
        let style = &self.style;
        let font = style.font_size_px;
        let (width, height) = self.measurer.measure(text, font);
        let outward = self.edge.outward();
        let near = level_start + outward * style.label_padding_px;

        let (x, y, h_align, local) = if self.edge.is_horizontal() {
            if rotation == 0.0 {
                let baseline = if outward > 0.0 { near + height } else { near };
                (
                    center,
                    baseline,
                    TextHAlign::Center,
                    LabelRect::new(-width / 2.0, -height, width, height),
                )
            } else {
                // Tilted labels end at the anchor and read upwards.
                let (h_align, rect) = if outward > 0.0 {
                    (
                        TextHAlign::Right,
                        LabelRect::new(-width, -height / 2.0, width, height),
                    )
                } else {
                    (
                        TextHAlign::Left,
                        LabelRect::new(0.0, -height / 2.0, width, height),
                    )
                };
                (center, near, h_align, rect.rotated_bounds(-rotation, 0.0, 0.0))
            }
        } else {
            let baseline = center + height / 2.0;
            if outward > 0.0 {
                (
                    near,
                    baseline,
                    TextHAlign::Left,
                    LabelRect::new(0.0, -height, width, height),
                )
            } else {
                (
                    near,
                    baseline,
                    TextHAlign::Right,
                    LabelRect::new(-width, -height, width, height),
                )
            }
        };

        let label = TickLabel {
            text: text.to_owned(),
            x,
            y,
            level,
            font_size_px: font,
            color: style.label_color,
            h_align,
            rotation_deg: -rotation,
            visible: true,
        };
        let placed = PlacedLabel {
            translation: (x, y),
            local,
            hidden: false,
        };
        (label, placed)
    }

    /// Baseline running along the axis.
    fn along(&self, from: f64, to: f64, at: f64) -> AxisLine {
        self.line(LineKind::Baseline, (from, at), (to, at))
    }

    /// Divider crossing `level` at `at`.
    fn across(&self, level: usize, at: f64, from: f64, to: f64) -> AxisLine {
        self.line(LineKind::Divider { level }, (at, from), (at, to))
    }

    /// Builds a line from `(along, across)` coordinates.
    fn line(&self, kind: LineKind, from: (f64, f64), to: (f64, f64)) -> AxisLine {
        let swap = |(along, across): (f64, f64)| {
            if self.edge.is_horizontal() {
                (along, across)
            } else {
                (across, along)
            }
        };
        AxisLine {
            from: swap(from),
            to: swap(to),
            kind,
            stroke_width: self.style.stroke_width,
            color: self.style.line_color,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PlacedLabel {
    translation: (f64, f64),
    local: LabelRect,
    hidden: bool,
}

impl LabelNode for PlacedLabel {
    fn translation(&self) -> (f64, f64) {
        self.translation
    }

    fn local_bounds(&self) -> LabelRect {
        self.local
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilted_bottom_label_hangs_below_anchor() {
        let renderer = MultiLevelAxisRenderer::new(AxisEdge::Bottom);
        let (text, placed) = renderer.label("January", 0, 50.0, 100.0, 45.0);
        assert_eq!(text.h_align, TextHAlign::Right);
        assert!((text.rotation_deg + 45.0).abs() < 1e-9);
        let bounds = placed.screen_bounds();
        assert!(bounds.x + bounds.width <= 50.0 + 11.0);
        assert!(bounds.y >= 100.0 - 11.0);
    }

    #[test]
    fn left_labels_end_before_the_axis() {
        let renderer = MultiLevelAxisRenderer::new(AxisEdge::Left);
        let (text, placed) = renderer.label("abc", 1, 40.0, 80.0, 0.0);
        assert_eq!(text.level, 1);
        assert_eq!(text.h_align, TextHAlign::Right);
        let bounds = placed.screen_bounds();
        assert!(bounds.x + bounds.width <= 80.0);
    }
}
