/// Opaque RGB color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

/// What an axis line marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The axis line itself, parallel to the plot edge.
    Baseline,
    /// A group boundary tick crossing `level`.
    Divider { level: usize },
}

/// One axis segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub kind: LineKind,
    pub stroke_width: f64,
    pub color: Color,
}

impl AxisLine {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.from.0, self.from.1, self.to.0, self.to.1, self.stroke_width]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Horizontal text alignment relative to `TickLabel::x`, before rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// One group label; `(x, y)` is the baseline anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Tick level, 0 nearest the axis line.
    pub level: usize,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Clockwise rotation about the anchor; tilted tick labels are negative.
    pub rotation_deg: f64,
    /// Cleared by label de-collision; hidden labels keep their slot.
    pub visible: bool,
}

impl TickLabel {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.rotation_deg, self.font_size_px]
            .iter()
            .all(|v| v.is_finite())
    }
}
