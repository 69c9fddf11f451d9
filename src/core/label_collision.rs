//! Greedy suppression of overlapping tick labels.
//!
//! Runs after labels have been placed: each label's screen rectangle is
//! compared against the labels kept so far, in render order, and hidden when it
//! collides or leaves the visible area. Earlier labels always win.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Minimum gap kept between the right edges of consecutive rotated labels.
pub const ROTATED_LABEL_GAP_PX: f64 = 14.0;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LabelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Touching edges count as overlap.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.x <= other.x + other.width
            && other.x <= self.x + self.width
            && self.y <= other.y + other.height
            && other.y <= self.y + self.height
    }

    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.x >= self.x
            && other.x + other.width <= self.x + self.width
            && other.y >= self.y
            && other.y + other.height <= self.y + self.height
    }

    /// Bounding box of this rectangle rotated by `degrees` about `(ox, oy)`.
    #[must_use]
    pub fn rotated_bounds(self, degrees: f64, ox: f64, oy: f64) -> Self {
        if degrees == 0.0 {
            return self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let corners = [
            (self.x, self.y),
            (self.x + self.width, self.y),
            (self.x, self.y + self.height),
            (self.x + self.width, self.y + self.height),
        ];
        let (mut x0, mut y0) = (f64::INFINITY, f64::INFINITY);
        let (mut x1, mut y1) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for (x, y) in corners {
            let (dx, dy) = (x - ox, y - oy);
            let rx = ox + dx * cos - dy * sin;
            let ry = oy + dx * sin + dy * cos;
            x0 = x0.min(rx);
            y0 = y0.min(ry);
            x1 = x1.max(rx);
            y1 = y1.max(ry);
        }
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// A placed tick label that can be measured and hidden.
pub trait LabelNode {
    /// Offset applied to the label's local bounds when drawn.
    fn translation(&self) -> (f64, f64);

    /// Bounds in the label's own coordinates, rotation included.
    fn local_bounds(&self) -> LabelRect;

    /// Hidden labels keep their place in the sequence but are not drawn.
    fn set_hidden(&mut self, hidden: bool);

    fn screen_bounds(&self) -> LabelRect {
        let (dx, dy) = self.translation();
        self.local_bounds().translate(dx, dy)
    }
}

/// For rotated labels only the right edges are compared, since the tilted
/// boxes overlap even when the text does not.
fn rotated_labels_overlap(kept: LabelRect, next: LabelRect) -> bool {
    kept.x + kept.width + ROTATED_LABEL_GAP_PX > next.x + next.width
}

/// Hides labels that overlap an earlier visible label or fall outside
/// `visible_area`, processing `labels` in order. A lone label is never hidden.
///
/// Returns the number of hidden labels.
pub fn hide_overlapping_labels<L: LabelNode>(
    labels: &mut [L],
    rotated: bool,
    visible_area: LabelRect,
) -> usize {
    if let [only] = labels {
        only.set_hidden(false);
        return 0;
    }

    let mut kept: Vec<LabelRect> = Vec::with_capacity(labels.len());
    let mut hidden_count = 0;
    for label in labels.iter_mut() {
        let rect = label.screen_bounds();
        let overlap = kept.iter().any(|previous| {
            if rotated {
                rotated_labels_overlap(*previous, rect)
            } else {
                previous.overlaps(rect)
            }
        });
        let hidden = overlap || !visible_area.contains(rect);
        label.set_hidden(hidden);
        if hidden {
            hidden_count += 1;
        } else {
            kept.push(rect);
        }
    }

    trace!(
        total = labels.len(),
        hidden = hidden_count,
        rotated,
        "tick label de-collision"
    );
    hidden_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Label {
        rect: LabelRect,
        hidden: bool,
    }

    impl LabelNode for Label {
        fn translation(&self) -> (f64, f64) {
            (0.0, 0.0)
        }

        fn local_bounds(&self) -> LabelRect {
            self.rect
        }

        fn set_hidden(&mut self, hidden: bool) {
            self.hidden = hidden;
        }
    }

    fn label(x: f64, width: f64) -> Label {
        Label {
            rect: LabelRect::new(x, 0.0, width, 10.0),
            hidden: false,
        }
    }

    #[test]
    fn rotated_labels_need_right_edge_gap() {
        let mut labels = vec![label(0.0, 10.0), label(5.0, 10.0), label(30.0, 10.0)];
        let area = LabelRect::new(0.0, 0.0, 100.0, 20.0);
        let hidden = hide_overlapping_labels(&mut labels, true, area);
        assert_eq!(hidden, 1);
        assert!(labels[1].hidden);
        assert!(!labels[2].hidden);
    }

    #[test]
    fn lone_label_survives_overflow() {
        let mut labels = vec![label(-50.0, 500.0)];
        let area = LabelRect::new(0.0, 0.0, 100.0, 20.0);
        assert_eq!(hide_overlapping_labels(&mut labels, false, area), 0);
        assert!(!labels[0].hidden);
    }

    #[test]
    fn quarter_turn_swaps_width_and_height() {
        let rect = LabelRect::new(0.0, 0.0, 40.0, 10.0).rotated_bounds(90.0, 0.0, 0.0);
        assert!((rect.width - 10.0).abs() <= 1e-9);
        assert!((rect.height - 40.0).abs() <= 1e-9);
    }
}
