/// Estimates label extents before a real text backend is involved.
pub trait TextMeasurer {
    /// Returns `(width, height)` in pixels.
    fn measure(&self, text: &str, font_size_px: f64) -> (f64, f64);
}

/// Average glyph width of 0.6em, height of 1em.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> (f64, f64) {
        let width = 0.6 * font_size_px * text.chars().count() as f64;
        (width, font_size_px)
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f64) -> (f64, f64),
{
    fn measure(&self, text: &str, font_size_px: f64) -> (f64, f64) {
        self(text, font_size_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_counts_chars_not_bytes() {
        let (w, h) = HeuristicTextMeasurer.measure("Zürich", 10.0);
        assert!((w - 36.0).abs() < 1e-9);
        assert!((h - 10.0).abs() < 1e-9);
    }
}
