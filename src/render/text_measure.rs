/// Measures rendered text width; real backends plug in shaping here.
pub trait TextMeasurer {
    fn measure_width(&self, text: &str, font_size_px: f64) -> f64;
}

/// Average-glyph heuristic (0.6em per character) for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_width(&self, text: &str, font_size_px: f64) -> f64 {
        0.6 * font_size_px * text.chars().count() as f64
    }
}
