//! Label width measurement for chart buttons

use std::sync::Arc;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use parking_lot::Mutex;

/// Font system shared between the measuring code and startup loader
pub type SharedFontSystem = Arc<Mutex<FontSystem>>;

/// Button label font size in logical pixels (10pt)
pub const BUTTON_FONT_SIZE: f32 = 13.0;

/// Measures the rendered width of a button label
pub trait TextMetrics {
    fn measure(&self, text: &str) -> f32;
}

/// Estimate with a constant per-character advance
///
/// Used until the system fonts are loaded, and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    advance: f32,
}

impl FixedAdvance {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for FixedAdvance {
    fn default() -> Self {
        // roughly the average advance of a heavy sans at 10pt
        Self::new(BUTTON_FONT_SIZE * 0.62)
    }
}

impl TextMetrics for FixedAdvance {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

/// Shaped measurement through cosmic-text
#[derive(Clone)]
pub struct ShapedMetrics {
    font_system: SharedFontSystem,
    font_size: f32,
}

impl ShapedMetrics {
    pub fn new(font_system: SharedFontSystem) -> Self {
        Self {
            font_system,
            font_size: BUTTON_FONT_SIZE,
        }
    }
}

impl TextMetrics for ShapedMetrics {
    fn measure(&self, text: &str) -> f32 {
        let mut fs = self.font_system.lock();
        let metrics = Metrics::new(self.font_size, self.font_size * 1.3);
        let mut buffer = Buffer::new(&mut fs, metrics);
        // unbounded width so the label never wraps
        buffer.set_size(&mut fs, None, None);

        let attrs = Attrs::new().family(Family::SansSerif).weight(Weight::BLACK);
        buffer.set_text(&mut fs, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut fs, false);

        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_counts_chars() {
        let metrics = FixedAdvance::new(7.0);
        assert_eq!(metrics.measure(""), 0.0);
        assert_eq!(metrics.measure("Ride"), 28.0);
        // multibyte characters count once
        assert_eq!(metrics.measure("Übersicht"), 63.0);
    }

    #[test]
    fn test_default_advance_is_positive() {
        assert!(FixedAdvance::default().measure("W") > 0.0);
    }

    fn shaped(font_system: FontSystem) -> ShapedMetrics {
        ShapedMetrics::new(Arc::new(Mutex::new(font_system)))
    }

    #[test]
    fn test_shaped_without_fonts() {
        let fs = FontSystem::new_with_locale_and_db(
            "en-US".to_string(),
            cosmic_text::fontdb::Database::new(),
        );
        let metrics = shaped(fs);
        assert_eq!(metrics.measure(""), 0.0);

        let short = metrics.measure("Ride");
        let long = metrics.measure("Critical Power");
        assert!(short.is_finite() && short >= 0.0);
        assert!(long >= short);
    }

    #[test]
    fn test_shaped_with_system_fonts() {
        let fs = FontSystem::new();
        if fs.db().faces().next().is_none() {
            // headless machine without fonts
            return;
        }
        let metrics = shaped(fs);
        assert_eq!(metrics.measure(""), 0.0);
        assert!(metrics.measure("Critical Power") > metrics.measure("Ride"));
    }
}
