//! Wrapped text height measurement.
//!
//! Heights are derived from per-font metrics rather than real glyph shaping:
//! each font has an average advance and a line height, both expressed as
//! multiples of the point size. Widths of individual characters come from
//! `unicode-width`, so CJK and other wide glyphs take two advances.

use std::collections::HashMap;
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Name of the font substituted for unknown font names.
pub const SYSTEM_FONT: &str = "System";

/// A font name plus point size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family/face name, e.g. "Helvetica Neue Bold".
    pub name: String,
    /// Point size.
    pub size: f64,
}

impl FontDescriptor {
    /// Create a font descriptor.
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Per-font metrics in em units (multiples of the point size).
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct FontMetrics {
    /// Average horizontal advance of one narrow glyph.
    pub advance: f64,
    /// Distance between consecutive baselines.
    pub line_height: f64,
}

impl FontMetrics {
    /// Create font metrics.
    pub const fn new(advance: f64, line_height: f64) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

/// Registry of known fonts.
///
/// Lookups ignore surrounding whitespace in the requested name. Unknown
/// names resolve to [`SYSTEM_FONT`].
#[derive(Debug, Clone)]
pub struct FontBook {
    fonts: HashMap<String, FontMetrics>,
    system: FontMetrics,
}

impl FontBook {
    /// Font book with only the system font.
    pub fn empty() -> Self {
        Self {
            fonts: HashMap::new(),
            system: FontMetrics::new(0.52, 1.2),
        }
    }

    /// Register (or replace) a font.
    pub fn insert(&mut self, name: impl Into<String>, metrics: FontMetrics) {
        self.fonts.insert(name.into().trim().to_string(), metrics);
    }

    /// True if `name` is a registered font.
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name.trim())
    }

    /// Metrics for `name`, substituting the system font when unknown.
    pub fn resolve(&self, name: &str) -> FontMetrics {
        match self.fonts.get(name.trim()) {
            Some(metrics) => *metrics,
            None => {
                debug!(font = name, fallback = SYSTEM_FONT, "Unknown font, using system font");
                self.system
            }
        }
    }
}

impl Default for FontBook {
    /// The faces used by campaign cards plus a few common companions.
    fn default() -> Self {
        let mut book = Self::empty();
        book.insert(SYSTEM_FONT, book.system);
        book.insert("Hoefler Text", FontMetrics::new(0.48, 1.2));
        book.insert("Helvetica Neue", FontMetrics::new(0.52, 1.2));
        book.insert("Helvetica Neue Bold", FontMetrics::new(0.58, 1.2));
        book.insert("Menlo", FontMetrics::new(0.6, 1.17));
        book
    }
}

/// Measures the height of text wrapped to a fixed width.
pub trait TextMeasurer {
    /// Height needed to draw `text` in `font`, word-wrapped at `width`, with
    /// no line limit.
    ///
    /// Never fails. Empty text measures one line.
    fn measure(&self, text: &str, font: &FontDescriptor, width: f64) -> f64;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontDescriptor, width: f64) -> f64 {
        (**self).measure(text, font, width)
    }
}

/// [`TextMeasurer`] driven by [`FontBook`] metrics.
///
/// # Examples
///
/// ```
/// # use campaign_layout::measure::{FontDescriptor, GlyphMetricsMeasurer, TextMeasurer};
/// let measurer = GlyphMetricsMeasurer::default();
/// let font = FontDescriptor::new("Menlo", 10.0);
/// // 6 units per glyph at 10pt, so "hello world" needs two lines at width 40.
/// let height = measurer.measure("hello world", &font, 40.0);
/// assert!((height - 2.0 * 11.7).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GlyphMetricsMeasurer {
    fonts: FontBook,
}

impl GlyphMetricsMeasurer {
    /// Create a measurer over the given fonts.
    pub fn new(fonts: FontBook) -> Self {
        Self { fonts }
    }

    /// Fonts known to this measurer.
    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    /// Number of wrapped lines for `text` in `font` at `width`.
    pub fn line_count(&self, text: &str, font: &FontDescriptor, width: f64) -> usize {
        let metrics = self.fonts.resolve(&font.name);
        let glyph = metrics.advance * font.size;
        let columns = if glyph > 0.0 && width.is_finite() && width > 0.0 {
            ((width / glyph).floor() as usize).max(1)
        } else {
            1
        };
        wrapped_line_count(text, columns)
    }
}

impl TextMeasurer for GlyphMetricsMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor, width: f64) -> f64 {
        let metrics = self.fonts.resolve(&font.name);
        let lines = self.line_count(text, font, width);
        lines as f64 * metrics.line_height * font.size
    }
}

/// Greedy word-wrap line count at `columns` cells per line.
///
/// Newlines start new paragraphs; an empty paragraph still takes one line.
fn wrapped_line_count(text: &str, columns: usize) -> usize {
    text.split('\n')
        .map(|paragraph| paragraph_line_count(paragraph, columns))
        .sum()
}

fn paragraph_line_count(paragraph: &str, columns: usize) -> usize {
    let mut lines = 1;
    let mut used = 0;

    for word in paragraph.split_whitespace() {
        let word_width = word.width();
        let needed = if used == 0 {
            word_width
        } else {
            used + 1 + word_width
        };

        if needed <= columns {
            used = needed;
            continue;
        }

        if used > 0 {
            lines += 1;
            used = 0;
        }

        if word_width <= columns {
            used = word_width;
            continue;
        }

        // Overlong word: break at the glyph that overflows.
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used > 0 && used + ch_width > columns {
                lines += 1;
                used = 0;
            }
            used += ch_width;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menlo(size: f64) -> FontDescriptor {
        FontDescriptor::new("Menlo", size)
    }

    mod line_wrapping {
        use super::*;

        #[test]
        fn empty_text_is_one_line() {
            assert_eq!(wrapped_line_count("", 10), 1);
        }

        #[test]
        fn whitespace_only_is_one_line() {
            assert_eq!(wrapped_line_count("   ", 10), 1);
        }

        #[test]
        fn short_text_fits_one_line() {
            assert_eq!(wrapped_line_count("hello", 10), 1);
        }

        #[test]
        fn exact_fit_does_not_wrap() {
            assert_eq!(wrapped_line_count("hello world", 11), 1);
        }

        #[test]
        fn wraps_at_word_boundary() {
            assert_eq!(wrapped_line_count("hello world", 10), 2);
        }

        #[test]
        fn newlines_start_paragraphs() {
            assert_eq!(wrapped_line_count("a\nb\n\nc", 10), 4);
        }

        #[test]
        fn overlong_word_is_broken() {
            // 25 glyphs at 10 per line
            assert_eq!(wrapped_line_count(&"x".repeat(25), 10), 3);
        }

        #[test]
        fn overlong_word_after_short_word_starts_new_line() {
            // "ab" | "xxxxxxxxxx" | "xxxxx"
            let text = format!("ab {}", "x".repeat(15));
            assert_eq!(wrapped_line_count(&text, 10), 3);
        }

        #[test]
        fn wide_glyphs_take_two_columns() {
            // Six CJK glyphs are 12 columns wide.
            assert_eq!(wrapped_line_count("日本語日本語", 10), 2);
        }

        #[test]
        fn single_column_still_terminates() {
            assert_eq!(wrapped_line_count("abc de", 1), 5);
        }
    }

    mod font_book {
        use super::*;

        #[test]
        fn known_font_resolves_to_its_metrics() {
            let book = FontBook::default();
            assert_eq!(book.resolve("Menlo"), FontMetrics::new(0.6, 1.17));
        }

        #[test]
        fn trailing_whitespace_in_name_is_ignored() {
            let book = FontBook::default();
            assert!(book.contains("Helvetica Neue Bold "));
            assert_eq!(
                book.resolve("Helvetica Neue Bold "),
                book.resolve("Helvetica Neue Bold")
            );
        }

        #[test]
        fn unknown_font_resolves_to_system() {
            let book = FontBook::default();
            assert!(!book.contains("Comic Sans"));
            assert_eq!(book.resolve("Comic Sans"), book.resolve(SYSTEM_FONT));
        }

        #[test]
        fn insert_replaces_existing_font() {
            let mut book = FontBook::default();
            book.insert("Menlo", FontMetrics::new(1.0, 2.0));
            assert_eq!(book.resolve("Menlo"), FontMetrics::new(1.0, 2.0));
        }
    }

    mod measurement {
        use super::*;

        #[test]
        fn empty_text_measures_one_line_height() {
            let measurer = GlyphMetricsMeasurer::default();
            let height = measurer.measure("", &menlo(10.0), 300.0);
            assert!((height - 11.7).abs() < 1e-9);
        }

        #[test]
        fn height_grows_with_wrapped_lines() {
            let measurer = GlyphMetricsMeasurer::default();
            let text = "one two three four five six seven eight nine ten";
            let wide = measurer.measure(text, &menlo(10.0), 1000.0);
            let narrow = measurer.measure(text, &menlo(10.0), 60.0);
            assert!(narrow > wide);
        }

        #[test]
        fn unknown_font_never_fails() {
            let measurer = GlyphMetricsMeasurer::default();
            let font = FontDescriptor::new("No Such Font", 12.0);
            let height = measurer.measure("text", &font, 200.0);
            assert!((height - 1.2 * 12.0).abs() < 1e-9);
        }

        #[test]
        fn non_positive_width_is_treated_as_one_column() {
            let measurer = GlyphMetricsMeasurer::default();
            assert_eq!(measurer.line_count("ab", &menlo(10.0), 0.0), 2);
            assert_eq!(measurer.line_count("ab", &menlo(10.0), -5.0), 2);
            assert_eq!(measurer.line_count("ab", &menlo(10.0), f64::NAN), 2);
        }

        #[test]
        fn measurer_works_through_reference() {
            let measurer = GlyphMetricsMeasurer::default();
            let by_ref: &dyn TextMeasurer = &measurer;
            assert_eq!(
                by_ref.measure("x", &menlo(10.0), 100.0),
                measurer.measure("x", &menlo(10.0), 100.0)
            );
        }
    }
}
