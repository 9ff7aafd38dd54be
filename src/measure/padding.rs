//! Padded label measurement.

use super::text::{FontDescriptor, TextMeasurer};

/// Wraps a [`TextMeasurer`] to account for uniform padding on all edges.
///
/// Text is wrapped inside the padded rectangle, so the inner width is
/// `width - 2 * padding` and the measured height grows by `2 * padding`.
#[derive(Debug, Clone)]
pub struct PaddedMeasurer<M> {
    inner: M,
    padding: f64,
}

impl<M: TextMeasurer> PaddedMeasurer<M> {
    /// Wrap `inner` with `padding` on every edge. Negative padding is treated
    /// as zero.
    pub fn new(inner: M, padding: f64) -> Self {
        Self {
            inner,
            padding: padding.max(0.0),
        }
    }

    /// Padding applied to each edge.
    pub fn padding(&self) -> f64 {
        self.padding
    }
}

impl<M: TextMeasurer> TextMeasurer for PaddedMeasurer<M> {
    fn measure(&self, text: &str, font: &FontDescriptor, width: f64) -> f64 {
        let inner_width = width - 2.0 * self.padding;
        self.inner.measure(text, font, inner_width) + 2.0 * self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::GlyphMetricsMeasurer;
    use std::cell::Cell;

    struct RecordingMeasurer {
        last_width: Cell<f64>,
    }

    impl TextMeasurer for RecordingMeasurer {
        fn measure(&self, _text: &str, _font: &FontDescriptor, width: f64) -> f64 {
            self.last_width.set(width);
            20.0
        }
    }

    #[test]
    fn adds_padding_to_both_edges() {
        let inner = RecordingMeasurer {
            last_width: Cell::new(0.0),
        };
        let padded = PaddedMeasurer::new(inner, 8.0);

        let height = padded.measure("text", &FontDescriptor::new("Menlo", 10.0), 200.0);

        assert_eq!(height, 36.0);
        assert_eq!(padded.inner.last_width.get(), 184.0);
    }

    #[test]
    fn zero_padding_is_transparent() {
        let font = FontDescriptor::new("Menlo", 10.0);
        let plain = GlyphMetricsMeasurer::default();
        let padded = PaddedMeasurer::new(GlyphMetricsMeasurer::default(), 0.0);

        assert_eq!(
            padded.measure("a few words here", &font, 50.0),
            plain.measure("a few words here", &font, 50.0)
        );
    }

    #[test]
    fn negative_padding_clamps_to_zero() {
        let padded = PaddedMeasurer::new(GlyphMetricsMeasurer::default(), -4.0);
        assert_eq!(padded.padding(), 0.0);
    }

    #[test]
    fn padding_wider_than_width_still_measures() {
        let font = FontDescriptor::new("Menlo", 10.0);
        let padded = PaddedMeasurer::new(GlyphMetricsMeasurer::default(), 100.0);

        let height = padded.measure("ab", &font, 50.0);

        // Inner width collapses to one column: two lines plus padding.
        assert!((height - (2.0 * 11.7 + 200.0)).abs() < 1e-9);
    }
}
