//! Content measurement: wrapped text and aspect-scaled images.
//!
//! Both measurers are total: bad inputs (unknown fonts, images that have
//! not arrived) degrade to documented defaults instead of failing.

pub mod image;
pub mod padding;
pub mod text;

pub use image::{ImageAspectResolver, ImageHeight, FALLBACK_IMAGE_HEIGHT};
pub use padding::PaddedMeasurer;
pub use text::{FontBook, FontDescriptor, FontMetrics, GlyphMetricsMeasurer, TextMeasurer, SYSTEM_FONT};
