//! Aspect-preserving image height resolution.

use crate::model::ImageSource;
use tracing::{debug, warn};

/// Height substituted when an image's natural size is unavailable at
/// measurement time.
pub const FALLBACK_IMAGE_HEIGHT: f64 = 480.0;

/// Outcome of resolving an image height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageHeight {
    /// Height scaled from the delivered image's aspect ratio.
    Scaled(f64),
    /// Fallback height; the image had not been delivered, or its size was
    /// degenerate.
    Fallback(f64),
}

impl ImageHeight {
    /// Height in content units, whichever way it was obtained.
    pub fn get(&self) -> f64 {
        match self {
            ImageHeight::Scaled(h) | ImageHeight::Fallback(h) => *h,
        }
    }

    /// True if the fallback was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageHeight::Fallback(_))
    }
}

/// Scales images to a target width.
///
/// Polls the source exactly once per call and never waits. An image that
/// arrives after the first poll is not observed: layout is fallback-biased
/// for images that are not pre-fetched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageAspectResolver {
    fallback_height: f64,
}

impl ImageAspectResolver {
    /// Resolver with a custom fallback height.
    ///
    /// A negative or non-finite height is replaced by
    /// [`FALLBACK_IMAGE_HEIGHT`].
    pub fn new(fallback_height: f64) -> Self {
        if fallback_height.is_finite() && fallback_height >= 0.0 {
            return Self { fallback_height };
        }
        warn!(
            fallback_height,
            default = FALLBACK_IMAGE_HEIGHT,
            "Invalid fallback image height, using default"
        );
        Self {
            fallback_height: FALLBACK_IMAGE_HEIGHT,
        }
    }

    /// Fallback height used for unresolved images.
    pub fn fallback_height(&self) -> f64 {
        self.fallback_height
    }

    /// Resolve the height of `source` scaled to `target_width`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use campaign_layout::measure::{ImageAspectResolver, ImageHeight};
    /// # use campaign_layout::model::{ImageSize, ImageSource};
    /// let resolver = ImageAspectResolver::default();
    /// let source = ImageSource::ready(ImageSize::new(600.0, 400.0));
    /// assert_eq!(resolver.resolve(&source, 300.0), ImageHeight::Scaled(200.0));
    ///
    /// let pending = ImageSource::pending();
    /// assert_eq!(resolver.resolve(&pending, 300.0), ImageHeight::Fallback(480.0));
    /// ```
    pub fn resolve(&self, source: &ImageSource, target_width: f64) -> ImageHeight {
        let Some(size) = source.poll() else {
            debug!(fallback = self.fallback_height, "Image not delivered, using fallback height");
            return ImageHeight::Fallback(self.fallback_height);
        };

        match size.aspect_ratio() {
            Some(ratio) => ImageHeight::Scaled(target_width.max(0.0) * ratio),
            None => {
                debug!(?size, fallback = self.fallback_height, "Degenerate image size, using fallback height");
                ImageHeight::Fallback(self.fallback_height)
            }
        }
    }

    /// Resolved height as a plain number.
    pub fn resolve_height(&self, source: &ImageSource, target_width: f64) -> f64 {
        self.resolve(source, target_width).get()
    }
}

impl Default for ImageAspectResolver {
    fn default() -> Self {
        Self::new(FALLBACK_IMAGE_HEIGHT)
    }
}
