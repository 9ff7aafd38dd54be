//! Asynchronously delivered mood images.
//!
//! The layout engine never sees pixels, only the natural size of an image.
//! A producer (network loader, decoder thread) delivers sizes through an
//! [`ImageSender`]; the layout side holds the matching [`ImageSource`] and
//! polls it once, synchronously, during measurement.

use std::cell::Cell;
use std::fmt;
use std::sync::mpsc::{self, Receiver, SendError, Sender};

/// Natural size of a decoded image, in content units.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ImageSize {
    /// Natural width.
    pub width: f64,
    /// Natural height.
    pub height: f64,
}

impl ImageSize {
    /// Create a new image size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Height-to-width ratio, or `None` for degenerate sizes.
    ///
    /// Zero, negative and non-finite dimensions have no usable aspect ratio.
    ///
    /// # Examples
    ///
    /// ```
    /// # use campaign_layout::model::ImageSize;
    /// assert_eq!(ImageSize::new(200.0, 100.0).aspect_ratio(), Some(0.5));
    /// assert_eq!(ImageSize::new(0.0, 100.0).aspect_ratio(), None);
    /// ```
    pub fn aspect_ratio(&self) -> Option<f64> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Some(self.height / self.width)
        } else {
            None
        }
    }
}

/// Producer half of an image subscription.
///
/// Can be moved to a loader thread. Dropping it without sending leaves the
/// source permanently unresolved.
#[derive(Debug, Clone)]
pub struct ImageSender {
    tx: Sender<ImageSize>,
}

impl ImageSender {
    /// Deliver a decoded image size.
    ///
    /// # Errors
    ///
    /// Returns the size back if the subscription was already released.
    pub fn deliver(&self, size: ImageSize) -> Result<(), SendError<ImageSize>> {
        self.tx.send(size)
    }
}

/// Consumer half of an image subscription.
///
/// One-shot: the first [`poll`](Self::poll) drains every size delivered so
/// far, keeps the last one, and drops the receiver. Deliveries after that
/// point are rejected at the sender. The settled value is remembered, so
/// later layout passes at other widths reuse it without re-subscribing.
pub struct ImageSource {
    receiver: Cell<Option<Receiver<ImageSize>>>,
    settled: Cell<Option<ImageSize>>,
}

impl ImageSource {
    /// Open a new subscription.
    pub fn channel() -> (ImageSender, ImageSource) {
        let (tx, rx) = mpsc::channel();
        (
            ImageSender { tx },
            ImageSource {
                receiver: Cell::new(Some(rx)),
                settled: Cell::new(None),
            },
        )
    }

    /// A source whose image was pre-fetched and is available immediately.
    pub fn ready(size: ImageSize) -> Self {
        let (sender, source) = Self::channel();
        // The receiver is alive, so delivery cannot fail.
        let _ = sender.deliver(size);
        source
    }

    /// A source that never delivers.
    pub fn pending() -> Self {
        Self::channel().1
    }

    /// Poll the subscription once and release it.
    ///
    /// Returns the last size delivered before the first poll, or `None` if
    /// nothing had arrived by then.
    pub fn poll(&self) -> Option<ImageSize> {
        if let Some(rx) = self.receiver.take() {
            self.settled.set(rx.try_iter().last());
        }
        self.settled.get()
    }

    /// True once the subscription has been polled and dropped.
    pub fn is_released(&self) -> bool {
        // Cell has no borrow-free `is_some`; swap out and back.
        let rx = self.receiver.take();
        let released = rx.is_none();
        self.receiver.set(rx);
        released
    }
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageSource")
            .field("released", &self.is_released())
            .field("settled", &self.settled.get())
            .finish()
    }
}
