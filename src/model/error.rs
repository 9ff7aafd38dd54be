//! Error types for the campaign layout engine.
//!
//! Errors are split by who can act on them, using `thiserror` for structured
//! variants that compose through `From` and `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error for the command-line front end
//!   - [`InputError`] - reading a campaign catalog file
//!   - [`ConfigError`](crate::config::ConfigError) - reading the config file
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup
//!   - [`LayoutError`] - misuse of the layout engine
//!
//! # What is *not* an error
//!
//! Content measurement never fails. An unknown font falls back to the system
//! default font and an image that has not arrived yet falls back to
//! [`FALLBACK_IMAGE_HEIGHT`](crate::measure::FALLBACK_IMAGE_HEIGHT). Both are
//! logged at `debug` level and absorbed, so a layout can always be produced.
//! Only contract violations (bad index, querying before preparing) surface
//! as [`LayoutError`].

use std::path::PathBuf;
use thiserror::Error;

/// Contract violations when querying the layout engine.
///
/// These are programming errors in the host, not conditions an end user can
/// fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Item index outside `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use campaign_layout::model::error::LayoutError;
    ///
    /// let err = LayoutError::OutOfRange { index: 7, len: 3 };
    /// assert_eq!(err.to_string(), "item index 7 out of range (len: 3)");
    /// ```
    #[error("item index {index} out of range (len: {len})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of laid-out items.
        len: usize,
    },

    /// A frame query was made while the layout cache was empty.
    ///
    /// Call `prepare` after every invalidation and before querying.
    #[error("layout queried before prepare")]
    NotPrepared,
}

/// Errors encountered when loading a campaign catalog.
#[derive(Debug, Error)]
pub enum InputError {
    /// The catalog file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use campaign_layout::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json"),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The catalog is not a JSON array of campaigns.
    #[error("Invalid catalog {path}: {reason}")]
    InvalidCatalog {
        /// Path of the malformed catalog.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Generic I/O error while reading the catalog.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for the command-line front end.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog could not be loaded.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file exists but is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Layout engine misuse.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
