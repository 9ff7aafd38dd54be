//! Tracing subscriber initialization.
//!
//! The library only emits `tracing` events; the binary decides where they
//! go. Events are written to a log file so they never mix with the layout
//! report printed on stdout.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Default filter directive could not be parsed
    #[error("Invalid log level {level:?}: {reason}")]
    InvalidLevel {
        /// The rejected directive
        level: String,
        /// Parser message
        reason: String,
    },

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Build the event filter: `RUST_LOG` if set, else `default_level`.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidLevel`] if `RUST_LOG` is unset and
/// `default_level` is not a valid filter directive.
pub fn build_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| LoggingError::InvalidLevel {
            level: default_level.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Creates the log directory if it doesn't exist. Respects `RUST_LOG`,
/// defaulting to `default_level`.
///
/// # Errors
/// Returns `LoggingError` if the directory cannot be created, the path has no
/// file name, the level is invalid, or a subscriber is already installed.
pub fn init(log_path: &Path, default_level: &str) -> Result<(), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    // A bare file name has an empty parent: log next to the working directory.
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let env_filter = build_filter(default_level)?;
    let file_appender = tracing_appender::rolling::never(directory, file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
