//! Domain model: campaigns, image sources and error types.

pub mod campaign;
pub mod error;
pub mod image;

pub use campaign::Campaign;
pub use error::{AppError, InputError, LayoutError};
pub use image::{ImageSender, ImageSize, ImageSource};
