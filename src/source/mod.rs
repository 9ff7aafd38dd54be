//! Campaign catalog input.
//!
//! A catalog is a JSON array of campaigns:
//!
//! ```json
//! [
//!   { "name": "Summer", "description": "Beach days", "image": { "width": 1200, "height": 800 } },
//!   { "name": "Winter", "description": "Snow" }
//! ]
//! ```
//!
//! Campaigns with an `image` size become pre-fetched sources (the layout
//! sees the real aspect ratio). Campaigns without one get a source that never
//! delivers, so their cards use the fallback image height.

use crate::model::error::InputError;
use crate::model::{Campaign, ImageSize, ImageSource};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// One campaign as stored in a catalog file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    /// Campaign title.
    pub name: String,
    /// Campaign body text.
    #[serde(default)]
    pub description: String,
    /// Natural size of the mood image, if already known.
    #[serde(default)]
    pub image: Option<ImageSize>,
}

impl CatalogEntry {
    /// Convert into a displayable campaign.
    pub fn into_campaign(self) -> Campaign {
        let source = match self.image {
            Some(size) => ImageSource::ready(size),
            None => ImageSource::pending(),
        };
        Campaign::new(self.name, self.description, source)
    }
}

/// Parse catalog JSON.
///
/// # Errors
///
/// Returns the `serde_json` error if `json` is not an array of entries.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a catalog file into campaigns.
///
/// # Errors
///
/// - [`InputError::FileNotFound`] if `path` does not exist
/// - [`InputError::Io`] if it cannot be read
/// - [`InputError::InvalidCatalog`] if it is not valid catalog JSON
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Campaign>, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let entries = parse_catalog(&contents).map_err(|e| InputError::InvalidCatalog {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let with_images = entries.iter().filter(|e| e.image.is_some()).count();
    info!(
        path = %path.display(),
        campaigns = entries.len(),
        with_images,
        "Loaded campaign catalog"
    );

    Ok(entries.into_iter().map(CatalogEntry::into_campaign).collect())
}
