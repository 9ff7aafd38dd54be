//! Campaign card content.

use super::image::ImageSource;

/// A single campaign shown as one card in the listing.
///
/// Immutable once constructed. A listing replaces its whole campaign set
/// on [`display`](crate::view_state::listing::CampaignListing::display);
/// individual campaigns are never edited in place.
#[derive(Debug)]
pub struct Campaign {
    name: String,
    description: String,
    mood_image: ImageSource,
}

impl Campaign {
    /// Create a campaign.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mood_image: ImageSource,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            mood_image,
        }
    }

    /// Title shown in bold above the description.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Body text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Source of the header image.
    pub fn mood_image(&self) -> &ImageSource {
        &self.mood_image
    }
}
