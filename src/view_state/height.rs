//! Per-item height calculation.
//!
//! The layout cache never looks at item content. It asks an
//! [`ItemHeightProvider`] for each index's height at the current column
//! width; [`CampaignHeights`] answers that for real campaign cards and
//! [`PlaceholderHeight`] for the loading placeholder.

use super::types::ItemIndex;
use crate::measure::{
    FontDescriptor, GlyphMetricsMeasurer, ImageAspectResolver, ImageHeight, TextMeasurer,
};
use crate::model::Campaign;
use tracing::trace;

/// Supplies item heights to the layout cache.
///
/// # Contract
/// - MUST return a finite, non-negative height (others are clamped to 0)
/// - MUST be deterministic for a given `(index, width)` within one layout pass
/// - Only called for indices in `[0, item_count)`
pub trait ItemHeightProvider {
    /// Height of the item at `index` laid out in a column `width` wide.
    fn height(&self, index: ItemIndex, width: f64) -> f64;
}

impl<F> ItemHeightProvider for F
where
    F: Fn(ItemIndex, f64) -> f64,
{
    fn height(&self, index: ItemIndex, width: f64) -> f64 {
        self(index, width)
    }
}

/// Fixed card styling: fonts and vertical spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    /// Font of the campaign name.
    pub title_font: FontDescriptor,
    /// Font of the campaign description.
    pub body_font: FontDescriptor,
    /// Fixed vertical spacing added to every card.
    pub spacing: f64,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            title_font: FontDescriptor::new("Helvetica Neue Bold", 17.0),
            body_font: FontDescriptor::new("Hoefler Text", 12.0),
            spacing: 16.0,
        }
    }
}

/// Breakdown of one card's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardHeights {
    /// Mood image height.
    pub image: ImageHeight,
    /// Wrapped description height.
    pub description: f64,
    /// Wrapped title height.
    pub title: f64,
    /// Fixed spacing.
    pub spacing: f64,
}

impl CardHeights {
    /// Sum of all parts.
    pub fn total(&self) -> f64 {
        self.image.get() + self.description + self.title + self.spacing
    }
}

/// Computes campaign card heights from image, title and description.
#[derive(Debug, Clone)]
pub struct ItemHeightCalculator<M = GlyphMetricsMeasurer> {
    measurer: M,
    style: CardStyle,
    images: ImageAspectResolver,
}

impl<M: TextMeasurer> ItemHeightCalculator<M> {
    /// Create a calculator.
    pub fn new(measurer: M, style: CardStyle, images: ImageAspectResolver) -> Self {
        Self {
            measurer,
            style,
            images,
        }
    }

    /// Card style in use.
    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// Text measurer in use.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Height contributions of `campaign` at `column_width`.
    pub fn breakdown(&self, campaign: &Campaign, column_width: f64) -> CardHeights {
        CardHeights {
            image: self.images.resolve(campaign.mood_image(), column_width),
            description: self.measurer.measure(
                campaign.description(),
                &self.style.body_font,
                column_width,
            ),
            title: self
                .measurer
                .measure(campaign.name(), &self.style.title_font, column_width),
            spacing: self.style.spacing,
        }
    }

    /// Total card height of `campaign` at `column_width`.
    ///
    /// ```text
    /// image + description + title + spacing
    /// ```
    pub fn height(&self, campaign: &Campaign, column_width: f64) -> f64 {
        let parts = self.breakdown(campaign, column_width);
        trace!(
            campaign = campaign.name(),
            image = parts.image.get(),
            image_fallback = parts.image.is_fallback(),
            description = parts.description,
            title = parts.title,
            "Measured card"
        );
        parts.total()
    }
}

impl Default for ItemHeightCalculator<GlyphMetricsMeasurer> {
    fn default() -> Self {
        Self::new(
            GlyphMetricsMeasurer::default(),
            CardStyle::default(),
            ImageAspectResolver::default(),
        )
    }
}

/// Height provider over a campaign slice.
#[derive(Debug)]
pub struct CampaignHeights<'a, M> {
    campaigns: &'a [Campaign],
    calculator: &'a ItemHeightCalculator<M>,
}

impl<'a, M: TextMeasurer> CampaignHeights<'a, M> {
    /// Provide heights for `campaigns` using `calculator`.
    pub fn new(campaigns: &'a [Campaign], calculator: &'a ItemHeightCalculator<M>) -> Self {
        Self {
            campaigns,
            calculator,
        }
    }
}

impl<M: TextMeasurer> ItemHeightProvider for CampaignHeights<'_, M> {
    fn height(&self, index: ItemIndex, width: f64) -> f64 {
        // The cache only asks for indices below the count it was given.
        self.campaigns
            .get(index.get())
            .map_or(0.0, |campaign| self.calculator.height(campaign, width))
    }
}

/// Height provider for the single loading placeholder item, which fills the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderHeight {
    /// Viewport height.
    pub viewport_height: f64,
}

impl ItemHeightProvider for PlaceholderHeight {
    fn height(&self, _index: ItemIndex, _width: f64) -> f64 {
        self.viewport_height
    }
}

#[cfg(test)]
#[path = "height_calculator_tests.rs"]
mod tests;
