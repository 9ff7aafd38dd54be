//! View-state for the campaign listing screen.
//!
//! Ties content (loading placeholder or campaigns), scroll-view bounds and
//! the layout cache together behind the API a host list view calls.

use super::{
    height::{CampaignHeights, ItemHeightCalculator, PlaceholderHeight},
    layout::{LayoutAttributeCache, COLUMN_COUNT},
    types::{Frame, Insets, ItemIndex, Rect, Size},
};
use crate::measure::{GlyphMetricsMeasurer, TextMeasurer};
use crate::model::{Campaign, LayoutError};
use tracing::debug;

/// Which content the listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// One placeholder item filling the viewport.
    Loading,
    /// One card per campaign.
    Campaigns,
}

/// Cell type to dequeue for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Spinner shown while campaigns load.
    LoadingIndicator,
    /// Campaign card.
    Campaign,
}

#[derive(Debug)]
enum ListingContent {
    Loading,
    Campaigns(Vec<Campaign>),
}

/// View-state for the campaign listing.
///
/// Starts in [`ListingMode::Loading`] with a zero-sized viewport. Content
/// or bounds changes invalidate the layout; the host calls
/// [`prepare`](Self::prepare) before its next layout pass, then queries.
#[derive(Debug)]
pub struct CampaignListing<M = GlyphMetricsMeasurer> {
    calculator: ItemHeightCalculator<M>,
    content: ListingContent,
    viewport: Size,
    insets: Insets,
    cache: LayoutAttributeCache,
}

impl<M: TextMeasurer> CampaignListing<M> {
    /// Create a listing in loading mode.
    pub fn new(calculator: ItemHeightCalculator<M>) -> Self {
        Self {
            calculator,
            content: ListingContent::Loading,
            viewport: Size::default(),
            insets: Insets::zero(),
            cache: LayoutAttributeCache::new(),
        }
    }

    // === Content ===

    /// Replace the campaign set and invalidate the layout.
    ///
    /// Images are polled once, at the first layout after this call. To pick
    /// up images that arrived later, `display` the campaigns again with new
    /// sources; `invalidate_layout` alone keeps the fallback heights.
    pub fn display(&mut self, campaigns: Vec<Campaign>) {
        debug!(count = campaigns.len(), "Displaying campaigns");
        self.content = ListingContent::Campaigns(campaigns);
        self.cache.invalidate();
    }

    /// Switch to the loading placeholder and invalidate the layout.
    pub fn show_loading(&mut self) {
        self.content = ListingContent::Loading;
        self.cache.invalidate();
    }

    /// Current mode.
    pub fn mode(&self) -> ListingMode {
        match self.content {
            ListingContent::Loading => ListingMode::Loading,
            ListingContent::Campaigns(_) => ListingMode::Campaigns,
        }
    }

    /// Number of items: 1 while loading, else the campaign count.
    pub fn number_of_items(&self) -> usize {
        match &self.content {
            ListingContent::Loading => 1,
            ListingContent::Campaigns(campaigns) => campaigns.len(),
        }
    }

    /// Campaign at `index`, if showing campaigns.
    pub fn campaign(&self, index: ItemIndex) -> Option<&Campaign> {
        match &self.content {
            ListingContent::Loading => None,
            ListingContent::Campaigns(campaigns) => campaigns.get(index.get()),
        }
    }

    /// Cell type for the item at `index`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::OutOfRange`] past the last item.
    pub fn cell_kind(&self, index: ItemIndex) -> Result<CellKind, LayoutError> {
        let len = self.number_of_items();
        if index.get() >= len {
            return Err(LayoutError::OutOfRange {
                index: index.get(),
                len,
            });
        }
        Ok(match self.mode() {
            ListingMode::Loading => CellKind::LoadingIndicator,
            ListingMode::Campaigns => CellKind::Campaign,
        })
    }

    // === Bounds ===

    /// Update the scroll view's size and content insets.
    ///
    /// Invalidates the layout if the content width changed. A viewport
    /// height change only invalidates while loading, since card frames do
    /// not depend on it.
    pub fn set_bounds(&mut self, viewport: Size, insets: Insets) {
        let old_width = self.content_width();
        let old_height = self.viewport.height;
        self.viewport = viewport;
        self.insets = insets;

        let width_changed = self.content_width() != old_width;
        let placeholder_resized =
            self.mode() == ListingMode::Loading && viewport.height != old_height;

        if width_changed || placeholder_resized {
            debug!(
                width = self.content_width(),
                viewport_height = viewport.height,
                "Bounds changed, invalidating layout"
            );
            self.cache.invalidate();
        }
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Horizontal span available for content: viewport width minus
    /// left/right insets, never negative.
    pub fn content_width(&self) -> f64 {
        (self.viewport.width - self.insets.horizontal()).max(0.0)
    }

    // === Layout ===

    /// Build the layout if it was invalidated. Returns `true` if rebuilt.
    pub fn prepare(&mut self) -> bool {
        let column_width = self.content_width() / COLUMN_COUNT as f64;
        match &self.content {
            ListingContent::Loading => {
                let placeholder = PlaceholderHeight {
                    viewport_height: self.viewport.height,
                };
                self.cache.prepare(&placeholder, 1, column_width)
            }
            ListingContent::Campaigns(campaigns) => {
                let heights = CampaignHeights::new(campaigns, &self.calculator);
                self.cache.prepare(&heights, campaigns.len(), column_width)
            }
        }
    }

    /// Drop the layout; the next [`prepare`](Self::prepare) rebuilds it.
    pub fn invalidate_layout(&mut self) {
        self.cache.invalidate();
    }

    /// True if a layout is available for queries.
    pub fn is_prepared(&self) -> bool {
        self.cache.is_built()
    }

    /// Frame of the item at `index`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotPrepared`] before [`prepare`](Self::prepare),
    /// [`LayoutError::OutOfRange`] past the last item.
    pub fn frame_for_item(&self, index: ItemIndex) -> Result<Frame, LayoutError> {
        self.cache.frame_at(index)
    }

    /// Items whose frames intersect `viewport`, in index order.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotPrepared`] before [`prepare`](Self::prepare).
    pub fn visible_frames(&self, viewport: Rect) -> Result<Vec<(ItemIndex, Frame)>, LayoutError> {
        self.cache.visible_frames(viewport)
    }

    /// Content width by total content height; height is 0 until prepared.
    pub fn total_content_size(&self) -> Size {
        Size::new(self.content_width(), self.cache.total_content_height())
    }

    /// The layout cache.
    pub fn layout(&self) -> &LayoutAttributeCache {
        &self.cache
    }
}

impl Default for CampaignListing<GlyphMetricsMeasurer> {
    fn default() -> Self {
        Self::new(ItemHeightCalculator::default())
    }
}
