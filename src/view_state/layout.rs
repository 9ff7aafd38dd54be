//! Layout attribute cache
//!
//! Computes the frame of every item in a single top-to-bottom column and
//! keeps the result until told to throw it away.
//!
//! # State machine
//!
//! ```text
//!   Empty --prepare--> Built --invalidate--> Empty
//!                        |
//!                        +--prepare (no-op)
//! ```
//!
//! Invalidation is push-based. The cache does not notice width or item
//! changes on its own; whoever changes them calls [`LayoutAttributeCache::invalidate`].

use super::height::ItemHeightProvider;
use super::types::{Frame, ItemIndex};
use tracing::{info, warn};

/// Number of columns. Fixed: cards always stack in one column.
pub const COLUMN_COUNT: usize = 1;

/// Built frame table.
///
/// # Invariants
/// - `frames[i].y == sum(frames[0..i].height)`, `x == 0`, `width == column_width`
/// - `total_content_height == max(frame.bottom())`, or 0 if empty
/// - never mutated after construction; a rebuild produces a new table
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTable {
    frames: Vec<Frame>,
    column_width: f64,
    total_content_height: f64,
    generation: u64,
}

impl LayoutTable {
    /// Stack items top to bottom with zero gap.
    fn build<P>(provider: &P, item_count: usize, column_width: f64, generation: u64) -> Self
    where
        P: ItemHeightProvider + ?Sized,
    {
        let mut frames = Vec::with_capacity(item_count);
        let mut y_offset = 0.0f64;

        for item in 0..item_count {
            let raw = provider.height(ItemIndex::new(item), column_width);
            let height = if raw.is_finite() && raw >= 0.0 {
                raw
            } else {
                warn!(item, height = raw, "Invalid item height, using 0");
                0.0
            };

            frames.push(Frame::new(0.0, y_offset, column_width, height));
            y_offset += height;
        }

        Self {
            frames,
            column_width,
            total_content_height: y_offset,
            generation,
        }
    }

    /// All frames in item order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of laid-out items.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no items were laid out.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Column width the table was built for.
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Height of all content.
    pub fn total_content_height(&self) -> f64 {
        self.total_content_height
    }

    /// Build number; increases with every rebuild of the owning cache.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Cache state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No table; queries fail with `NotPrepared`.
    Empty,
    /// Table available.
    Built,
}

/// Owns the current [`LayoutTable`], if any.
#[derive(Debug, Clone, Default)]
pub struct LayoutAttributeCache {
    table: Option<LayoutTable>,
    builds: u64,
}

impl LayoutAttributeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> CacheState {
        if self.table.is_some() {
            CacheState::Built
        } else {
            CacheState::Empty
        }
    }

    /// True if a table is available.
    pub fn is_built(&self) -> bool {
        self.table.is_some()
    }

    /// Build the table if the cache is empty.
    ///
    /// Returns `true` if a table was built, `false` if one already existed
    /// (in which case nothing is recomputed, even if the arguments differ).
    ///
    /// # Arguments
    /// - `provider`: height for each index at `column_width`
    /// - `item_count`: number of items to lay out
    /// - `column_width`: content width of the single column
    pub fn prepare<P>(&mut self, provider: &P, item_count: usize, column_width: f64) -> bool
    where
        P: ItemHeightProvider + ?Sized,
    {
        if self.table.is_some() {
            return false;
        }

        let column_width = if column_width.is_finite() {
            column_width.max(0.0)
        } else {
            0.0
        };

        let generation = self.builds + 1;
        let table = LayoutTable::build(provider, item_count, column_width, generation);
        info!(
            items = table.len(),
            column_width,
            total_height = table.total_content_height(),
            generation,
            "Layout rebuilt"
        );

        // Swap in only after the whole table is assembled.
        self.builds = generation;
        self.table = Some(table);
        true
    }

    /// Drop the table. Returns `true` if there was one.
    pub fn invalidate(&mut self) -> bool {
        self.table.take().is_some()
    }

    /// The current table, or `None` while empty.
    pub fn table(&self) -> Option<&LayoutTable> {
        self.table.as_ref()
    }

    /// Total content height, 0 while empty.
    pub fn total_content_height(&self) -> f64 {
        self.table
            .as_ref()
            .map_or(0.0, LayoutTable::total_content_height)
    }

    /// Number of successful builds so far.
    pub fn builds(&self) -> u64 {
        self.builds
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
