//! Viewport queries over a built layout.
//!
//! Frames are sorted by `y` with non-decreasing bottoms, so the candidate
//! range for a viewport is found by binary search (`partition_point`) and
//! only that range is tested for intersection.

use super::layout::{LayoutAttributeCache, LayoutTable};
use super::types::{Frame, ItemIndex, Rect};
use crate::model::LayoutError;

impl LayoutTable {
    /// Frames intersecting `viewport`, in index order.
    ///
    /// A zero-area viewport returns nothing, as do frames that only touch
    /// its edge.
    pub fn visible_frames(&self, viewport: Rect) -> Vec<(ItemIndex, Frame)> {
        if viewport.is_empty() {
            return Vec::new();
        }

        let frames = self.frames();
        // First frame whose bottom is below the viewport top.
        let start = frames.partition_point(|f| f.bottom() <= viewport.y);
        // First frame starting at or below the viewport bottom.
        let end = frames.partition_point(|f| f.y < viewport.bottom());

        if start >= end {
            return Vec::new();
        }

        frames[start..end]
            .iter()
            .enumerate()
            .filter(|(_, frame)| frame.intersects(&viewport))
            .map(|(offset, frame)| (ItemIndex::new(start + offset), *frame))
            .collect()
    }

    /// Frame of the item at `index`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::OutOfRange`] if `index >= len()`.
    pub fn frame_at(&self, index: ItemIndex) -> Result<Frame, LayoutError> {
        self.frames()
            .get(index.get())
            .copied()
            .ok_or(LayoutError::OutOfRange {
                index: index.get(),
                len: self.len(),
            })
    }
}

impl LayoutAttributeCache {
    /// Frames intersecting `viewport`, in index order.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotPrepared`] while the cache is empty.
    pub fn visible_frames(&self, viewport: Rect) -> Result<Vec<(ItemIndex, Frame)>, LayoutError> {
        self.table()
            .map(|table| table.visible_frames(viewport))
            .ok_or(LayoutError::NotPrepared)
    }

    /// Frame of the item at `index`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotPrepared`] while the cache is empty,
    /// [`LayoutError::OutOfRange`] for an index past the end.
    pub fn frame_at(&self, index: ItemIndex) -> Result<Frame, LayoutError> {
        self.table()
            .ok_or(LayoutError::NotPrepared)?
            .frame_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(heights: &[f64], width: f64) -> LayoutAttributeCache {
        let heights = heights.to_vec();
        let mut cache = LayoutAttributeCache::new();
        cache.prepare(
            &|index: ItemIndex, _width: f64| heights[index.get()],
            heights.len(),
            width,
        );
        cache
    }

    fn indices(result: &[(ItemIndex, Frame)]) -> Vec<usize> {
        result.iter().map(|(i, _)| i.get()).collect()
    }

    mod visible_frames {
        use super::*;

        #[test]
        fn top_of_content() {
            let cache = built(&[10.0, 10.0, 10.0, 10.0], 100.0);
            // Items at y=[0, 10, 20, 30]; viewport covers 0..24
            let visible = cache
                .visible_frames(Rect::new(0.0, 0.0, 100.0, 24.0))
                .unwrap();
            assert_eq!(indices(&visible), vec![0, 1, 2]);
        }

        #[test]
        fn middle_of_content() {
            let cache = built(&[10.0; 5], 100.0);
            // Viewport covers 15..39: items 1 (10..20), 2, 3 (30..40)
            let visible = cache
                .visible_frames(Rect::new(0.0, 15.0, 100.0, 24.0))
                .unwrap();
            assert_eq!(indices(&visible), vec![1, 2, 3]);
        }

        #[test]
        fn viewport_edge_touching_frame_excludes_it() {
            let cache = built(&[10.0, 10.0, 10.0], 100.0);
            let visible = cache
                .visible_frames(Rect::new(0.0, 10.0, 100.0, 10.0))
                .unwrap();
            assert_eq!(indices(&visible), vec![1]);
        }

        #[test]
        fn returns_frames_with_geometry() {
            let cache = built(&[176.0, 216.0], 300.0);
            let visible = cache
                .visible_frames(Rect::new(0.0, 0.0, 300.0, 1000.0))
                .unwrap();
            assert_eq!(
                visible,
                vec![
                    (ItemIndex::new(0), Frame::new(0.0, 0.0, 300.0, 176.0)),
                    (ItemIndex::new(1), Frame::new(0.0, 176.0, 300.0, 216.0)),
                ]
            );
        }

        #[test]
        fn zero_size_viewport_is_empty() {
            let cache = built(&[10.0, 10.0], 100.0);
            let visible = cache
                .visible_frames(Rect::new(0.0, 5.0, 0.0, 0.0))
                .unwrap();
            assert!(visible.is_empty());
        }

        #[test]
        fn viewport_below_content_is_empty() {
            let cache = built(&[10.0, 10.0], 100.0);
            let visible = cache
                .visible_frames(Rect::new(0.0, 500.0, 100.0, 50.0))
                .unwrap();
            assert!(visible.is_empty());
        }

        #[test]
        fn viewport_beside_column_is_empty() {
            let cache = built(&[10.0, 10.0], 100.0);
            let visible = cache
                .visible_frames(Rect::new(150.0, 0.0, 50.0, 20.0))
                .unwrap();
            assert!(visible.is_empty());
        }

        #[test]
        fn zero_height_items_are_never_visible() {
            let cache = built(&[10.0, 0.0, 10.0], 100.0);
            let visible = cache
                .visible_frames(Rect::new(0.0, 0.0, 100.0, 20.0))
                .unwrap();
            assert_eq!(indices(&visible), vec![0, 2]);
        }

        #[test]
        fn empty_table_returns_nothing() {
            let cache = built(&[], 100.0);
            let visible = cache
                .visible_frames(Rect::new(0.0, 0.0, 100.0, 100.0))
                .unwrap();
            assert!(visible.is_empty());
        }

        #[test]
        fn not_prepared_is_an_error() {
            let cache = LayoutAttributeCache::new();
            assert_eq!(
                cache.visible_frames(Rect::new(0.0, 0.0, 10.0, 10.0)),
                Err(LayoutError::NotPrepared)
            );
        }
    }

    mod frame_at {
        use super::*;

        #[test]
        fn returns_frame_for_valid_index() {
            let cache = built(&[10.0, 20.0], 50.0);
            assert_eq!(
                cache.frame_at(ItemIndex::new(1)),
                Ok(Frame::new(0.0, 10.0, 50.0, 20.0))
            );
        }

        #[test]
        fn out_of_range_index_is_an_error() {
            let cache = built(&[10.0, 20.0], 50.0);
            assert_eq!(
                cache.frame_at(ItemIndex::new(2)),
                Err(LayoutError::OutOfRange { index: 2, len: 2 })
            );
        }

        #[test]
        fn not_prepared_is_an_error() {
            let cache = LayoutAttributeCache::new();
            assert_eq!(
                cache.frame_at(ItemIndex::new(0)),
                Err(LayoutError::NotPrepared)
            );
        }

        #[test]
        fn invalidated_cache_is_not_prepared() {
            let mut cache = built(&[10.0], 50.0);
            cache.invalidate();
            assert_eq!(
                cache.frame_at(ItemIndex::new(0)),
                Err(LayoutError::NotPrepared)
            );
        }
    }
}
