//! Plain-text rendering of a prepared listing.
//!
//! The binary has no display surface; it prints the frames a viewport would
//! show so a layout can be inspected or diffed.

use crate::measure::TextMeasurer;
use crate::model::LayoutError;
use crate::view_state::listing::{CampaignListing, CellKind};
use crate::view_state::types::{Frame, ItemIndex, Rect, Size};
use std::fmt::Write;

/// One visible cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Position in the listing.
    pub index: ItemIndex,
    /// Campaign name, or a marker for the loading cell.
    pub label: String,
    /// Laid-out frame.
    pub frame: Frame,
}

/// Label shown for the loading indicator cell.
pub const LOADING_LABEL: &str = "<loading>";

/// Collect the rows intersecting `viewport`, in index order.
///
/// # Errors
///
/// Returns [`LayoutError::NotPrepared`] if the listing has not been laid out.
pub fn collect_rows<M: TextMeasurer>(
    listing: &CampaignListing<M>,
    viewport: Rect,
) -> Result<Vec<ReportRow>, LayoutError> {
    listing
        .visible_frames(viewport)?
        .into_iter()
        .map(|(index, frame)| {
            let label = match listing.cell_kind(index)? {
                CellKind::LoadingIndicator => LOADING_LABEL.to_string(),
                CellKind::Campaign => listing
                    .campaign(index)
                    .map(|c| c.name().to_string())
                    .unwrap_or_default(),
            };
            Ok::<_, LayoutError>(ReportRow {
                index,
                label,
                frame,
            })
        })
        .collect()
}

/// Format rows as a fixed-width table headed by the content size.
pub fn render_report(rows: &[ReportRow], content: Size, viewport: Rect) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "content {:.1} x {:.1}", content.width, content.height);
    let _ = writeln!(
        out,
        "viewport y={:.1} h={:.1}: {} visible",
        viewport.y,
        viewport.height,
        rows.len()
    );
    for row in rows {
        let line = format!(
            "#{:<4} y={:<9.1} h={:<9.1} {}",
            row.index.get(),
            row.frame.y,
            row.frame.height,
            row.label
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}
