//! View-state layer - item heights, frame layout and viewport queries
//!
//! # Module Structure
//!
//! - `types`: Geometry and index newtypes (ItemIndex, Rect/Frame, Size, Insets)
//! - `height`: ItemHeightProvider and the campaign card ItemHeightCalculator
//! - `layout`: LayoutAttributeCache - cached single-column frame table
//! - `viewport`: visible-frame and frame-by-index queries on the cache
//! - `listing`: CampaignListing - host-facing API (display, bounds, queries)
//!
//! Data flows one way: campaigns + content width -> heights -> frame table
//! -> read-only queries.

pub mod height;
pub mod layout;
pub mod listing;
pub mod types;
pub mod viewport;
