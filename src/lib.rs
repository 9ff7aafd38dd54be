//! Campaign listing layout engine.
//!
//! Computes frames for a single-column, variable-height list of campaign
//! cards. Each card's height is derived from its mood image's aspect ratio
//! and its measured text; frames are cached until content or bounds change
//! and answer viewport intersection queries.
//!
//! Pure core (`measure`, `model`, `view_state`) with a thin shell (`config`,
//! `logging`, `source`, `view`) used by the binary.

pub mod config;
pub mod logging;
pub mod measure;
pub mod model;
pub mod source;
pub mod view;
pub mod view_state;
