//! Data models for API responses and the explorer's paper record.
//!
//! API models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod doi;
mod paper;
mod record;

pub use doi::Doi;
pub use paper::{AuthorRef, ExternalIds, LinkedPaper, Paper};
pub use record::{PaperRecord, PaperRef};

/// Placeholder for missing titles and names.
pub const UNKNOWN: &str = "Unknown";
