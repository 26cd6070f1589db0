//! Data models for Semantic Scholar citation data.
//!
//! All API models use `#[serde(default)]` for optional fields and
//! `#[serde(rename = "camelCase")]` to match API naming.

mod citation;
mod enums;
mod paper_id;

pub use citation::{CitationEdge, CitationPage, CitationRecord, CitingPaper, PageCursor, PaperTitle};
pub use enums::Granularity;
pub use paper_id::PaperId;
