//! Citation page and record models matching the Semantic Scholar API schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Continuation returned in a citations page's `next` field.
///
/// The Graph API hands back the next offset; some gateways hand back a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageCursor {
    /// Offset to send on the next request.
    Offset(u64),
    /// Absolute URL of the next page.
    Url(String),
}

/// One page of the `/paper/{id}/citations` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitationPage {
    /// Offset of this page.
    #[serde(default)]
    pub offset: u64,

    /// Continuation cursor (None = last page).
    #[serde(default)]
    pub next: Option<PageCursor>,

    /// Citation edges in this page.
    #[serde(default)]
    pub data: Vec<CitationEdge>,
}

impl CitationPage {
    /// Check if there are more pages to fetch.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Flatten the page into records, preserving order.
    #[must_use]
    pub fn into_records(self) -> Vec<CitationRecord> {
        self.data.into_iter().map(CitationRecord::from).collect()
    }
}

/// A single citation edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEdge {
    /// The paper doing the citing.
    #[serde(default)]
    pub citing_paper: Option<CitingPaper>,
}

/// Citing paper fields requested from the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitingPaper {
    /// Semantic Scholar paper ID (null for some unresolved papers).
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,
}

/// Response of the single-paper title lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperTitle {
    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,
}

/// Flattened metadata of one citing paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRecord {
    /// Paper title.
    pub title: Option<String>,

    /// Publication year.
    pub year: Option<i32>,

    /// Publication date as returned by the API.
    pub publication_date: Option<String>,

    /// Semantic Scholar paper ID, empty when the API had none.
    pub paper_id: String,
}

impl CitationRecord {
    /// Parse the publication date.
    ///
    /// Returns `None` when the date is absent or not `YYYY-MM-DD`.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.publication_date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Check if the record can take part in aggregation.
    #[must_use]
    pub fn has_date(&self) -> bool {
        self.date().is_some()
    }
}

impl From<CitationEdge> for CitationRecord {
    fn from(edge: CitationEdge) -> Self {
        let paper = edge.citing_paper.unwrap_or_default();
        Self {
            title: paper.title,
            year: paper.year,
            publication_date: paper.publication_date,
            paper_id: paper.paper_id.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize_offset_cursor() {
        let json = r#"{
            "offset": 0,
            "next": 1000,
            "data": [{"citingPaper": {"paperId": "abc", "title": "A", "year": 2021, "publicationDate": "2021-03-04"}}]
        }"#;

        let page: CitationPage = serde_json::from_str(json).unwrap();
        assert!(page.has_more());
        assert_eq!(page.next, Some(PageCursor::Offset(1000)));

        let records = page.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].paper_id, "abc");
        assert_eq!(records[0].date(), NaiveDate::from_ymd_opt(2021, 3, 4));
    }

    #[test]
    fn test_page_deserialize_url_cursor() {
        let json = r#"{"next": "https://example.org/page/2", "data": []}"#;
        let page: CitationPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.next, Some(PageCursor::Url("https://example.org/page/2".to_string())));
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let page: CitationPage = serde_json::from_str(r#"{"offset": 1000, "data": []}"#).unwrap();
        assert!(!page.has_more());

        let page: CitationPage = serde_json::from_str(r#"{"next": null, "data": []}"#).unwrap();
        assert!(!page.has_more());
    }

    #[test]
    fn test_record_from_empty_edge() {
        let edge: CitationEdge = serde_json::from_str("{}").unwrap();
        let record = CitationRecord::from(edge);
        assert_eq!(record, CitationRecord::default());
        assert!(!record.has_date());
    }

    #[test]
    fn test_record_from_null_fields() {
        let edge: CitationEdge = serde_json::from_str(
            r#"{"citingPaper": {"paperId": null, "title": null, "year": null, "publicationDate": null}}"#,
        )
        .unwrap();
        let record = CitationRecord::from(edge);
        assert!(record.paper_id.is_empty());
        assert!(record.title.is_none());
        assert!(record.date().is_none());
    }

    #[test]
    fn test_unparseable_date_is_absent() {
        let record = CitationRecord {
            publication_date: Some("2021".to_string()),
            ..Default::default()
        };
        assert!(record.date().is_none());

        let record = CitationRecord {
            publication_date: Some("2021-02-30".to_string()),
            ..Default::default()
        };
        assert!(record.date().is_none());
    }
}
