//! Property-based tests for citation page decoding and record flattening.

use chrono::NaiveDate;
use proptest::prelude::*;

use citation_growth::models::{CitationPage, CitationRecord, PaperId};

fn arb_edge() -> impl Strategy<Value = serde_json::Value> {
    (
        proptest::option::of("[a-f0-9]{40}"),
        proptest::option::of("[A-Za-z0-9 ,.:-]{0,80}"),
        proptest::option::of(1950i32..2030),
        proptest::option::of((1950i32..2030, 1u32..13, 1u32..29)),
    )
        .prop_map(|(id, title, year, date)| {
            serde_json::json!({
                "citingPaper": {
                    "paperId": id,
                    "title": title,
                    "year": year,
                    "publicationDate": date.map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
                }
            })
        })
}

proptest! {
    /// Flattening keeps one record per edge, in order, and maps every field.
    #[test]
    fn page_flattens_every_edge(edges in proptest::collection::vec(arb_edge(), 0..50)) {
        let body = serde_json::json!({"offset": 0, "data": edges});
        let page: CitationPage = serde_json::from_value(body).unwrap();
        let records = page.into_records();

        prop_assert_eq!(records.len(), edges.len());
        for (record, edge) in records.iter().zip(&edges) {
            let paper = &edge["citingPaper"];
            prop_assert_eq!(record.paper_id.as_str(), paper["paperId"].as_str().unwrap_or(""));
            prop_assert_eq!(record.title.as_deref(), paper["title"].as_str());
            prop_assert_eq!(record.year.map(i64::from), paper["year"].as_i64());
            prop_assert_eq!(record.has_date(), paper["publicationDate"].is_string());
        }
    }

    /// Every well-formed date string parses back to the same calendar day.
    #[test]
    fn iso_dates_parse(y in 1900i32..2100, m in 1u32..13, d in 1u32..29) {
        let record = CitationRecord {
            publication_date: Some(format!("{y:04}-{m:02}-{d:02}")),
            ..Default::default()
        };
        prop_assert_eq!(record.date(), NaiveDate::from_ymd_opt(y, m, d));
    }

    /// Arbitrary date strings never panic.
    #[test]
    fn arbitrary_dates_never_panic(raw in ".*") {
        let record = CitationRecord { publication_date: Some(raw), ..Default::default() };
        let _ = record.date();
    }

    /// Page decoding never panics on arbitrary JSON objects.
    #[test]
    fn page_from_arbitrary_json_never_panics(
        next in proptest::option::of(any::<i64>()),
        offset in any::<i64>(),
        title in proptest::option::of(".*"),
    ) {
        let json = serde_json::json!({
            "offset": offset,
            "next": next,
            "data": [{"citingPaper": {"title": title}}],
        });
        let _ = serde_json::from_value::<CitationPage>(json);
    }

    /// Non-blank identifiers always parse to a prefixed path segment.
    #[test]
    fn paper_ids_are_prefixed(raw in "[0-9]{4}\\.[0-9]{4,5}") {
        let id = PaperId::parse(&raw).unwrap();
        prop_assert_eq!(id.as_str(), format!("ARXIV:{raw}"));
    }
}
