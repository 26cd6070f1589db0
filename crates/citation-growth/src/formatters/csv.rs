//! CSV export of citing-paper metadata.
//!
//! Columns are `title,year,date,paperId`. Every fetched record is written,
//! including the ones left out of the series for lack of a date.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::ReportResult;
use crate::models::CitationRecord;

/// Header row of the export.
pub const HEADER: [&str; 4] = ["title", "year", "date", "paperId"];

#[derive(Serialize)]
struct Row<'a> {
    title: Option<&'a str>,
    year: Option<i32>,
    date: Option<&'a str>,
    paper_id: &'a str,
}

impl<'a> From<&'a CitationRecord> for Row<'a> {
    fn from(record: &'a CitationRecord) -> Self {
        Self {
            title: record.title.as_deref(),
            year: record.year,
            date: record.publication_date.as_deref(),
            paper_id: &record.paper_id,
        }
    }
}

/// Write `records` as CSV to any writer. The header is always written.
pub fn write_csv_to<W: Write>(writer: W, records: &[CitationRecord]) -> ReportResult<()> {
    let mut wtr = ::csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(Row::from(record))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `records` as a UTF-8 CSV file at `path`, replacing any existing file.
pub fn write_csv(path: &Path, records: &[CitationRecord]) -> ReportResult<()> {
    tracing::info!("Writing {} citing papers to {}", records.len(), path.display());

    let file = std::fs::File::create(path)?;
    write_csv_to(std::io::BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[CitationRecord]) -> String {
        let mut out = Vec::new();
        write_csv_to(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_only_for_no_records() {
        assert_eq!(render(&[]), "title,year,date,paperId\n");
    }

    #[test]
    fn test_absent_fields_are_empty() {
        let record = CitationRecord { paper_id: "p1".to_string(), ..Default::default() };
        assert_eq!(render(&[record]), "title,year,date,paperId\n,,,p1\n");
    }

    #[test]
    fn test_quotes_titles_with_commas() {
        let record = CitationRecord {
            title: Some("Attention, \"really\", is all".to_string()),
            year: Some(2019),
            publication_date: Some("2019-06-01".to_string()),
            paper_id: "p2".to_string(),
        };
        let out = render(&[record]);
        assert!(out.ends_with("\"Attention, \"\"really\"\", is all\",2019,2019-06-01,p2\n"));
    }
}
