#![no_main]

use citation_growth::models::{CitationRecord, PaperId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Identifiers come straight from the command line
    if let Ok(id) = PaperId::parse(text) {
        assert!(!id.as_str().is_empty());
    }

    let record = CitationRecord { publication_date: Some(text.to_string()), ..Default::default() };
    let _ = record.date();
});
