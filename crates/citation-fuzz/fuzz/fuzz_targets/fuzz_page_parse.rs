#![no_main]

use citation_growth::models::CitationPage;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding and flattening arbitrary bytes must never panic
    if let Ok(page) = serde_json::from_slice::<CitationPage>(data) {
        for record in page.into_records() {
            let _ = record.date();
        }
    }
});
