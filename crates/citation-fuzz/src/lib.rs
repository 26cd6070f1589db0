//! Fuzzing library for citation-growth.
//!
//! This crate provides fuzzing targets for decoding citation pages and
//! parsing user-supplied identifiers and publication dates.
//!
//! # Usage
//!
//! ```bash
//! cd crates/citation-fuzz
//! cargo +nightly fuzz run fuzz_page_parse -- -max_total_time=60
//! ```

pub use citation_growth::models;
