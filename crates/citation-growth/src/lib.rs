//! Citation growth
//!
//! Fetches every paper citing a source publication from the Semantic Scholar
//! Graph API, turns the citing papers' publication dates into a cumulative
//! time series and writes the series as a chart next to a CSV of the raw
//! metadata.
//!
//! # Pipeline
//!
//! - **Fetch**: [`CitationClient`] walks the paginated citations endpoint
//! - **Aggregate**: [`series::build_cumulative_series`] buckets and sums dates
//! - **Report**: [`formatters::csv`] and [`formatters::chart`] write the outputs
//!
//! # Example
//!
//! ```no_run
//! use citation_growth::models::{CitationRecord, Granularity, PaperId};
//! use citation_growth::{CitationClient, Config, series};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CitationClient::new(Config::from_env()?)?;
//!     let paper = PaperId::parse("1706.03762")?;
//!
//!     let records = client.fetch_citations(&paper).await?;
//!     let dates: Vec<_> = records.iter().filter_map(CitationRecord::date).collect();
//!     let series = series::build_cumulative_series(&dates, Granularity::Month)?;
//!     println!("{} citations", series.total());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod series;

pub use client::CitationClient;
pub use config::Config;
pub use error::{ClientError, ReportError, SeriesError};
pub use series::{TimeSeries, build_cumulative_series};
