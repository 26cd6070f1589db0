//! Output formatters: CSV export of citing papers and the cumulative chart.

pub mod chart;
pub mod csv;

pub use self::chart::{ChartOptions, caption_title, chart_caption, default_chart_path, render_chart, short_title};
pub use self::csv::{write_csv, write_csv_to};
