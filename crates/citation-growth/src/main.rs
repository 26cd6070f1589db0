//! Citation growth - Entry Point
//!
//! Fetches the citations of an arXiv paper, plots their cumulative growth and
//! exports the citing papers to CSV.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use citation_growth::formatters::{self, ChartOptions};
use citation_growth::models::{CitationRecord, Granularity, PaperId};
use citation_growth::{CitationClient, Config, build_cumulative_series};

#[derive(Parser, Debug)]
#[command(name = "citation-growth")]
#[command(about = "Plot cumulative citations via Semantic Scholar for an arXiv paper")]
#[command(version)]
struct Cli {
    /// arXiv identifier, e.g. 1706.03762 (prefixed IDs such as DOI:... also work)
    arxiv_id: String,

    /// CSV file to write citing-paper metadata
    #[arg(long, short = 'o', default_value = "citations.csv")]
    output_file: PathBuf,

    /// Filename to save plot, PNG unless it ends in .svg (default: <ARXIV_ID>_citations.png)
    #[arg(long)]
    plot_file: Option<PathBuf>,

    /// Aggregation frequency for the cumulative plot
    #[arg(long, value_enum, default_value_t = Granularity::Month)]
    freq: Granularity,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Graph API base URL
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_URL")]
    api_url: Option<String>,

    /// TrueType font used for chart text
    #[arg(long, env = "CITATION_GROWTH_FONT")]
    font: Option<PathBuf>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json_logs);

    let mut config = Config::from_env()?;
    if cli.api_key.is_some() {
        config.api_key = cli.api_key;
    }
    if let Some(url) = cli.api_url.as_deref() {
        config.set_graph_api_url(url)?;
    }

    let client = CitationClient::new(config)?;
    let paper_id = PaperId::parse(&cli.arxiv_id)?;

    tracing::info!(paper = %paper_id, "Fetching citations");

    let title = client.fetch_title(&paper_id).await;
    let title = formatters::caption_title(title.as_deref(), &cli.arxiv_id);

    let records = client
        .fetch_citations(&paper_id)
        .await
        .with_context(|| format!("failed to fetch citations for {paper_id}"))?;

    let dates: Vec<NaiveDate> = records.iter().filter_map(CitationRecord::date).collect();
    tracing::info!(
        citing_papers = records.len(),
        dated = dates.len(),
        "Collected citations"
    );

    let series = build_cumulative_series(&dates, cli.freq)
        .with_context(|| format!("cannot plot citations of {paper_id}"))?;

    let plot_path = cli.plot_file.unwrap_or_else(|| formatters::default_chart_path(&cli.arxiv_id));
    let options =
        ChartOptions::new(formatters::chart_caption(&title, cli.freq)).with_font(cli.font);
    formatters::render_chart(&series, &plot_path, &options)
        .with_context(|| format!("failed to write chart to {}", plot_path.display()))?;

    formatters::write_csv(&cli.output_file, &records)
        .with_context(|| format!("failed to write {}", cli.output_file.display()))?;

    Ok(())
}
