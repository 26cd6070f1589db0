//! Semantic Scholar API client.
//!
//! Provides async HTTP access to:
//! - The paginated citations endpoint, as a lazy stream of pages
//! - The single-paper endpoint, for the source paper's title
//!
//! Requests are issued one at a time. There is no retry and no caching: the
//! first failing page aborts the whole listing.

mod pages;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult};
use crate::models::{CitationRecord, PaperId, PaperTitle};

pub use pages::CitationPages;

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct CitationClient {
    /// HTTP client.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Page size for the citations endpoint.
    page_limit: u32,

    /// Per-page timeout.
    citations_timeout: std::time::Duration,

    /// Title lookup timeout.
    title_timeout: std::time::Duration,
}

impl CitationClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            graph_api_url: config.graph_api_url,
            page_limit: config.page_limit,
            citations_timeout: config.citations_timeout,
            title_timeout: config.title_timeout,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Stream the citation pages of a paper, first page first.
    ///
    /// Every call starts a fresh walk from the first page.
    #[must_use]
    pub fn citation_pages<'a>(&'a self, paper_id: &'a PaperId) -> CitationPages<'a> {
        CitationPages::new(self, paper_id)
    }

    /// Fetch every citing paper of `paper_id`, in the order the API returned them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Provider`] if any page answers with a non-success
    /// status and [`ClientError::Transport`] on network failure. Records from
    /// earlier pages are discarded in both cases.
    pub async fn fetch_citations(&self, paper_id: &PaperId) -> ClientResult<Vec<CitationRecord>> {
        let mut records = Vec::new();
        let mut pages = self.citation_pages(paper_id);

        while let Some(page) = pages.next_page().await? {
            records.extend(page.into_records());
            debug!(paper = %paper_id, fetched = records.len(), "Fetched citations so far");
        }

        Ok(records)
    }

    /// Look up the title of `paper_id`.
    ///
    /// Failures are logged and reported as `None`.
    pub async fn fetch_title(&self, paper_id: &PaperId) -> Option<String> {
        match self.try_fetch_title(paper_id).await {
            Ok(title) => title,
            Err(e) => {
                warn!(paper = %paper_id, error = %e, "Could not fetch paper title");
                None
            }
        }
    }

    async fn try_fetch_title(&self, paper_id: &PaperId) -> ClientResult<Option<String>> {
        let url = self.url(&format!("paper/{paper_id}"), &[("fields", fields::TITLE.join(","))])?;
        debug!(%url, "GET");

        let response = self.client.get(url).timeout(self.title_timeout).send().await?;
        let response = Self::handle_response(response).await?;
        let paper: PaperTitle = serde_json::from_str(&response.text().await?)?;

        Ok(paper.title)
    }

    /// Build an endpoint URL under the Graph API base.
    fn url(&self, endpoint: &str, params: &[(&str, String)]) -> ClientResult<url::Url> {
        let base = format!("{}/{}", self.graph_api_url, endpoint);
        Ok(url::Url::parse_with_params(&base, params)?)
    }

    /// Query parameters of the first citations page.
    fn citation_params(&self) -> Vec<(&'static str, String)> {
        vec![("fields", fields::CITATION.join(",")), ("limit", self.page_limit.to_string())]
    }

    /// Map non-success status codes to [`ClientError::Provider`].
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::provider(status.as_u16(), &text, api::ERROR_SNIPPET_CHARS))
    }
}

impl std::fmt::Debug for CitationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CitationClient")
            .field("graph_api_url", &self.graph_api_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
