//! Configuration for the citation growth client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Largest page the citations endpoint accepts.
    pub const PAGE_LIMIT: u32 = 1000;

    /// Timeout for one citations page.
    pub const CITATIONS_TIMEOUT: Duration = Duration::from_secs(20);

    /// Timeout for the title lookup.
    pub const TITLE_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Characters of an error body kept in `ClientError::Provider`.
    pub const ERROR_SNIPPET_CHARS: usize = 200;

    /// Environment variable holding the API key.
    pub const API_KEY_ENV: &str = "SEMANTIC_SCHOLAR_API_KEY";

    /// Environment variable overriding the Graph API base URL.
    pub const API_URL_ENV: &str = "SEMANTIC_SCHOLAR_API_URL";
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields requested for each citing paper.
    pub const CITATION: &[&str] = &["title", "year", "publicationDate"];

    /// Fields requested for the source paper lookup.
    pub const TITLE: &[&str] = &["title"];
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Page size sent as `limit` on the citations endpoint.
    pub page_limit: u32,

    /// Timeout for each citations page request.
    pub citations_timeout: Duration,

    /// Timeout for the title request.
    pub title_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            page_limit: api::PAGE_LIMIT,
            citations_timeout: api::CITATIONS_TIMEOUT,
            title_timeout: api::TITLE_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            page_limit: api::PAGE_LIMIT,
            citations_timeout: Duration::from_secs(5),
            title_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var(api::API_KEY_ENV).ok().filter(|k| !k.is_empty());
        let mut config = Self::new(api_key);

        if let Ok(url) = std::env::var(api::API_URL_ENV) {
            if !url.is_empty() {
                config.set_graph_api_url(&url)?;
            }
        }

        Ok(config)
    }

    /// Point the client at another Graph API base URL.
    ///
    /// # Errors
    ///
    /// Returns error if `url` does not parse as an absolute URL.
    pub fn set_graph_api_url(&mut self, url: &str) -> anyhow::Result<()> {
        url::Url::parse(url).map_err(|e| anyhow::anyhow!("{url:?} is not a valid API URL: {e}"))?;
        self.graph_api_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
