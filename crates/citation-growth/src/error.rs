//! Error types for citation growth.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status from the Semantic Scholar API
    #[error("Semantic Scholar API error {status}: {snippet}")]
    Provider {
        /// HTTP status code
        status: u16,
        /// Leading part of the response body
        snippet: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Paper identifier rejected before any request was made
    #[error("Invalid paper identifier: {0:?}")]
    InvalidId(String),
}

impl ClientError {
    /// Create a provider error, keeping only the first `max_chars` of the body.
    #[must_use]
    pub fn provider(status: u16, body: &str, max_chars: usize) -> Self {
        Self::Provider { status, snippet: body.chars().take(max_chars).collect() }
    }

    /// Create an invalid identifier error.
    #[must_use]
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }

    /// Get the HTTP status if the provider answered with an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request never got an HTTP answer.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Errors from building a cumulative series.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// No dated records reached the aggregator
    #[error("No publication dates available")]
    EmptyInput,
}

/// Errors from writing the CSV export or the chart.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// CSV encoding or write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart backend failure
    #[error("Chart error: {0}")]
    Chart(String),
}

impl ReportError {
    /// Create a chart error from any displayable backend error.
    #[must_use]
    pub fn chart(err: impl std::fmt::Display) -> Self {
        Self::Chart(err.to_string())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for series construction.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Result type alias for report output.
pub type ReportResult<T> = Result<T, ReportError>;
