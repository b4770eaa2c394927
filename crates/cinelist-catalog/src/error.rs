use reqwest::StatusCode;

/// Failures talking to the movie catalog.
///
/// These never reach the user directly: the directory boundary in
/// `cinelist-core` turns every variant into an empty result or a fallback.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP error! Status: {status}")]
    Transport { status: StatusCode },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("{0}")]
    NoResults(String),

    #[error("Details not available for {id}: {reason}")]
    DetailUnavailable { id: String, reason: String },

    #[error("OMDb api key is not configured")]
    MissingApiKey,

    #[error("Empty {0}")]
    EmptyQuery(&'static str),
}

impl CatalogError {
    /// Short label for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Transport { .. } | CatalogError::Http(_) => "transport",
            CatalogError::Schema(_) => "schema",
            CatalogError::NoResults(_) => "no_results",
            CatalogError::DetailUnavailable { .. } => "detail_unavailable",
            CatalogError::MissingApiKey => "missing_api_key",
            CatalogError::EmptyQuery(_) => "empty_query",
        }
    }
}
