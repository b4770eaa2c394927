use cinelist_models::{MovieDetail, MovieSummary};
use reqwest::{Client, Request, StatusCode};
use serde::Deserialize;
use tracing::debug;
use crate::error::CatalogError;

const NO_MOVIES_FOUND: &str = "No movies found.";

// Envelope shared by every OMDb response
#[derive(Debug, Deserialize)]
struct OmdbEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbEnvelope {
    fn is_failure(&self) -> bool {
        self.response.eq_ignore_ascii_case("false")
    }
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    search: Option<Vec<MovieSummary>>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

/// Build `GET {base_url}?apikey=<key>&s=<term>`
pub fn search_request(
    client: &Client,
    base_url: &str,
    api_key: &str,
    term: &str,
) -> Result<Request, CatalogError> {
    let request = client
        .get(base_url)
        .query(&[("apikey", api_key), ("s", term)])
        .build()?;
    Ok(request)
}

/// Build `GET {base_url}?apikey=<key>&i=<id>`
pub fn detail_request(
    client: &Client,
    base_url: &str,
    api_key: &str,
    id: &str,
) -> Result<Request, CatalogError> {
    let request = client
        .get(base_url)
        .query(&[("apikey", api_key), ("i", id)])
        .build()?;
    Ok(request)
}

/// Search the catalog by term
pub async fn search(
    client: &Client,
    base_url: &str,
    api_key: &str,
    term: &str,
) -> Result<Vec<MovieSummary>, CatalogError> {
    let request = search_request(client, base_url, api_key, term)?;
    debug!("OMDb search request: term='{}'", term);

    let response = client.execute(request).await?;
    let status = response.status();
    let body = response.text().await?;

    parse_search_response(status, &body)
}

/// Fetch a single title by catalog id
pub async fn get_by_id(
    client: &Client,
    base_url: &str,
    api_key: &str,
    id: &str,
) -> Result<MovieDetail, CatalogError> {
    let request = detail_request(client, base_url, api_key, id)?;
    debug!("OMDb detail request: id={}", id);

    let response = client.execute(request).await?;
    let status = response.status();
    let body = response.text().await?;

    parse_detail_response(id, status, &body)
}

/// Interpret a search response.
///
/// Non-2xx status is a transport error; `Response:"False"` carries the
/// catalog's own message (e.g. "Movie not found!"). A successful envelope
/// without a `Search` array yields no movies.
pub fn parse_search_response(status: StatusCode, body: &str) -> Result<Vec<MovieSummary>, CatalogError> {
    if !status.is_success() {
        return Err(CatalogError::Transport { status });
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    let envelope: OmdbEnvelope = serde_json::from_value(value.clone())?;

    if envelope.is_failure() {
        let message = envelope
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| NO_MOVIES_FOUND.to_string());
        return Err(CatalogError::NoResults(message));
    }

    let parsed: OmdbSearchResponse = serde_json::from_value(value)?;
    let movies = parsed.search.unwrap_or_default();

    debug!(
        "OMDb search returned {} movies (totalResults: {})",
        movies.len(),
        parsed.total_results.as_deref().unwrap_or("?")
    );

    Ok(movies)
}

/// Interpret a detail response; `Response:"False"` means the id is unknown.
pub fn parse_detail_response(id: &str, status: StatusCode, body: &str) -> Result<MovieDetail, CatalogError> {
    if !status.is_success() {
        return Err(CatalogError::Transport { status });
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    let envelope: OmdbEnvelope = serde_json::from_value(value.clone())?;

    if envelope.is_failure() {
        return Err(CatalogError::DetailUnavailable {
            id: id.to_string(),
            reason: envelope.error.unwrap_or_else(|| "unknown id".to_string()),
        });
    }

    let detail: MovieDetail = serde_json::from_value(value)?;
    Ok(detail)
}
