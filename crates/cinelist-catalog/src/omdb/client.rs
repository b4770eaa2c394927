use crate::error::CatalogError;
use crate::omdb::api;
use crate::traits::MovieCatalog;
use async_trait::async_trait;
use cinelist_config::OmdbConfig;
use cinelist_models::{MovieDetail, MovieSummary};
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

/// Create a reqwest Client identifying this tool. No timeout is set.
pub fn create_omdb_client() -> Client {
    Client::builder()
        .user_agent(concat!("cinelist/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[derive(Clone)]
pub struct OmdbClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, CatalogError> {
        if api_key.trim().is_empty() {
            return Err(CatalogError::MissingApiKey);
        }

        Ok(Self {
            client: Arc::new(create_omdb_client()),
            api_key,
            base_url,
        })
    }

    pub fn from_config(config: &OmdbConfig) -> Result<Self, CatalogError> {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MovieCatalog for OmdbClient {
    fn catalog_name(&self) -> &str {
        "omdb"
    }

    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(CatalogError::EmptyQuery("search term"));
        }

        let movies = api::search(&self.client, &self.base_url, &self.api_key, term).await?;
        debug!("OMDb: {} results for '{}'", movies.len(), term);
        Ok(movies)
    }

    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CatalogError::EmptyQuery("movie id"));
        }

        api::get_by_id(&self.client, &self.base_url, &self.api_key, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let err = OmdbClient::new("  ".to_string(), "https://www.omdbapi.com/".to_string())
            .err()
            .unwrap();
        assert!(matches!(err, CatalogError::MissingApiKey));
    }

    #[test]
    fn test_from_config() {
        let config = OmdbConfig {
            api_key: "abc".to_string(),
            base_url: "http://localhost:1234/".to_string(),
        };
        let client = OmdbClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/");
        assert_eq!(client.catalog_name(), "omdb");
    }

    #[tokio::test]
    async fn test_empty_term_rejected_before_request() {
        // Unroutable base URL: reaching the network would fail with Http, not EmptyQuery
        let client = OmdbClient::new("abc".to_string(), "http://127.0.0.1:9/".to_string()).unwrap();

        let err = client.search_movies("   ").await.unwrap_err();
        assert!(matches!(err, CatalogError::EmptyQuery("search term")));

        let err = client.fetch_detail("").await.unwrap_err();
        assert!(matches!(err, CatalogError::EmptyQuery("movie id")));
    }
}
