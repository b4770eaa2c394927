use async_trait::async_trait;
use cinelist_models::{MovieDetail, MovieSummary};
use crate::error::CatalogError;

/// Read-only access to a remote movie catalog.
///
/// Every call is a fresh round trip: no caching, retries, or timeouts.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    // Source metadata
    fn catalog_name(&self) -> &str;

    /// Search by free-text term. Zero matches is an error (`NoResults`).
    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Fetch the full record for one catalog id
    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, CatalogError>;
}
