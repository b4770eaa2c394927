use cinelist_catalog::MovieCatalog;
use cinelist_models::{MovieDetail, MovieSummary};
use tracing::{debug, error};

/// Shown in place of search results when anything goes wrong
pub const SEARCH_ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Result of a search as the UI sees it: movies, or an inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub movies: Vec<MovieSummary>,
    pub error: Option<String>,
}

impl SearchOutcome {
    fn failed() -> Self {
        Self {
            movies: Vec::new(),
            error: Some(SEARCH_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Boundary between the catalog and the UI.
///
/// Catalog failures stop here: they are logged with their kind and turned
/// into an empty result with a message (search) or `None` (details).
pub struct Directory<C: MovieCatalog> {
    catalog: C,
}

impl<C: MovieCatalog> Directory<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub async fn search(&self, term: &str) -> SearchOutcome {
        match self.catalog.search_movies(term).await {
            Ok(movies) => {
                debug!(catalog = self.catalog.catalog_name(), count = movies.len(), "Search completed");
                SearchOutcome { movies, error: None }
            }
            Err(e) => {
                error!(catalog = self.catalog.catalog_name(), kind = e.kind(), error = %e, "Fetch error");
                SearchOutcome::failed()
            }
        }
    }

    pub async fn fetch_detail(&self, id: &str) -> Option<MovieDetail> {
        match self.catalog.fetch_detail(id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                error!(catalog = self.catalog.catalog_name(), kind = e.kind(), error = %e, "Details fetch error");
                None
            }
        }
    }
}
