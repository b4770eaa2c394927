use async_trait::async_trait;
use cinelist_catalog::{CatalogError, MovieCatalog};
use cinelist_models::{MovieDetail, MovieSummary};
use cinelist_catalog::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted catalog for tests. Unknown terms behave like OMDb's
/// "Movie not found!" and unknown ids like "Incorrect IMDb ID.".
#[derive(Default)]
pub struct FakeCatalog {
    searches: HashMap<String, Vec<MovieSummary>>,
    details: HashMap<String, MovieDetail>,
    failing_status: Option<StatusCode>,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str, movies: Vec<MovieSummary>) -> Self {
        self.searches.insert(term.to_string(), movies);
        self
    }

    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    /// Every call fails with this HTTP status
    pub fn failing_with(mut self, status: StatusCode) -> Self {
        self.failing_status = Some(status);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    fn catalog_name(&self) -> &str {
        "fake"
    }

    async fn search_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.failing_status {
            return Err(CatalogError::Transport { status });
        }
        self.searches
            .get(term)
            .cloned()
            .ok_or_else(|| CatalogError::NoResults("Movie not found!".to_string()))
    }

    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.failing_status {
            return Err(CatalogError::Transport { status });
        }
        self.details.get(id).cloned().ok_or_else(|| CatalogError::DetailUnavailable {
            id: id.to_string(),
            reason: "Incorrect IMDb ID.".to_string(),
        })
    }
}

pub fn summary(id: &str, title: &str, year: &str, poster: &str) -> MovieSummary {
    MovieSummary::new(id, title, year, poster)
}

pub fn detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        id: id.to_string(),
        title: title.to_string(),
        year: "2005".to_string(),
        poster: "N/A".to_string(),
        rated: "PG-13".to_string(),
        genre: "Action".to_string(),
        director: "Christopher Nolan".to_string(),
        cast: "Christian Bale".to_string(),
        plot: "A caped crusader.".to_string(),
    }
}
