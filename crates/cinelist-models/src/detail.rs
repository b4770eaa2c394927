use serde::{Deserialize, Serialize};
use crate::summary::{not_available, poster_url, MovieSummary};

/// Extended movie record shown only in the details modal. Never persisted.
///
/// Every descriptive field falls back to the catalog's "N/A" sentinel when the
/// response omits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieDetail {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default = "not_available")]
    pub year: String,
    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String,
    #[serde(rename = "Rated", default = "not_available")]
    pub rated: String,
    #[serde(rename = "Genre", default = "not_available")]
    pub genre: String,
    #[serde(rename = "Director", default = "not_available")]
    pub director: String,
    #[serde(rename = "Actors", default = "not_available")]
    pub cast: String,
    #[serde(rename = "Plot", default = "not_available")]
    pub plot: String,
}

impl MovieDetail {
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(&self.poster)
    }

    /// Reduce to the card-sized record stored in the watchlist
    pub fn summary(&self) -> MovieSummary {
        MovieSummary::new(
            self.id.clone(),
            self.title.clone(),
            self.year.clone(),
            self.poster.clone(),
        )
    }
}
