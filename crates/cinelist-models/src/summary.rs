use serde::{Deserialize, Serialize};

/// Sentinel the catalog uses for any missing field ("not available").
pub const NOT_AVAILABLE: &str = "N/A";

/// Minimal movie record shown in result and watchlist cards.
///
/// Field names follow the catalog's JSON (`imdbID`, `Title`, ...) so the same
/// type deserializes search hits and persisted watchlist entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String, // "N/A" when the catalog has no image
}

impl MovieSummary {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster: poster.into(),
        }
    }

    /// Poster URL, or `None` when the catalog reported no image
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(&self.poster)
    }

    /// Poster URL with the sentinel replaced by `placeholder`
    pub fn poster_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.poster_url().unwrap_or(placeholder)
    }
}

/// Interpret a raw poster value, treating the sentinel and blanks as missing.
pub fn poster_url(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        None
    } else {
        Some(trimmed)
    }
}

pub(crate) fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}
