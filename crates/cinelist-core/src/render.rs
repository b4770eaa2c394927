//! Pure mapping from movie records to display regions.
//!
//! Nothing here touches storage or the network. A front end draws the
//! returned [`Region`] and [`Modal`] values however it likes.

use cinelist_models::{MovieDetail, MovieSummary};
use serde::Serialize;

pub const EMPTY_WATCHLIST_MESSAGE: &str = "Your watchlist is empty. Search for movies to add!";
pub const DETAILS_UNAVAILABLE_MESSAGE: &str = "Sorry, details not available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Details,
    AddToWatchlist,
    Remove,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Details => "Details",
            CardAction::AddToWatchlist => "Add to Watchlist",
            CardAction::Remove => "Remove",
        }
    }
}

/// One rendered movie. Every action targets `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub actions: Vec<CardAction>,
}

impl Card {
    fn from_summary(movie: &MovieSummary, placeholder: &str, actions: &[CardAction]) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
            poster_url: movie.poster_or(placeholder).to_string(),
            actions: actions.to_vec(),
        }
    }
}

/// Content of a display area (results grid or watchlist)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Region {
    Blank,
    Error(String),
    Placeholder(String),
    Cards(Vec<Card>),
}

impl Region {
    pub fn cards(&self) -> &[Card] {
        match self {
            Region::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Region::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Details overlay content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Modal {
    Detail(DetailView),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    pub year: String,
    pub rated: String,
    pub genre: String,
    pub director: String,
    pub cast: String,
    pub plot: String,
}

const RESULT_ACTIONS: [CardAction; 2] = [CardAction::Details, CardAction::AddToWatchlist];
const WATCHLIST_ACTIONS: [CardAction; 2] = [CardAction::Details, CardAction::Remove];

/// Search results: blank when there are none, otherwise one card per movie.
pub fn render_results(movies: &[MovieSummary], placeholder: &str) -> Region {
    if movies.is_empty() {
        return Region::Blank;
    }
    Region::Cards(
        movies
            .iter()
            .map(|m| Card::from_summary(m, placeholder, &RESULT_ACTIONS))
            .collect(),
    )
}

/// Replaces the results region when a search fails
pub fn render_search_error(message: &str) -> Region {
    Region::Error(message.to_string())
}

/// Saved movies, or the empty-state message.
pub fn render_watchlist(movies: &[MovieSummary], placeholder: &str) -> Region {
    if movies.is_empty() {
        return Region::Placeholder(EMPTY_WATCHLIST_MESSAGE.to_string());
    }
    Region::Cards(
        movies
            .iter()
            .map(|m| Card::from_summary(m, placeholder, &WATCHLIST_ACTIONS))
            .collect(),
    )
}

pub fn render_modal(detail: Option<&MovieDetail>, placeholder: &str) -> Modal {
    match detail {
        None => Modal::Unavailable(DETAILS_UNAVAILABLE_MESSAGE.to_string()),
        Some(d) => Modal::Detail(DetailView {
            id: d.id.clone(),
            title: d.title.clone(),
            poster_url: d.poster_url().unwrap_or(placeholder).to_string(),
            year: d.year.clone(),
            rated: d.rated.clone(),
            genre: d.genre.clone(),
            director: d.director.clone(),
            cast: d.cast.clone(),
            plot: d.plot.clone(),
        }),
    }
}
