use crate::directory::Directory;
use crate::error::ControllerError;
use crate::render::{render_modal, render_results, render_search_error, render_watchlist, Modal, Region};
use crate::store::{StorageBackend, WatchlistStore};
use cinelist_catalog::MovieCatalog;
use cinelist_models::MovieSummary;
use std::collections::HashMap;
use tracing::debug;

/// What the results region holds. A search in flight is the span of the
/// awaited `submit_search` call, which borrows the controller mutably, so
/// there is no separate state for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    ResultsShown,
}

/// Where a click on the open details overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed area around the content; closes the modal
    Backdrop,
    Content,
}

/// Everything currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub results: Region,
    pub watchlist: Region,
    pub modal: Option<Modal>,
}

/// Wires user actions to the directory, the watchlist store and the renderer.
///
/// Searches are awaited one at a time through `&mut self`, so the most
/// recently completed search owns the results region. Nothing is cancelled.
pub struct Controller<C: MovieCatalog, B: StorageBackend> {
    directory: Directory<C>,
    store: WatchlistStore<B>,
    placeholder: String,
    results: Vec<MovieSummary>,
    result_index: HashMap<String, usize>,
    state: SearchState,
    view: View,
}

impl<C: MovieCatalog, B: StorageBackend> Controller<C, B> {
    /// Starts idle with the saved watchlist already rendered.
    pub fn new(directory: Directory<C>, store: WatchlistStore<B>, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let watchlist = render_watchlist(store.snapshot(), &placeholder);
        Self {
            directory,
            store,
            placeholder,
            results: Vec::new(),
            result_index: HashMap::new(),
            state: SearchState::Idle,
            view: View {
                results: Region::Blank,
                watchlist,
                modal: None,
            },
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn store(&self) -> &WatchlistStore<B> {
        &self.store
    }

    pub fn is_modal_open(&self) -> bool {
        self.view.modal.is_some()
    }

    /// Movies behind the currently displayed result cards
    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    /// Run a search. Blank terms are ignored and return `false`.
    pub async fn submit_search(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }

        let outcome = self.directory.search(term).await;

        self.view.results = match &outcome.error {
            Some(message) => render_search_error(message),
            None => render_results(&outcome.movies, &self.placeholder),
        };
        self.result_index = outcome
            .movies
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id.clone(), i))
            .collect();
        self.results = outcome.movies;
        self.state = SearchState::ResultsShown;

        debug!("Displaying {} results for '{}'", self.results.len(), term);
        true
    }

    /// "Add to Watchlist" on a result card. The record comes from the
    /// displayed result set, so the id must be one of the current results.
    pub fn add_to_watchlist(&mut self, id: &str) -> Result<bool, ControllerError> {
        let movie = self
            .result_index
            .get(id)
            .and_then(|&i| self.results.get(i))
            .cloned()
            .ok_or_else(|| ControllerError::UnknownResult(id.to_string()))?;

        let added = self.store.add(movie)?;
        if added {
            self.refresh_watchlist();
        }
        Ok(added)
    }

    /// "Remove" on a watchlist card
    pub fn remove_from_watchlist(&mut self, id: &str) -> Result<bool, ControllerError> {
        let removed = self.store.remove(id)?;
        self.refresh_watchlist();
        Ok(removed)
    }

    pub fn clear_watchlist(&mut self) -> Result<usize, ControllerError> {
        let removed = self.store.clear()?;
        self.refresh_watchlist();
        Ok(removed)
    }

    /// "Details" on any card: open the modal with the record or the fallback.
    pub async fn show_details(&mut self, id: &str) {
        let id = id.trim();
        let detail = if id.is_empty() {
            None
        } else {
            self.directory.fetch_detail(id).await
        };
        self.view.modal = Some(render_modal(detail.as_ref(), &self.placeholder));
    }

    /// The modal's close control
    pub fn close_modal(&mut self) {
        self.view.modal = None;
    }

    pub fn click_modal(&mut self, target: ModalClick) {
        if target == ModalClick::Backdrop {
            self.close_modal();
        }
    }

    /// Re-render the watchlist region from the store
    pub fn refresh_watchlist(&mut self) {
        self.view.watchlist = render_watchlist(self.store.snapshot(), &self.placeholder);
    }
}

#[cfg(test)]
mod tests;
