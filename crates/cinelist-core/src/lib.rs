pub mod controller;
pub mod directory;
pub mod error;
pub mod render;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use controller::{Controller, ModalClick, SearchState, View};
pub use directory::{Directory, SearchOutcome, SEARCH_ERROR_MESSAGE};
pub use error::{ControllerError, StoreError};
pub use render::{render_modal, render_results, render_search_error, render_watchlist, Card, CardAction, DetailView, Modal, Region};
pub use store::{FileBackend, MemBackend, StorageBackend, WatchlistStore};
