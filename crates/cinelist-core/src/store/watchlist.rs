use super::backend::StorageBackend;
use crate::error::StoreResult;
use cinelist_models::MovieSummary;
use tracing::{debug, info, warn};

/// Storage key holding the serialized watchlist
pub const WATCHLIST_KEY: &str = "watchlist";
/// Where an unreadable watchlist blob is copied before starting fresh
pub const WATCHLIST_BACKUP_KEY: &str = "watchlist.bak";

pub fn serialize_watchlist(movies: &[MovieSummary]) -> StoreResult<String> {
    Ok(serde_json::to_string(movies)?)
}

pub fn deserialize_watchlist(raw: &str) -> StoreResult<Vec<MovieSummary>> {
    Ok(serde_json::from_str(raw)?)
}

/// The user's saved movies, in insertion order and unique by id.
///
/// Every mutation rewrites the whole sequence under [`WATCHLIST_KEY`] before
/// returning, so memory and storage agree whenever a call completes. If the
/// write fails the in-memory change is undone and the error returned.
pub struct WatchlistStore<B: StorageBackend> {
    backend: B,
    movies: Vec<MovieSummary>,
}

impl<B: StorageBackend> WatchlistStore<B> {
    /// Hydrate from storage. A missing key is an empty watchlist; a blob that
    /// does not parse is backed up and replaced by an empty watchlist.
    ///
    /// Duplicate ids already in storage are kept as-is.
    pub fn load(backend: B) -> StoreResult<Self> {
        let movies = match backend.get_item(WATCHLIST_KEY)? {
            None => {
                debug!("No saved watchlist, starting empty");
                Vec::new()
            }
            Some(raw) => match deserialize_watchlist(&raw) {
                Ok(movies) => {
                    info!("Loaded watchlist: {} movies", movies.len());
                    movies
                }
                Err(e) => {
                    if let Err(backup_err) = backend.set_item(WATCHLIST_BACKUP_KEY, &raw) {
                        warn!(
                            "Saved watchlist is unreadable ({}) and could not be backed up: {}. Starting with an empty watchlist.",
                            e, backup_err
                        );
                    } else {
                        warn!(
                            "Saved watchlist is unreadable ({}). Backed it up to '{}' and starting with an empty watchlist.",
                            e, WATCHLIST_BACKUP_KEY
                        );
                    }
                    Vec::new()
                }
            },
        };

        Ok(Self { backend, movies })
    }

    /// Append `movie` unless its id is already saved. Returns whether it was added.
    pub fn add(&mut self, movie: MovieSummary) -> StoreResult<bool> {
        if self.contains(&movie.id) {
            debug!("{} already in watchlist, skipping", movie.id);
            return Ok(false);
        }

        let id = movie.id.clone();
        self.movies.push(movie);
        if let Err(e) = self.persist() {
            self.movies.pop();
            return Err(e);
        }

        info!("Added {} to watchlist ({} movies)", id, self.movies.len());
        Ok(true)
    }

    /// Drop every record with `id`. Returns whether anything was removed;
    /// an absent id is a no-op and does not touch storage.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        if !self.contains(id) {
            debug!("{} not in watchlist, nothing to remove", id);
            return Ok(false);
        }

        let previous = self.movies.clone();
        self.movies.retain(|m| m.id != id);
        if let Err(e) = self.persist() {
            self.movies = previous;
            return Err(e);
        }

        info!("Removed {} from watchlist ({} movies)", id, self.movies.len());
        Ok(true)
    }

    /// Empty the watchlist and persist the empty sequence
    pub fn clear(&mut self) -> StoreResult<usize> {
        let previous = std::mem::take(&mut self.movies);
        if let Err(e) = self.persist() {
            self.movies = previous;
            return Err(e);
        }
        info!("Cleared watchlist ({} movies removed)", previous.len());
        Ok(previous.len())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> &[MovieSummary] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn persist(&self) -> StoreResult<()> {
        let serialized = serialize_watchlist(&self.movies)?;
        self.backend.set_item(WATCHLIST_KEY, &serialized)
    }
}
