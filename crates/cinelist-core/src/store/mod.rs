pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod watchlist;

pub use backend::StorageBackend;
pub use fs_backend::FileBackend;
pub use mem_backend::MemBackend;
pub use watchlist::{WatchlistStore, WATCHLIST_BACKUP_KEY, WATCHLIST_KEY, deserialize_watchlist, serialize_watchlist};
