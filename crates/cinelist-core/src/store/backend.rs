use crate::error::StoreResult;

/// Durable key/value storage holding serialized blobs.
///
/// This trait handles where bytes live (disk vs memory); `WatchlistStore`
/// decides what goes in them.
pub trait StorageBackend {
    /// Read the value under `key`. `Ok(None)` when the key was never written.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value under `key`. Must not leave a partial value behind.
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}
