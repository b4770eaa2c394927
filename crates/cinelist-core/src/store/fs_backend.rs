use super::backend::StorageBackend;
use crate::error::{StoreError, StoreResult};
use std::path::PathBuf;
use tracing::debug;

/// One JSON file per key inside a data directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding `key`
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::Backend(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        // Invalid UTF-8 comes back mangled rather than as an error, so the
        // store treats it like any other unparseable blob
        let bytes = std::fs::read(&path)?;
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path)?;

        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.get_item("watchlist").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_overwrites() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("nested"));

        backend.set_item("watchlist", "[]").unwrap();
        assert_eq!(backend.get_item("watchlist").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/watchlist.json").exists());
        assert!(!dir.path().join("nested/watchlist.tmp").exists());

        backend.set_item("watchlist", "[1]").unwrap();
        assert_eq!(backend.get_item("watchlist").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_non_utf8_file_is_read_lossily() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("watchlist.json"), [0xff, 0xfe, b'[', b']']).unwrap();
        let backend = FileBackend::new(dir.path());

        let raw = backend.get_item("watchlist").unwrap().unwrap();
        assert!(raw.ends_with("[]"));
        assert!(raw.starts_with('\u{FFFD}'));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());

        assert!(backend.set_item("../escape", "x").is_err());
        assert!(backend.get_item("").is_err());
        assert!(backend.path_for(".hidden").is_err());
        assert!(backend.path_for("watchlist.bak").is_ok());
    }
}
