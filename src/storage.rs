//! Persistent key/value store
//!
//! The page persists two things: the explicit theme preference and the
//! contact submission history. Both live in a single JSON object file under
//! the platform data directory, keyed by string. Values are themselves
//! strings so the stored encodings stay stable across versions: `theme`
//! holds "light" or "dark", `contact_history` holds a JSON-serialized array
//! of submission records.
//!
//! Persistence is best effort: a missing or unparseable file reads as empty
//! and write failures never surface to the user.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

/// Storage key for the explicit theme preference
pub const THEME_KEY: &str = "theme";

/// Storage key for the serialized submission history
pub const HISTORY_KEY: &str = "contact_history";

/// Key/value persistence seam. The shell uses [`FileStore`]; tests use
/// [`MemStore`].
pub trait KvStore {
    /// Read a value. Absent keys and unreadable backends both return None.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON-file-backed store
pub struct FileStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store, creating the data directory if needed. An existing
    /// file that fails to parse is treated as empty rather than an error.
    pub fn new() -> Result<Self> {
        let dir = Self::data_dir();
        std::fs::create_dir_all(&dir)?;
        Ok(Self::open_at(dir.join("storage.json")))
    }

    /// Open a store at an explicit path
    pub fn open_at(path: PathBuf) -> Self {
        let map = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "store file unreadable, starting empty");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        FileStore { path, map }
    }

    fn data_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("foliotui")
        } else {
            // Fallback to the temp dir if no data dir is available
            let mut path = std::env::temp_dir();
            path.push("foliotui");
            path
        }
    }

    fn flush(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.map)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemStore {
    map: BTreeMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, for tests that start from existing state
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.map.insert(key.to_string(), value.to_string());
        self
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_store_round_trip() {
        let mut store = MemStore::new();
        assert_eq!(store.get(THEME_KEY), None);

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_mem_store_seeding() {
        let store = MemStore::new().with(HISTORY_KEY, "[]");
        assert_eq!(store.get(HISTORY_KEY), Some("[]".to_string()));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open_at(path.clone());
        store.set(THEME_KEY, "dark").unwrap();
        store.set(HISTORY_KEY, "[]").unwrap();

        // A fresh handle sees the persisted values
        let reopened = FileStore::open_at(path);
        assert_eq!(reopened.get(THEME_KEY), Some("dark".to_string()));
        assert_eq!(reopened.get(HISTORY_KEY), Some("[]".to_string()));
    }

    #[test]
    fn test_file_store_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let store = FileStore::open_at(path);
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open_at(dir.path().join("missing.json"));
        assert_eq!(store.get(HISTORY_KEY), None);
    }
}
