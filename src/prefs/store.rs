//! Durable key/value storage for user preferences.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::{read_file_if_exists, write_file_atomic};
use crate::paths;

/// String key/value storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// A JSON object on disk, rewritten on every `set`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the storefront root
    pub fn open_default() -> Self {
        Self::new(paths::storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match read_file_if_exists(&self.path)? {
            Some(content) if !content.trim().is_empty() => Ok(serde_json::from_str(&content)?),
            _ => Ok(BTreeMap::new()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&entries)?;
        write_file_atomic(&self.path, &content)
    }
}

/// In-memory store; contents are lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut store = FileStore::new(&path);

        store.set("darkMode", "enabled").unwrap();
        store.set("other", "x").unwrap();
        store.set("darkMode", "disabled").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("disabled"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(FileStore::new(&path).get("darkMode").is_err());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
