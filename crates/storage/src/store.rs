//! JSON-file-backed key-value store.
//!
//! The stand-in for the browser's local storage: one JSON document per
//! key, written under a root directory. Values are whole documents; there
//! are no partial updates and no cross-key transactions.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};

/// A directory of JSON documents, addressed by key.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serialize `value` under `key`, replacing any previous document.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read and deserialize the document under `key`.
    ///
    /// A missing key is `Ok(None)`; a present-but-corrupt document is an
    /// error, not a silent `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key)?;
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Delete the document under `key`; deleting a missing key is fine.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Delete every document in the store.
    pub fn clear(&self) -> Result<()> {
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        count: u32,
        label: String,
    }

    fn open_temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("store")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_set_get_roundtrip() {
        let (_dir, store) = open_temp_store();

        let doc = Doc {
            count: 3,
            label: "hello".to_string(),
        };
        store.set("doc", &doc).unwrap();

        let restored: Option<Doc> = store.get("doc").unwrap();
        assert_eq!(restored, Some(doc));
    }

    #[test]
    fn test_missing_key_is_none() {
        let (_dir, store) = open_temp_store();
        let value: Option<Doc> = store.get("absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let (_dir, store) = open_temp_store();

        store.set("n", &1u32).unwrap();
        store.set("n", &2u32).unwrap();

        assert_eq!(store.get::<u32>("n").unwrap(), Some(2));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = open_temp_store();

        store.set("n", &1u32).unwrap();
        store.remove("n").unwrap();
        store.remove("n").unwrap();

        assert_eq!(store.get::<u32>("n").unwrap(), None);
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let (_dir, store) = open_temp_store();

        store.set("a", &1u32).unwrap();
        store.set("b", &2u32).unwrap();
        store.clear().unwrap();

        assert_eq!(store.get::<u32>("a").unwrap(), None);
        assert_eq!(store.get::<u32>("b").unwrap(), None);
    }

    #[test]
    fn test_path_traversal_keys_rejected() {
        let (_dir, store) = open_temp_store();

        assert!(store.set("../escape", &1u32).is_err());
        assert!(store.set("a/b", &1u32).is_err());
        assert!(store.set("", &1u32).is_err());
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let (_dir, store) = open_temp_store();

        std::fs::write(store.root().join("bad.json"), "{not json").unwrap();
        let result = store.get::<Doc>("bad");
        assert!(matches!(result, Err(StorageError::JsonError(_))));
    }
}
