use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}

/// Key/value store holding one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Opens a store rooted at `root`. The directory is created on first
    /// write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads and deserializes `key`; a missing file is `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        log::debug!("Read {}", path.display());
        Ok(Some(value))
    }

    /// Reads `key`, or `T::default()` when it was never written.
    pub fn get_or_default<T: DeserializeOwned + Default>(
        &self,
        key: &str,
    ) -> Result<T, StoreError> {
        Ok(self.get(key)?.unwrap_or_default())
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        let content = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, content)?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Deletes `key`. Removing a missing key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::create_test_store;
    use std::collections::BTreeMap;

    #[test]
    fn test_missing_key_is_none() {
        let (_dir, store) = create_test_store();
        let value: Option<Vec<String>> = store.get("nothing-here").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        // Given a store with a value written under a key
        let (_dir, store) = create_test_store();
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1);
        store.set("counts", &map).unwrap();

        // When reading it back
        let read: BTreeMap<String, i32> = store.get("counts").unwrap().unwrap();

        // Then the value is unchanged and stored as <key>.json
        assert_eq!(read, map);
        assert!(store.root().join("counts.json").exists());
    }

    #[test]
    fn test_creates_missing_root_on_write() {
        let (dir, _) = create_test_store();
        let store = LocalStore::new(dir.path().join("nested").join("data"));
        store.set("k", &true).unwrap();
        assert_eq!(store.get::<bool>("k").unwrap(), Some(true));
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = create_test_store();
        store.set("gone", &1).unwrap();
        store.remove("gone").unwrap();
        assert!(store.get::<i32>("gone").unwrap().is_none());
        // Removing again is fine
        store.remove("gone").unwrap();
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let (_dir, store) = create_test_store();
        std::fs::write(store.root().join("broken.json"), "{not json").unwrap();
        let result = store.get::<i32>("broken");
        assert!(matches!(result, Err(StoreError::Json { .. })));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_dir, store) = create_test_store();
        assert!(matches!(
            store.set("../escape", &1),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get::<i32>(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn test_get_or_default() {
        let (_dir, store) = create_test_store();
        let v: Vec<u8> = store.get_or_default("empty").unwrap();
        assert!(v.is_empty());
    }
}
