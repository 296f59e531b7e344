use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::KeyValueStore;

/// File-backed key-value store.
///
/// The whole map lives in one JSON document on disk, mirroring the key
/// layout the game's web deployment keeps in browser local storage. The
/// document is loaded once at open time and rewritten atomically (temp file
/// + rename) on every mutation, so a crash mid-write leaves the previous
/// document intact. Suited to CLI use and single-host deployments; not a
/// database.
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Open the store at `path`, creating an empty one if the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "store file absent, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        let previous = map.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&map) {
            // Keep memory and disk in agreement: undo the insert.
            match previous {
                Some(v) => map.insert(key.to_string(), v),
                None => map.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let mut map = self.entries.write().expect("lock poisoned");
        let previous = match map.remove(key) {
            Some(v) => v,
            None => return Ok(false),
        };
        if let Err(e) = self.persist(&map) {
            map.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(true)
    }
}

impl std::fmt::Debug for FileKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKeyValueStore")
            .field("path", &self.path)
            .field("key_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileKeyValueStore {
        FileKeyValueStore::open(dir.path().join("store.json")).unwrap()
    }

    // -----------------------------------------------------------------------
    // Core operations
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.put("player_1", "{\"money\":1000}").unwrap();
        assert_eq!(
            store.get("player_1").unwrap(),
            Some("{\"money\":1000}".to_string())
        );
    }

    #[test]
    fn open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert!(store.get("anything").unwrap().is_none());
    }

    #[test]
    fn remove_present_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.put("k", "v").unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
    }

    // -----------------------------------------------------------------------
    // Durability across reopen
    // -----------------------------------------------------------------------

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = FileKeyValueStore::open(&path).unwrap();
            store.put("a", "1").unwrap();
            store.put("b", "2").unwrap();
            store.remove("a").unwrap();
        }

        let reopened = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        assert!(reopened.get("a").unwrap().is_none());
        assert_eq!(reopened.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn overwrite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = FileKeyValueStore::open(&path).unwrap();
            store.put("k", "first").unwrap();
            store.put("k", "second").unwrap();
        }

        let reopened = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), Some("second".to_string()));
    }

    // -----------------------------------------------------------------------
    // Corruption handling
    // -----------------------------------------------------------------------

    #[test]
    fn corrupt_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = FileKeyValueStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn on_disk_format_is_a_json_map() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.put("game_sessions", "[]").unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let doc: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc.get("game_sessions"), Some(&"[]".to_string()));
    }
}
