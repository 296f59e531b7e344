use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::KeyValueStore;

/// In-memory, HashMap-based key-value store.
///
/// Intended for tests and embedding. All entries are held in memory behind a
/// `RwLock` for safe concurrent access. Values are cloned on read.
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all keys in the store.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let mut map = self.entries.write().expect("lock poisoned");
        Ok(map.remove(key).is_some())
    }
}

impl std::fmt::Debug for InMemoryKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryKeyValueStore")
            .field("key_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Core operations
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let store = InMemoryKeyValueStore::new();
        store.put("player_1", "{\"level\":1}").unwrap();
        assert_eq!(
            store.get("player_1").unwrap(),
            Some("{\"level\":1}".to_string())
        );
    }

    #[test]
    fn get_missing_key_returns_none() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn put_overwrites_last_write_wins() {
        let store = InMemoryKeyValueStore::new();
        store.put("k", "first").unwrap();
        store.put("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("second".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_present_key() {
        let store = InMemoryKeyValueStore::new();
        store.put("k", "v").unwrap();
        assert!(store.remove("k").unwrap()); // was present
        assert!(store.get("k").unwrap().is_none()); // now gone
        assert!(!store.remove("k").unwrap()); // second remove = false
    }

    #[test]
    fn remove_missing_key() {
        let store = InMemoryKeyValueStore::new();
        assert!(!store.remove("never-written").unwrap());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.put("a", "1").unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryKeyValueStore::new();
        store.put("a", "1").unwrap();
        store.put("b", "2").unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn keys_are_sorted() {
        let store = InMemoryKeyValueStore::new();
        store.put("b", "2").unwrap();
        store.put("a", "1").unwrap();
        store.put("c", "3").unwrap();
        assert_eq!(store.keys(), vec!["a", "b", "c"]);
    }

    // -----------------------------------------------------------------------
    // Concurrent access safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryKeyValueStore::new());
        store.put("shared", "data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let value = store.get("shared").unwrap();
                    assert_eq!(value, Some("data".to_string()));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    // -----------------------------------------------------------------------
    // Default / Debug
    // -----------------------------------------------------------------------

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryKeyValueStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryKeyValueStore::new();
        store.put("x", "y").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryKeyValueStore"));
        assert!(debug.contains("key_count"));
    }
}
