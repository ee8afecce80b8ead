//! In-memory store

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{anyhow, Result};

use crate::storage::KeyValueStore;

/// In-memory store
///
/// Clones share the same map, so a caller can keep a handle to inspect what
/// the form wrote. Lost when the process ends.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>> {
        self.entries
            .read()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.entries
            .write()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.write()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write()?.remove(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic() {
        let store = MemoryStore::new();

        store.put("userData", "{\"nombre\":\"Ana\"}").unwrap();
        assert_eq!(
            store.get("userData").unwrap().as_deref(),
            Some("{\"nombre\":\"Ana\"}")
        );
        assert_eq!(store.get("missing").unwrap(), None);

        store.remove("userData").unwrap();
        assert_eq!(store.get("userData").unwrap(), None);
        store.remove("userData").unwrap();
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("userData", "first").unwrap();
        store.put("userData", "second").unwrap();

        assert_eq!(store.get("userData").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.put("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_poisoned_lock_is_an_error_everywhere() {
        let store = MemoryStore::new();
        store.put("userData", "{}").unwrap();

        let handle = store.clone();
        let result = std::thread::spawn(move || {
            let _guard = handle.entries.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(result.is_err());

        assert!(store.len().is_err());
        assert!(store.is_empty().is_err());
        assert!(store.get("userData").is_err());
        assert!(store.put("userData", "{}").is_err());
        assert!(store.remove("userData").is_err());
    }
}
