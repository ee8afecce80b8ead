//! Filesystem store
//!
//! One file per key under a directory, so a stored record survives a
//! restart the way `localStorage` survives a page reload.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::FilesystemConfig;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FilesystemStore {
    config: FilesystemConfig,
}

impl FilesystemStore {
    /// Open the store, creating its directory if needed
    pub fn new(config: FilesystemConfig) -> Result<Self> {
        fs::create_dir_all(&config.path).with_context(|| {
            format!("Failed to create store directory: {:?}", config.path)
        })?;

        Ok(Self { config })
    }

    /// Get the file path for a key
    fn key_to_path(&self, key: &str) -> PathBuf {
        // Sanitize key to make it filesystem-safe
        let safe_key = key.replace(['/', '\\', ':'], "_");

        self.config.path.join(format!("{}.json", safe_key))
    }
}

impl KeyValueStore for FilesystemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read store file: {:?}", path))
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_to_path(key);

        fs::write(&path, value)
            .with_context(|| format!("Failed to write store file: {:?}", path))?;
        debug!(key, path = ?path, bytes = value.len(), "stored value");

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to delete store file: {:?}", path))
            }
        }
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> FilesystemConfig {
        FilesystemConfig {
            path: dir.path().join("store"),
        }
    }

    #[test]
    fn test_filesystem_store_basic() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(config_in(&temp_dir)).unwrap();

        store.put("userData", "{\"nombre\":\"Ana\"}").unwrap();
        assert_eq!(
            store.get("userData").unwrap().as_deref(),
            Some("{\"nombre\":\"Ana\"}")
        );

        store.remove("userData").unwrap();
        assert_eq!(store.get("userData").unwrap(), None);
        // removing twice is fine
        store.remove("userData").unwrap();
    }

    #[test]
    fn test_filesystem_store_persistence() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = FilesystemStore::new(config_in(&temp_dir)).unwrap();
            store.put("userData", "persistent").unwrap();
        }

        // New instance over the same directory (simulating a reload)
        let store = FilesystemStore::new(config_in(&temp_dir)).unwrap();
        assert_eq!(store.get("userData").unwrap().as_deref(), Some("persistent"));
    }

    #[test]
    fn test_keys_are_sanitized() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(config_in(&temp_dir)).unwrap();

        store.put("../escape:key", "x").unwrap();
        assert!(temp_dir.path().join("store").join(".._escape_key.json").exists());
        assert_eq!(store.get("../escape:key").unwrap().as_deref(), Some("x"));
    }
}
