// File: src/config.rs
// Purpose: Configuration parsing from registro.toml

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::storage::filesystem::FilesystemStore;
use crate::storage::memory::MemoryStore;
use crate::storage::KeyValueStore;
use crate::{DEFAULT_CONFIRMATION_VIEW, DEFAULT_STORAGE_KEY};

/// Form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Key the user record is stored under (default: "userData")
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// View to navigate to after a successful submit (default: "confirmacion.html")
    #[serde(default = "default_confirmation_view")]
    pub confirmation_view: String,

    #[serde(default)]
    pub storage: StorageBackend,
}

/// Storage backend configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory store (non-persistent)
    #[default]
    Memory,

    /// One file per key (persistent, single-instance)
    Filesystem(FilesystemConfig),
}

/// Filesystem store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemConfig {
    /// Store directory path
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_confirmation_view() -> String {
    DEFAULT_CONFIRMATION_VIEW.to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".registro/store")
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            confirmation_view: default_confirmation_view(),
            storage: StorageBackend::default(),
        }
    }
}

impl Default for FilesystemConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./registro.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("registro.toml")
    }

    /// Parse configuration from TOML text; blank text gives the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(content).context("Invalid registro config")?;
        Ok(config)
    }
}

impl StorageBackend {
    /// Open the configured store
    pub fn open(&self) -> Result<Box<dyn KeyValueStore>> {
        match self {
            StorageBackend::Memory => Ok(Box::new(MemoryStore::new())),
            StorageBackend::Filesystem(config) => {
                Ok(Box::new(FilesystemStore::new(config.clone())?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.storage_key, "userData");
        assert_eq!(config.confirmation_view, "confirmacion.html");
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_empty_config() {
        let config = FormConfig::from_toml_str("").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_filesystem_backend() {
        let toml = r#"
            storage_key = "registro"
            confirmation_view = "/bienvenida"

            [storage]
            type = "filesystem"
            path = "/var/lib/registro"
        "#;
        let config = FormConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.storage_key, "registro");
        assert_eq!(config.confirmation_view, "/bienvenida");
        assert_eq!(
            config.storage,
            StorageBackend::Filesystem(FilesystemConfig {
                path: PathBuf::from("/var/lib/registro"),
            })
        );
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let toml = r#"
            [storage]
            type = "dragonfly"
        "#;
        assert!(FormConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = FormConfig::load(temp_dir.path().join("registro.toml")).unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_and_open_store() {
        let temp_dir = TempDir::new().unwrap();
        let store_dir = temp_dir.path().join("data");
        let config_path = temp_dir.path().join("registro.toml");
        fs::write(
            &config_path,
            format!(
                "[storage]\ntype = \"filesystem\"\npath = {:?}\n",
                store_dir.display().to_string()
            ),
        )
        .unwrap();

        let config = FormConfig::load(&config_path).unwrap();
        let store = config.storage.open().unwrap();
        assert_eq!(store.name(), "filesystem");
        assert!(store_dir.exists());
    }
}
