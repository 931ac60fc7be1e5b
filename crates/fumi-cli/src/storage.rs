//! File-backed key-value store
//!
//! All keys live in one JSON object at ~/.config/fumi/storage.json.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fumi::{DomainError, KeyValueStore};

use crate::config::CONFIG_DIR;

const STORAGE_FILE: &str = "storage.json";

/// Local storage persisted as a JSON object
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store in the user's config directory
    pub fn open_default() -> Result<Self> {
        let path = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR)
            .join(STORAGE_FILE);
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, DomainError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| DomainError::Storage(format!("Failed to read {:?}: {}", self.path, e)))?;

        serde_json::from_str(&content)
            .map_err(|e| DomainError::Storage(format!("Failed to parse {:?}: {}", self.path, e)))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                DomainError::Storage(format!("Failed to create directory {:?}: {}", dir, e))
            })?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| DomainError::Storage(format!("Failed to serialize storage: {}", e)))?;

        fs::write(&self.path, content)
            .map_err(|e| DomainError::Storage(format!("Failed to write {:?}: {}", self.path, e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self.read_all().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable storage: {}", e);
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        match self.read_all() {
            Ok(mut entries) => {
                if entries.remove(key).is_some() {
                    self.write_all(&entries)?;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable storage: {}", e);
                self.write_all(&BTreeMap::new())
            }
        }
    }
}
