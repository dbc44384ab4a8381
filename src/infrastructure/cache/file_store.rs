//! JSON file backed cache store
//!
//! Plays the part of browser local storage for the command-line client:
//! entries survive between runs and the whole map is rewritten on every
//! change. A change only reaches memory once the file write succeeded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::cache::CacheStore;
use crate::domain::DomainError;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store, loading existing entries.
    ///
    /// A missing file starts empty; a corrupt or unreadable one is logged and
    /// also starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path).await;

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    async fn load(path: &Path) -> HashMap<String, String> {
        match tokio::fs::read_to_string(path).await {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cache file is corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read cache file, starting empty");
                HashMap::new()
            }
        }
    }

    async fn save(&self, entries: &HashMap<String, String>) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::cache(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let data = serde_json::to_string_pretty(entries)
            .map_err(|e| DomainError::cache(format!("Failed to serialize cache: {}", e)))?;

        tokio::fs::write(&self.path, data).await.map_err(|e| {
            DomainError::cache(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl CacheStore for JsonFileStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());

        self.save(&updated).await?;
        *entries = updated;
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;

        self.save(&HashMap::new()).await?;
        entries.clear();
        Ok(())
    }

    async fn size(&self) -> Result<usize, DomainError> {
        Ok(self.entries.lock().await.len())
    }
}
