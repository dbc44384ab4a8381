//! Response cache keyed by request fingerprint

use std::sync::Arc;

use tracing::{debug, warn};

use super::CacheStore;
use crate::domain::DomainError;

/// Default number of entries after which the store is wiped
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Fingerprint → response text cache.
///
/// When the store already holds `max_entries` entries, the next insert
/// clears it entirely before writing, so the store then holds exactly one
/// entry. There is no TTL.
///
/// Store failures never reach the caller: a failed read is a miss and a
/// failed write is dropped, both with a warning.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self::with_max_entries(store, DEFAULT_MAX_ENTRIES)
    }

    /// `max_entries` is clamped to at least 1
    pub fn with_max_entries(store: Arc<dyn CacheStore>, max_entries: usize) -> Self {
        Self {
            store,
            max_entries: max_entries.max(1),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub async fn get(&self, fingerprint: &str) -> Option<String> {
        match self.store.get_raw(fingerprint).await {
            Ok(hit) => {
                debug!(hit = hit.is_some(), "Response cache lookup");
                hit
            }
            Err(e) => {
                warn!(error = %e, "Cache read error");
                None
            }
        }
    }

    pub async fn set(&self, fingerprint: &str, text: &str) {
        if let Err(e) = self.try_set(fingerprint, text).await {
            warn!(error = %e, "Cache write error");
        }
    }

    async fn try_set(&self, fingerprint: &str, text: &str) -> Result<(), DomainError> {
        let size = self.store.size().await?;

        if size >= self.max_entries {
            debug!(size, max_entries = self.max_entries, "Response cache full, clearing");
            self.store.clear().await?;
        }

        self.store.set_raw(fingerprint, text).await
    }

    pub async fn clear(&self) -> Result<(), DomainError> {
        self.store.clear().await
    }

    pub async fn len(&self) -> Result<usize, DomainError> {
        self.store.size().await
    }

    pub async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }
}
