//! In-memory cache store using moka

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::cache::CacheStore;
use crate::domain::DomainError;

/// Process-local cache store.
///
/// The underlying moka cache is unbounded and has no TTL, so entries only
/// leave through `clear`; eviction is decided by
/// `ResponseCache`.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    cache: MokaCache<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            cache: MokaCache::builder().build(),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for InMemoryStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.cache.get(key).await)
    }

    async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.cache.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn size(&self) -> Result<usize, DomainError> {
        // entry_count is only exact once pending maintenance has run
        self.cache.run_pending_tasks().await;
        Ok(self.cache.entry_count() as usize)
    }
}
