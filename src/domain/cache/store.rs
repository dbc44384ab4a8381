//! Cache store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Key-value storage backend for cached responses.
///
/// Values are plain strings. Implementations decide where they live
/// (process memory, a file on disk, ...); eviction policy belongs to the
/// caller.
#[async_trait]
pub trait CacheStore: Send + Sync + Debug {
    /// Gets a value from the store
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Sets a value in the store, replacing any previous value
    async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Clears all entries from the store
    async fn clear(&self) -> Result<(), DomainError>;

    /// Returns the number of entries in the store
    async fn size(&self) -> Result<usize, DomainError>;
}
