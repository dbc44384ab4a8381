//! Cache domain - response cache over a pluggable key-value store

mod response_cache;
mod store;

pub use response_cache::{ResponseCache, DEFAULT_MAX_ENTRIES};
pub use store::CacheStore;

#[cfg(test)]
pub use store::mock::MockCacheStore;
