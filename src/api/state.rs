//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::RelayService;

/// Shared, immutable handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
}

impl AppState {
    pub fn new(relay: RelayService) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}
