//! Smart-home advisor
//!
//! A relay server that turns typed smart-home questions (setup plans,
//! device compatibility, troubleshooting) into prompts for an upstream LLM,
//! plus a command-line client with a fingerprint-keyed response cache.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use client::{AdviceClient, HttpRelayTransport};
use config::ClientConfig;
use domain::{CacheStore, CredentialProvider, ResponseCache};
use infrastructure::{
    cache::{InMemoryStore, JsonFileStore},
    credentials::EnvCredentialProvider,
    llm::LlmProviderFactory,
    services::RelayService,
};
use tracing::info;

/// Create the relay server state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let credentials: Arc<dyn CredentialProvider> =
        Arc::new(EnvCredentialProvider::from_config(&config.providers));
    let resolver = LlmProviderFactory::create_resolver(&config.providers, credentials)?;

    Ok(AppState::new(RelayService::new(Arc::new(resolver))))
}

/// Open the response cache described by the client configuration
pub async fn create_response_cache(config: &ClientConfig) -> ResponseCache {
    let store: Arc<dyn CacheStore> = match &config.cache_path {
        Some(path) if !path.trim().is_empty() => {
            info!(path = %path, "Using file-backed response cache");
            Arc::new(JsonFileStore::open(path).await)
        }
        _ => Arc::new(InMemoryStore::new()),
    };

    ResponseCache::with_max_entries(store, config.cache_max_entries)
}

/// Create the advice client for the configured relay endpoint
pub async fn create_advice_client(config: &ClientConfig, use_cache: bool) -> AdviceClient {
    let transport = Arc::new(HttpRelayTransport::new(&config.endpoint));
    let client = AdviceClient::new(transport, create_response_cache(config).await);

    if use_cache {
        client
    } else {
        client.without_cache_lookup()
    }
}
