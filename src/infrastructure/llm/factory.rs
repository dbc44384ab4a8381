use std::sync::Arc;

use tracing::info;

use super::http_client::HttpClient;
use super::{DeepSeekProvider, GeminiProvider};
use crate::config::{ProviderKind, ProvidersConfig};
use crate::domain::{CredentialProvider, DomainError, LlmProvider, PriorityProviderResolver};

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create a single provider from configuration
    pub fn create(
        kind: ProviderKind,
        config: &ProvidersConfig,
        http_client: HttpClient,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Arc<dyn LlmProvider> {
        match kind {
            ProviderKind::Gemini => Arc::new(
                GeminiProvider::with_base_url(http_client, credentials, &config.gemini.base_url)
                    .with_model(&config.gemini.model),
            ),
            ProviderKind::DeepSeek => Arc::new(
                DeepSeekProvider::with_base_url(
                    http_client,
                    credentials,
                    &config.deepseek.base_url,
                )
                .with_model(&config.deepseek.model)
                .with_temperature(config.deepseek.temperature),
            ),
        }
    }

    /// Build the ordered provider list used by the relay
    pub fn create_resolver(
        config: &ProvidersConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<PriorityProviderResolver, DomainError> {
        if config.priority.is_empty() {
            return Err(DomainError::configuration(
                "providers.priority must list at least one provider",
            ));
        }

        let http_client = HttpClient::from_timeout(config.timeout())?;
        let mut resolver = PriorityProviderResolver::default();

        for kind in &config.priority {
            resolver = resolver.with_provider(Self::create(
                *kind,
                config,
                http_client.clone(),
                credentials.clone(),
            ));
        }

        info!(priority = ?config.priority, "Configured upstream providers");

        Ok(resolver)
    }
}
