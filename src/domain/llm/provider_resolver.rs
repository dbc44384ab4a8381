//! Provider resolver trait for choosing the upstream LLM provider

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use super::LlmProvider;
use crate::domain::DomainError;

/// Message returned when no provider has a credential configured
pub const NO_CREDENTIALS_MESSAGE: &str =
    "Server Configuration Error: No API keys configured (GOOGLE_API_KEY or DEEPSEEK_API_KEY).";

/// Trait for resolving the provider that should serve the next request.
#[async_trait]
pub trait ProviderResolver: Send + Sync + Debug {
    /// Resolve to an LLM provider instance.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn LlmProvider>)` - The provider to call
    /// * `Err(DomainError::Configuration)` - If no provider is usable
    async fn resolve(&self) -> Result<Arc<dyn LlmProvider>, DomainError>;

    /// Names of the providers that currently have a credential
    async fn available(&self) -> Vec<&'static str>;
}

/// Ordered list of providers; the first one with a credential wins.
///
/// Credentials are checked on every call, so keys added to or removed from
/// the environment take effect without a restart.
#[derive(Debug, Clone, Default)]
pub struct PriorityProviderResolver {
    providers: Vec<Arc<dyn LlmProvider>>,
}

impl PriorityProviderResolver {
    pub fn new(providers: Vec<Arc<dyn LlmProvider>>) -> Self {
        Self { providers }
    }

    /// Append a provider with lower priority than the existing ones
    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl ProviderResolver for PriorityProviderResolver {
    async fn resolve(&self) -> Result<Arc<dyn LlmProvider>, DomainError> {
        for provider in &self.providers {
            if provider.has_credential().await {
                return Ok(provider.clone());
            }
        }

        Err(DomainError::configuration(NO_CREDENTIALS_MESSAGE))
    }

    async fn available(&self) -> Vec<&'static str> {
        let mut names = Vec::new();

        for provider in &self.providers {
            if provider.has_credential().await {
                names.push(provider.provider_name());
            }
        }

        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;

    #[tokio::test]
    async fn test_prefers_first_provider_with_credential() {
        let resolver = PriorityProviderResolver::default()
            .with_provider(Arc::new(MockLlmProvider::new("gemini")))
            .with_provider(Arc::new(MockLlmProvider::new("deepseek")));

        let resolved = resolver.resolve().await.unwrap();
        assert_eq!(resolved.provider_name(), "gemini");
    }

    #[tokio::test]
    async fn test_falls_back_when_first_has_no_credential() {
        let resolver = PriorityProviderResolver::default()
            .with_provider(Arc::new(MockLlmProvider::new("gemini").without_credential()))
            .with_provider(Arc::new(MockLlmProvider::new("deepseek")));

        let resolved = resolver.resolve().await.unwrap();
        assert_eq!(resolved.provider_name(), "deepseek");
        assert_eq!(resolver.available().await, vec!["deepseek"]);
    }

    #[tokio::test]
    async fn test_configuration_error_when_no_credentials() {
        let resolver = PriorityProviderResolver::new(vec![
            Arc::new(MockLlmProvider::new("gemini").without_credential()),
            Arc::new(MockLlmProvider::new("deepseek").without_credential()),
        ]);

        let err = resolver.resolve().await.unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
        assert!(err.to_string().contains("No API keys configured"));
    }

    #[tokio::test]
    async fn test_empty_resolver_is_a_configuration_error() {
        let resolver = PriorityProviderResolver::default();

        assert!(resolver.is_empty());
        assert!(resolver.resolve().await.is_err());
    }
}
