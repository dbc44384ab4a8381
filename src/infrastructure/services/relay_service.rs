//! Relay service - turns an advice request into one upstream completion

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{
    validate_advice_request, AdviceRequest, DomainError, ProviderResolver,
    EMPTY_RESPONSE_FALLBACK,
};

/// Result of a relayed generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub text: String,
    /// Provider that answered
    pub provider: &'static str,
    /// True when the provider returned no usable text and the fallback was substituted
    pub fallback: bool,
}

/// Stateless relay between the API and the upstream providers.
///
/// No retries and no caching happen here; every call makes at most one
/// upstream request.
#[derive(Debug, Clone)]
pub struct RelayService {
    resolver: Arc<dyn ProviderResolver>,
}

impl RelayService {
    pub fn new(resolver: Arc<dyn ProviderResolver>) -> Self {
        Self { resolver }
    }

    /// Providers that currently have a credential, in priority order
    pub async fn available_providers(&self) -> Vec<&'static str> {
        self.resolver.available().await
    }

    /// Validate, build the prompt, call the selected provider.
    pub async fn generate(&self, request: &AdviceRequest) -> Result<RelayResponse, DomainError> {
        let request_id = Uuid::new_v4();
        let kind = request.kind();

        validate_advice_request(request)?;

        let provider = self.resolver.resolve().await.inspect_err(|e| {
            warn!(%request_id, kind = %kind, error = %e, "No upstream provider available");
        })?;
        let prompt = request.prompt();

        debug!(
            %request_id,
            kind = %kind,
            provider = provider.provider_name(),
            "Relaying advice request"
        );

        let text = provider.complete(&prompt).await.inspect_err(|e| {
            warn!(
                %request_id,
                provider = provider.provider_name(),
                error = %e,
                "Upstream provider call failed"
            );
        })?;

        let response = match text.filter(|t| !t.trim().is_empty()) {
            Some(text) => RelayResponse {
                text,
                provider: provider.provider_name(),
                fallback: false,
            },
            None => {
                warn!(
                    %request_id,
                    provider = provider.provider_name(),
                    "Upstream returned no text, using fallback"
                );
                RelayResponse {
                    text: EMPTY_RESPONSE_FALLBACK.to_string(),
                    provider: provider.provider_name(),
                    fallback: true,
                }
            }
        };

        info!(
            %request_id,
            kind = %kind,
            provider = response.provider,
            chars = response.text.chars().count(),
            "Advice generated"
        );

        Ok(response)
    }
}
