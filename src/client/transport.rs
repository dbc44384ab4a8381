use async_trait::async_trait;
use tracing::debug;

use crate::api::types::{ApiErrorResponse, GenerateResponse};
use crate::domain::{AdviceRequest, DomainError};
use crate::infrastructure::llm::{HttpClient, HttpClientTrait, RawResponse};

/// Label used for errors raised by the relay backend
pub const RELAY_LABEL: &str = "relay";

/// Sends one advice request to the relay backend and returns its text
#[async_trait]
pub trait RelayTransport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: &AdviceRequest) -> Result<String, DomainError>;
}

/// HTTP transport to `POST {endpoint}/api/generate`
#[derive(Debug, Clone)]
pub struct HttpRelayTransport<C: HttpClientTrait = HttpClient> {
    client: C,
    endpoint: String,
}

impl HttpRelayTransport<HttpClient> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), endpoint)
    }
}

impl<C: HttpClientTrait> HttpRelayTransport<C> {
    pub fn with_client(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }
}

/// Error for a non-success relay answer.
///
/// The relay already bounds its own messages, so the `error` field is kept
/// whole; a body without one is truncated like any upstream body.
fn relay_error(response: RawResponse) -> DomainError {
    match serde_json::from_str::<ApiErrorResponse>(&response.body) {
        Ok(parsed) => DomainError::Upstream {
            provider: RELAY_LABEL.to_string(),
            status: response.status,
            body: parsed.error,
        },
        Err(_) => DomainError::upstream(RELAY_LABEL, response.status, response.body),
    }
}

#[async_trait]
impl<C: HttpClientTrait> RelayTransport for HttpRelayTransport<C> {
    async fn send(&self, request: &AdviceRequest) -> Result<String, DomainError> {
        let url = self.generate_url();
        let body = serde_json::to_value(request)
            .map_err(|e| DomainError::internal(format!("Failed to encode request: {}", e)))?;

        debug!(url = %url, kind = %request.kind(), "Sending request to relay");

        let response = self.client.post_raw(RELAY_LABEL, &url, vec![], &body).await?;

        if !response.is_success() {
            return Err(relay_error(response));
        }

        let parsed: GenerateResponse = serde_json::from_str(&response.body).map_err(|e| {
            DomainError::invalid_response(RELAY_LABEL, format!("Failed to parse response: {}", e))
        })?;

        Ok(parsed.text)
    }
}
