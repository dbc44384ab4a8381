use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::{
    CredentialProvider, CredentialType, DomainError, LlmProvider, PromptPair,
};

const PROVIDER_LABEL: &str = "Gemini";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

/// Google Gemini provider ("system instruction + contents" request shape)
#[derive(Debug)]
pub struct GeminiProvider<C: HttpClientTrait> {
    client: C,
    credentials: Arc<dyn CredentialProvider>,
    base_url: String,
    model: String,
}

impl<C: HttpClientTrait> GeminiProvider<C> {
    pub fn new(client: C, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_base_url(client, credentials, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        credentials: Arc<dyn CredentialProvider>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(&self, prompt: &PromptPair) -> serde_json::Value {
        serde_json::json!({
            "systemInstruction": {
                "parts": [{ "text": prompt.system }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt.user }]
            }]
        })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Option<String>, DomainError> {
        let response: GeminiResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::invalid_response(PROVIDER_LABEL, format!("Failed to parse response: {}", e))
        })?;

        let Some(content) = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
        else {
            return Ok(None);
        };

        // Thinking models tag intermediate reasoning parts with `thought: true`
        let text: String = content
            .parts
            .into_iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text)
            .collect();

        Ok(Some(text))
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for GeminiProvider<C> {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    async fn has_credential(&self) -> bool {
        self.credentials.supports(CredentialType::Gemini).await
    }

    async fn complete(&self, prompt: &PromptPair) -> Result<Option<String>, DomainError> {
        let credential = self.credentials.get_credential(CredentialType::Gemini).await?;

        let url = self.generate_content_url();
        let body = self.build_request(prompt);
        let headers = vec![
            ("x-goog-api-key", credential.api_key()),
            ("Content-Type", "application/json"),
        ];

        debug!(model = %self.model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post_json(PROVIDER_LABEL, &url, headers, &body)
            .await?;

        self.parse_response(response)
    }
}

// Gemini API types

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}
