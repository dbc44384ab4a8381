use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::{
    CredentialProvider, CredentialType, DomainError, LlmProvider, PromptPair,
};

const PROVIDER_LABEL: &str = "DeepSeek";
const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// DeepSeek provider (OpenAI-compatible "chat messages" request shape)
#[derive(Debug)]
pub struct DeepSeekProvider<C: HttpClientTrait> {
    client: C,
    credentials: Arc<dyn CredentialProvider>,
    base_url: String,
    model: String,
    temperature: f32,
}

impl<C: HttpClientTrait> DeepSeekProvider<C> {
    pub fn new(client: C, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_base_url(client, credentials, DEFAULT_DEEPSEEK_BASE_URL)
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
            model: DEFAULT_DEEPSEEK_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request(&self, prompt: &PromptPair) -> serde_json::Value {
        let messages = [
            ChatMessage {
                role: "system",
                content: &prompt.system,
            },
            ChatMessage {
                role: "user",
                content: &prompt.user,
            },
        ];

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "stream": false,
        })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Option<String>, DomainError> {
        let response: ChatResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::invalid_response(PROVIDER_LABEL, format!("Failed to parse response: {}", e))
        })?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content))
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for DeepSeekProvider<C> {
    fn provider_name(&self) -> &'static str {
        "deepseek"
    }

    async fn has_credential(&self) -> bool {
        self.credentials.supports(CredentialType::DeepSeek).await
    }

    async fn complete(&self, prompt: &PromptPair) -> Result<Option<String>, DomainError> {
        let credential = self
            .credentials
            .get_credential(CredentialType::DeepSeek)
            .await?;
        let auth_header = format!("Bearer {}", credential.api_key());

        let url = self.chat_completions_url();
        let body = self.build_request(prompt);
        let headers = vec![
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        debug!(model = %self.model, "Sending DeepSeek chat completion request");

        let response = self
            .client
            .post_json(PROVIDER_LABEL, &url, headers, &body)
            .await?;

        self.parse_response(response)
    }
}

// DeepSeek (OpenAI-compatible) API types

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
