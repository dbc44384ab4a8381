use async_trait::async_trait;
use std::time::Duration;

use crate::domain::DomainError;

/// Status and full body of an HTTP answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// POST a JSON body and return the answer whatever its status.
    ///
    /// Only a failed send is an error (`DomainError::Transport`).
    async fn post_raw(
        &self,
        provider: &str,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<RawResponse, DomainError>;

    /// POST a JSON body and parse the JSON answer.
    ///
    /// `provider` labels errors: a non-success status becomes
    /// `DomainError::Upstream` with the body truncated.
    async fn post_json(
        &self,
        provider: &str,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let response = self.post_raw(provider, url, headers, body).await?;

        if !response.is_success() {
            return Err(DomainError::upstream(provider, response.status, response.body));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            DomainError::invalid_response(provider, format!("Failed to parse response: {}", e))
        })
    }
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Uses the platform default timeout when `timeout` is `None`
    pub fn from_timeout(timeout: Option<Duration>) -> Result<Self, DomainError> {
        match timeout {
            Some(timeout) => Self::with_timeout(timeout),
            None => Ok(Self::new()),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_raw(
        &self,
        provider: &str,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<RawResponse, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::transport(provider, format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            DomainError::transport(provider, format!("Failed to read response body: {}", e))
        })?;

        Ok(RawResponse { status, body })
    }
}
