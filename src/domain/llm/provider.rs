use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::advice::PromptPair;
use crate::domain::DomainError;

/// Trait for upstream LLM providers (Gemini, DeepSeek, etc.)
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Whether a credential for this provider is currently configured
    async fn has_credential(&self) -> bool;

    /// Send the prompt pair and extract the answer text.
    ///
    /// `Ok(None)` means the provider answered successfully without usable text.
    async fn complete(&self, prompt: &PromptPair) -> Result<Option<String>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug)]
    pub struct MockLlmProvider {
        name: &'static str,
        credential: bool,
        response: Option<String>,
        upstream_error: Option<(u16, String)>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<PromptPair>>,
    }

    impl MockLlmProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                credential: true,
                response: None,
                upstream_error: None,
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        pub fn without_credential(mut self) -> Self {
            self.credential = false;
            self
        }

        pub fn with_response(mut self, response: impl Into<String>) -> Self {
            self.response = Some(response.into());
            self
        }

        pub fn with_upstream_error(mut self, status: u16, body: impl Into<String>) -> Self {
            self.upstream_error = Some((status, body.into()));
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_prompt(&self) -> Option<PromptPair> {
            self.last_prompt.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        fn provider_name(&self) -> &'static str {
            self.name
        }

        async fn has_credential(&self) -> bool {
            self.credential
        }

        async fn complete(&self, prompt: &PromptPair) -> Result<Option<String>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.clone());

            if let Some((status, ref body)) = self.upstream_error {
                return Err(DomainError::upstream(self.name, status, body));
            }

            Ok(self.response.clone())
        }
    }
}
