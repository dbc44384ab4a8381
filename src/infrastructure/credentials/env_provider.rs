use async_trait::async_trait;
use std::collections::HashMap;
use std::env;

use crate::config::ProvidersConfig;
use crate::domain::{Credential, CredentialProvider, CredentialType, DomainError};

/// Credential provider that reads API keys from environment variables.
///
/// Variables are read on every call, never cached. Empty values count as
/// unset.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    mappings: HashMap<CredentialType, String>,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn with_mapping(mut self, credential_type: CredentialType, env_var: impl Into<String>) -> Self {
        self.mappings.insert(credential_type, env_var.into());
        self
    }

    pub fn with_defaults(self) -> Self {
        self.with_mapping(CredentialType::Gemini, "GOOGLE_API_KEY")
            .with_mapping(CredentialType::DeepSeek, "DEEPSEEK_API_KEY")
    }

    /// Uses the variable names from the provider configuration
    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new()
            .with_mapping(CredentialType::Gemini, &config.gemini.api_key_env)
            .with_mapping(CredentialType::DeepSeek, &config.deepseek.api_key_env)
    }

    fn read_var(&self, credential_type: CredentialType) -> Result<String, DomainError> {
        let env_var = self.mappings.get(&credential_type).ok_or_else(|| {
            DomainError::credential(format!(
                "No environment mapping configured for credential type: {}",
                credential_type
            ))
        })?;

        match env::var(env_var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(DomainError::credential(format!(
                "Environment variable '{}' not set for credential type: {}",
                env_var, credential_type
            ))),
        }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new().with_defaults()
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(
        &self,
        credential_type: CredentialType,
    ) -> Result<Credential, DomainError> {
        let api_key = self.read_var(credential_type)?;
        Ok(Credential::new(credential_type, api_key))
    }

    async fn supports(&self, credential_type: CredentialType) -> bool {
        self.read_var(credential_type).is_ok()
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[tokio::test]
    async fn test_env_provider_with_set_variable() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("TEST_SMARTHOME_GEMINI_KEY", "AIza-test-123") };

        let provider = EnvCredentialProvider::new()
            .with_mapping(CredentialType::Gemini, "TEST_SMARTHOME_GEMINI_KEY");

        let cred = provider.get_credential(CredentialType::Gemini).await.unwrap();
        assert_eq!(cred.api_key(), "AIza-test-123");
        assert!(provider.supports(CredentialType::Gemini).await);

        // SAFETY: Test cleanup
        unsafe { env::remove_var("TEST_SMARTHOME_GEMINI_KEY") };
    }

    #[tokio::test]
    async fn test_env_provider_missing_variable() {
        let provider = EnvCredentialProvider::new()
            .with_mapping(CredentialType::DeepSeek, "NONEXISTENT_VAR_12345");

        let result = provider.get_credential(CredentialType::DeepSeek).await;
        assert!(matches!(result, Err(DomainError::Credential { .. })));
    }

    #[tokio::test]
    async fn test_empty_variable_counts_as_unset() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("TEST_SMARTHOME_EMPTY_KEY", "  ") };

        let provider = EnvCredentialProvider::new()
            .with_mapping(CredentialType::DeepSeek, "TEST_SMARTHOME_EMPTY_KEY");

        assert!(!provider.supports(CredentialType::DeepSeek).await);

        // SAFETY: Test cleanup
        unsafe { env::remove_var("TEST_SMARTHOME_EMPTY_KEY") };
    }

    #[tokio::test]
    async fn test_variable_is_read_at_call_time() {
        let provider = EnvCredentialProvider::new()
            .with_mapping(CredentialType::Gemini, "TEST_SMARTHOME_LATE_KEY");
        assert!(!provider.supports(CredentialType::Gemini).await);

        // SAFETY: Test runs in isolation
        unsafe { env::set_var("TEST_SMARTHOME_LATE_KEY", "late") };
        assert!(provider.supports(CredentialType::Gemini).await);

        // SAFETY: Test cleanup
        unsafe { env::remove_var("TEST_SMARTHOME_LATE_KEY") };
    }

    #[tokio::test]
    async fn test_unmapped_type_is_unsupported() {
        let provider = EnvCredentialProvider::new();
        assert!(!provider.supports(CredentialType::Gemini).await);
    }

    #[test]
    fn test_from_config_uses_configured_names() {
        let mut config = ProvidersConfig::default();
        config.gemini.api_key_env = "MY_GEMINI".to_string();

        let provider = EnvCredentialProvider::from_config(&config);
        assert_eq!(
            provider.mappings.get(&CredentialType::Gemini).map(String::as_str),
            Some("MY_GEMINI")
        );
        assert_eq!(
            provider.mappings.get(&CredentialType::DeepSeek).map(String::as_str),
            Some("DEEPSEEK_API_KEY")
        );
    }
}
