use serde::{Deserialize, Serialize};

/// Type of credential (which upstream provider it belongs to)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialType {
    Gemini,
    DeepSeek,
}

/// Credential entity holding an upstream API key
#[derive(Clone)]
pub struct Credential {
    credential_type: CredentialType,
    api_key: String,
}

impl Credential {
    pub fn new(credential_type: CredentialType, api_key: impl Into<String>) -> Self {
        Self {
            credential_type,
            api_key: api_key.into(),
        }
    }

    pub fn credential_type(&self) -> CredentialType {
        self.credential_type
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("credential_type", &self.credential_type)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialType::Gemini => write!(f, "gemini"),
            CredentialType::DeepSeek => write!(f, "deepseek"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_creation() {
        let cred = Credential::new(CredentialType::Gemini, "AIza-test-key");

        assert_eq!(cred.credential_type(), CredentialType::Gemini);
        assert_eq!(cred.api_key(), "AIza-test-key");
    }

    #[test]
    fn test_debug_redacts_key() {
        let cred = Credential::new(CredentialType::DeepSeek, "sk-secret");
        let debug = format!("{:?}", cred);

        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
