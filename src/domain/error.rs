use thiserror::Error;

/// Maximum number of characters of an upstream error body kept in messages
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("{provider} API Error ({status}): {body}")]
    Upstream {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Unable to reach AI service ({provider}): {message}")]
    Transport { provider: String, message: String },

    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse { provider: String, message: String },

    #[error("A {kind} request is already in flight")]
    RequestInFlight { kind: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Upstream answered with a non-success status. The body is truncated.
    pub fn upstream(provider: impl Into<String>, status: u16, body: impl AsRef<str>) -> Self {
        Self::Upstream {
            provider: provider.into(),
            status,
            body: truncate_chars(body.as_ref(), MAX_ERROR_BODY_CHARS),
        }
    }

    pub fn transport(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn request_in_flight(kind: impl Into<String>) -> Self {
        Self::RequestInFlight { kind: kind.into() }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Status code reported by the upstream service, if any
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Truncates on a char boundary, appending an ellipsis when anything was cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
