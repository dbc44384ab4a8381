//! Domain layer - Core business logic and entities

pub mod advice;
pub mod cache;
pub mod credentials;
pub mod error;
pub mod llm;

pub use advice::{
    validate_advice_request, AdviceRequest, AdviceValidationError, CompatibilityRequest,
    PlanRequest, PromptPair, RequestKind, TroubleshootRequest, EMPTY_RESPONSE_FALLBACK,
};
pub use cache::{CacheStore, ResponseCache};
pub use credentials::{Credential, CredentialProvider, CredentialType};
pub use error::DomainError;
pub use llm::{LlmProvider, PriorityProviderResolver, ProviderResolver};
