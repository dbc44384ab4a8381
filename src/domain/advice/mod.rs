//! Advice requests - typed input, validation, prompts and fingerprints

mod fingerprint;
mod prompt;
mod request;
mod validation;

pub use prompt::PromptPair;
pub use request::{
    AdviceRequest, CompatibilityRequest, PlanRequest, RequestKind, TroubleshootRequest,
};
pub use validation::{validate_advice_request, AdviceValidationError};

/// Text returned when a provider answers successfully but without usable text
pub const EMPTY_RESPONSE_FALLBACK: &str = "AI returned an empty response. Please try again.";
