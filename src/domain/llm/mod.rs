//! LLM provider domain traits

mod provider;
mod provider_resolver;

pub use provider::LlmProvider;
pub use provider_resolver::{PriorityProviderResolver, ProviderResolver, NO_CREDENTIALS_MESSAGE};

#[cfg(test)]
pub use provider::mock::MockLlmProvider;
