//! LLM provider implementations

mod deepseek;
mod factory;
mod gemini;
pub mod http_client;

pub use deepseek::DeepSeekProvider;
pub use factory::LlmProviderFactory;
pub use gemini::GeminiProvider;
pub use http_client::{HttpClient, HttpClientTrait, RawResponse};
