//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ClientConfig, DeepSeekConfig, GeminiConfig, LogFormat, LoggingConfig,
    ProviderKind, ProvidersConfig, ServerConfig,
};
