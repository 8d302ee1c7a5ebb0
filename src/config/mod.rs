//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, EmbeddingConfig, IndexConfig, LlmConfig, LogFormat, LoggingConfig, RoutingConfig,
};
