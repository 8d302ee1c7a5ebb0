use serde::Deserialize;

use crate::domain::retrieval::RetrievalSettings;
use crate::domain::routing::UnclassifiedRoutePolicy;
use crate::infrastructure::llm::RetryConfig;

const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
    pub retrieval: RetrievalSettings,
    pub routing: RoutingConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Chat model used for routing and answering
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub chat_model: String,
    pub router_model: String,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
}

/// Embedding model; must match the one used to build the indices
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Falls back to `llm.base_url`
    pub base_url: Option<String>,
    /// Falls back to `llm.api_key`
    pub api_key: Option<String>,
    pub model: String,
    pub dimensions: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub sections_path: String,
    pub chunks_path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub unclassified: UnclassifiedRoutePolicy,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            chat_model: "gpt-4o-mini".to_string(),
            router_model: "gpt-4o-mini".to_string(),
            temperature: None,
            timeout_secs: 60,
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            model: "text-embedding-3-small".to_string(),
            dimensions: None,
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sections_path: "data/extracted/sections_with_emb.json".to_string(),
            chunks_path: "data/index/full_vectors.json".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// API key for the chat model, falling back to `OPENAI_API_KEY`
    pub fn llm_api_key(&self) -> Option<String> {
        self.llm
            .api_key
            .clone()
            .or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok())
    }

    pub fn embedding_api_key(&self) -> Option<String> {
        self.embedding.api_key.clone().or_else(|| self.llm_api_key())
    }

    pub fn embedding_base_url(&self) -> Option<&str> {
        self.embedding
            .base_url
            .as_deref()
            .or(self.llm.base_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.retrieval.top_k_sections, 3);
        assert_eq!(config.retrieval.top_k_chunks, 5);
        assert_eq!(config.llm.chat_model, "gpt-4o-mini");
        assert_eq!(config.routing.unclassified, UnclassifiedRoutePolicy::Fail);
        assert_eq!(config.index.chunks_path, "data/index/full_vectors.json");
        assert_eq!(config.retry.max_retries, 3);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let json = serde_json::json!({
            "retrieval": {"top_k_chunks": 8},
            "routing": {"unclassified": "llm"},
            "embedding": {"dimensions": 512},
            "logging": {"format": "json"}
        });

        let config: AppConfig = serde_json::from_value(json).unwrap();

        assert_eq!(config.retrieval.top_k_sections, 3);
        assert_eq!(config.retrieval.top_k_chunks, 8);
        assert_eq!(config.routing.unclassified, UnclassifiedRoutePolicy::Llm);
        assert_eq!(config.embedding.dimensions, Some(512));
        assert_eq!(config.embedding.model, "text-embedding-3-small");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_embedding_inherits_llm_endpoint() {
        let mut config = AppConfig::default();
        config.llm.base_url = Some("http://localhost:11434".to_string());
        config.llm.api_key = Some("sk-chat".to_string());

        assert_eq!(config.embedding_base_url(), Some("http://localhost:11434"));
        assert_eq!(config.embedding_api_key().as_deref(), Some("sk-chat"));

        config.embedding.api_key = Some("sk-embed".to_string());
        assert_eq!(config.embedding_api_key().as_deref(), Some("sk-embed"));
    }
}
