//! Crop RAG Router
//!
//! Answers natural-language questions with a chat model, routing crop-related
//! questions through a two-stage semantic search first:
//! - Coarse search ranks whole document sections against the query embedding
//! - Fine search ranks chunks inside the selected sections
//! - The best chunks are injected into the answer prompt with source annotations

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use domain::{
    AgentSettings, EmbeddingProvider, IndexSource, KnowledgeIndex, LlmProvider, RagAgent,
    RetrievalPipeline,
};
use infrastructure::{
    embedding::OpenAiEmbeddingProvider,
    index::JsonFileIndexSource,
    llm::{HttpClient, OpenAiProvider, RetryingHttpClient},
    routing::LlmQueryRouter,
};
use tracing::info;

/// Load the indices and wire up the agent described by `config`
pub async fn create_agent(config: &AppConfig) -> anyhow::Result<RagAgent> {
    let index = load_index(config).await?;
    create_agent_with_index(config, Arc::new(index))
}

/// Wire up the agent around an already loaded index
pub fn create_agent_with_index(
    config: &AppConfig,
    index: Arc<KnowledgeIndex>,
) -> anyhow::Result<RagAgent> {
    let llm_provider = create_llm_provider(config)?;
    let embedding_provider = create_embedding_provider(config)?;

    let retrieval = RetrievalPipeline::new(index, embedding_provider, config.retrieval)?;
    let router = Arc::new(LlmQueryRouter::new(
        llm_provider.clone(),
        config.llm.router_model.clone(),
    ));

    let settings = AgentSettings {
        answer_model: config.llm.chat_model.clone(),
        temperature: config.llm.temperature,
        unclassified: config.routing.unclassified,
    };

    info!(
        chat_model = %settings.answer_model,
        router_model = %config.llm.router_model,
        embedding_model = %config.embedding.model,
        "Agent ready"
    );

    Ok(RagAgent::new(router, retrieval, llm_provider, settings))
}

/// Read the section and chunk files named in the configuration
pub async fn load_index(config: &AppConfig) -> anyhow::Result<KnowledgeIndex> {
    let source = JsonFileIndexSource::new(&config.index.sections_path, &config.index.chunks_path);

    source
        .load()
        .await
        .with_context(|| format!("Failed to load knowledge index ({})", source.describe()))
}

fn create_http_client(config: &AppConfig) -> anyhow::Result<RetryingHttpClient<HttpClient>> {
    let client = HttpClient::with_timeout(Duration::from_secs(config.llm.timeout_secs))?;
    Ok(RetryingHttpClient::new(client, config.retry.clone()))
}

fn require_api_key(
    api_key: Option<String>,
    base_url: Option<&str>,
) -> anyhow::Result<String> {
    match (api_key, base_url) {
        (Some(key), _) => Ok(key),
        // Self-hosted OpenAI-compatible servers often run without auth
        (None, Some(_)) => Ok(String::new()),
        (None, None) => Err(domain::DomainError::configuration(
            "No API key configured; set llm.api_key or OPENAI_API_KEY",
        )
        .into()),
    }
}

fn create_llm_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn LlmProvider>> {
    let api_key = require_api_key(config.llm_api_key(), config.llm.base_url.as_deref())?;
    let client = create_http_client(config)?;

    if let Some(url) = &config.llm.base_url {
        info!("Using OpenAI-compatible chat provider at {}", url);
        Ok(Arc::new(OpenAiProvider::with_base_url(client, api_key, url)))
    } else {
        info!("Using OpenAI chat provider with default base URL");
        Ok(Arc::new(OpenAiProvider::new(client, api_key)))
    }
}

fn create_embedding_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn EmbeddingProvider>> {
    let base_url = config.embedding_base_url();
    let api_key = require_api_key(config.embedding_api_key(), base_url)?;
    let client = create_http_client(config)?;
    let model = config.embedding.model.clone();

    let provider = match base_url {
        Some(url) => OpenAiEmbeddingProvider::with_base_url(client, api_key, model, url),
        None => OpenAiEmbeddingProvider::new(client, api_key, model),
    };

    Ok(Arc::new(provider.with_dimensions(config.embedding.dimensions)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_api_key() {
        assert_eq!(require_api_key(Some("sk".into()), None).unwrap(), "sk");
        assert_eq!(require_api_key(None, Some("http://localhost:8000")).unwrap(), "");
        assert!(require_api_key(None, None).is_err());
    }

    #[tokio::test]
    async fn test_create_agent_with_index() {
        let mut config = AppConfig::default();
        config.llm.api_key = Some("sk-test".to_string());

        let agent = create_agent_with_index(&config, Arc::new(KnowledgeIndex::default())).unwrap();

        assert_eq!(agent.retrieval().settings().top_k_sections, 3);
        assert_eq!(agent.retrieval().settings().top_k_chunks, 5);
    }

    #[tokio::test]
    async fn test_load_index_reports_missing_files() {
        let mut config = AppConfig::default();
        config.index.sections_path = "/nonexistent/sections.json".to_string();

        let error = load_index(&config).await.unwrap_err();

        assert!(error.to_string().contains("Failed to load knowledge index"));
        assert!(matches!(
            error.downcast_ref::<domain::DomainError>(),
            Some(domain::DomainError::MissingIndexFile { .. })
        ));
    }
}
