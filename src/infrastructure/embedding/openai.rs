//! OpenAI embedding provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use super::HttpClientTrait;
use crate::domain::embedding::{
    Embedding, EmbeddingInput, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse,
    EmbeddingUsage,
};
use crate::domain::DomainError;
use crate::infrastructure::llm::DEFAULT_OPENAI_BASE_URL;

/// OpenAI-compatible embedding provider
#[derive(Debug)]
pub struct OpenAiEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
    model: String,
    dimensions: Option<usize>,
}

impl<C: HttpClientTrait> OpenAiEmbeddingProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, model, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            base_url,
            model: model.into(),
            dimensions: None,
        }
    }

    /// Ask the model to shorten its vectors, matching how the index was built
    pub fn with_dimensions(mut self, dimensions: Option<usize>) -> Self {
        self.dimensions = dimensions;
        self
    }

    fn embeddings_url(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn build_request(&self, request: &EmbeddingRequest) -> serde_json::Value {
        let input = match request.input() {
            EmbeddingInput::Single(s) => serde_json::json!(s),
            EmbeddingInput::Batch(v) => serde_json::json!(v),
        };

        let mut body = serde_json::json!({
            "model": request.model(),
            "input": input,
        });

        if let Some(dims) = request.dimensions() {
            body["dimensions"] = serde_json::json!(dims);
        }

        body
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<EmbeddingResponse, DomainError> {
        let response: OpenAiEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("openai", format!("Failed to parse embedding response: {}", e))
        })?;

        let embeddings: Vec<Embedding> = response
            .data
            .into_iter()
            .map(|d| Embedding::new(d.index, d.embedding))
            .collect();

        let usage = EmbeddingUsage::new(response.usage.prompt_tokens, response.usage.total_tokens);

        Ok(EmbeddingResponse::new(response.model, embeddings, usage))
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for OpenAiEmbeddingProvider<C> {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
        let url = self.embeddings_url();
        let body = self.build_request(&request);

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn output_dimensions(&self) -> Option<usize> {
        self.dimensions
    }
}

// OpenAI API types for embeddings

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingResponse {
    model: String,
    data: Vec<OpenAiEmbeddingData>,
    usage: OpenAiEmbeddingUsage,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingUsage {
    prompt_tokens: u32,
    total_tokens: u32,
}
