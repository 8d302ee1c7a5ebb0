//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use super::{EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;

/// Trait for embedding providers
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate embeddings for the given input
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Model used by [`EmbeddingProvider::embed_text`]
    fn model(&self) -> &str;

    /// Requested output dimensions, if the model is being shortened
    fn output_dimensions(&self) -> Option<usize> {
        None
    }

    /// Embed a single text with the configured model
    async fn embed_text(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let request = EmbeddingRequest::single(self.model(), text)
            .with_dimensions(self.output_dimensions());

        self.embed(request)
            .await?
            .into_first()
            .map(|e| e.into_vector())
            .ok_or_else(|| DomainError::provider(self.provider_name(), "Empty embedding response"))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::embedding::{Embedding, EmbeddingUsage};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns fixed vectors per input text, falling back to a default vector
    #[derive(Debug)]
    pub struct MockEmbeddingProvider {
        vectors: HashMap<String, Vec<f32>>,
        default_vector: Vec<f32>,
        error: Option<String>,
        calls: AtomicUsize,
    }

    impl MockEmbeddingProvider {
        pub fn new(default_vector: Vec<f32>) -> Self {
            Self {
                vectors: HashMap::new(),
                default_vector,
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
            self.vectors.insert(text.into(), vector);
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EmbeddingProvider for MockEmbeddingProvider {
        async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::provider("mock", error));
            }

            let embeddings = request
                .inputs()
                .iter()
                .enumerate()
                .map(|(idx, text)| {
                    let vector = self
                        .vectors
                        .get(*text)
                        .cloned()
                        .unwrap_or_else(|| self.default_vector.clone());
                    Embedding::new(idx, vector)
                })
                .collect();

            Ok(EmbeddingResponse::new(
                request.model().to_string(),
                embeddings,
                EmbeddingUsage::default(),
            ))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-embedding"
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_embed_text_uses_registered_vector() {
            let provider = MockEmbeddingProvider::new(vec![0.0, 1.0])
                .with_vector("rice blast", vec![1.0, 0.0]);

            let vector = provider.embed_text("rice blast").await.unwrap();
            let fallback = provider.embed_text("weather").await.unwrap();

            assert_eq!(vector, vec![1.0, 0.0]);
            assert_eq!(fallback, vec![0.0, 1.0]);
            assert_eq!(provider.calls(), 2);
        }

        #[tokio::test]
        async fn test_embed_text_error() {
            let provider = MockEmbeddingProvider::new(vec![1.0]).with_error("quota exceeded");

            let result = provider.embed_text("anything").await;

            assert!(matches!(result, Err(DomainError::Provider { .. })));
        }
    }
}
