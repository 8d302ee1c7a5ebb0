//! Embedding request types

use serde::{Deserialize, Serialize};

/// Input for embedding generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<String>),
}

impl EmbeddingInput {
    pub fn as_vec(&self) -> Vec<&str> {
        match self {
            EmbeddingInput::Single(s) => vec![s.as_str()],
            EmbeddingInput::Batch(v) => v.iter().map(|s| s.as_str()).collect(),
        }
    }
}

/// Request to generate embeddings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    model: String,
    input: EmbeddingInput,
    /// Output dimensions, for models that support shortening
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

impl EmbeddingRequest {
    pub fn new(model: impl Into<String>, input: EmbeddingInput) -> Self {
        Self {
            model: model.into(),
            input,
            dimensions: None,
        }
    }

    pub fn single(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(model, EmbeddingInput::Single(text.into()))
    }

    pub fn batch(model: impl Into<String>, texts: Vec<String>) -> Self {
        Self::new(model, EmbeddingInput::Batch(texts))
    }

    pub fn with_dimensions(mut self, dimensions: Option<usize>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn input(&self) -> &EmbeddingInput {
        &self.input
    }

    pub fn inputs(&self) -> Vec<&str> {
        self.input.as_vec()
    }

    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_input_batch() {
        let input = EmbeddingInput::Batch(vec!["wheat".into(), "maize".into()]);

        assert_eq!(input.as_vec(), vec!["wheat", "maize"]);
    }

    #[test]
    fn test_embedding_request_with_dimensions() {
        let request =
            EmbeddingRequest::single("text-embedding-3-small", "soil pH").with_dimensions(Some(256));

        assert_eq!(request.model(), "text-embedding-3-small");
        assert_eq!(request.inputs(), vec!["soil pH"]);
        assert_eq!(request.dimensions(), Some(256));
    }
}
