//! Embedding provider domain models and traits

mod provider;
mod request;
mod response;
mod similarity;

pub use provider::EmbeddingProvider;
pub use request::{EmbeddingInput, EmbeddingRequest};
pub use response::{Embedding, EmbeddingResponse, EmbeddingUsage};
pub use similarity::cosine_similarity;

#[cfg(test)]
pub use provider::mock::MockEmbeddingProvider;
