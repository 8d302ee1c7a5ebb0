//! Domain layer - Core business logic and entities

pub mod agent;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod retrieval;
pub mod routing;

pub use agent::{AgentNode, AgentResponse, AgentSettings, AgentState, RagAgent};
pub use embedding::{cosine_similarity, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
pub use error::DomainError;
pub use llm::{
    FinishReason, LlmJsonSchema, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse,
    LlmResponseFormat, Message, MessageRole, Usage,
};
pub use retrieval::{
    assemble_context, coarse_search_sections, fine_search_chunks, ChunkIndex, ChunkMetadata,
    ChunkRecord, IndexSource, KnowledgeIndex, RetrievalOutcome, RetrievalPipeline,
    RetrievalSettings, ScoredRecord, SectionRecord,
};
pub use routing::{QueryRouter, Route, RouteDecision, UnclassifiedRoutePolicy};
