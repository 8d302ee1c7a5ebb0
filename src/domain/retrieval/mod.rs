//! Two-stage semantic retrieval over pre-embedded document sections and chunks
//!
//! Coarse search ranks whole sections against the query embedding; fine search
//! then ranks only the chunks that belong to the selected sections.

mod coarse;
mod fine;
mod index;
mod outcome;
mod pipeline;
mod prompt;
mod ranking;
mod record;
mod source;

pub use coarse::coarse_search_sections;
pub use fine::fine_search_chunks;
pub use index::{ChunkIndex, KnowledgeIndex};
pub use outcome::RetrievalOutcome;
pub use pipeline::{RetrievalPipeline, RetrievalSettings};
pub use prompt::{assemble_context, format_chunk};
pub use ranking::{rank_top_k, ScoredRecord};
pub use record::{ChunkMetadata, ChunkRecord, SectionRecord};
pub use source::IndexSource;
