use serde::Serialize;

use super::ranking::ScoredRecord;
use super::record::ChunkRecord;

/// Result of running retrieval for one query.
///
/// `Empty` is a normal terminal state: nothing relevant was found and the
/// answer is generated without injected context.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RetrievalOutcome {
    Context {
        section_ids: Vec<String>,
        chunks: Vec<ScoredRecord<ChunkRecord>>,
        prompt: String,
    },
    Empty {
        section_ids: Vec<String>,
    },
}

impl RetrievalOutcome {
    pub fn from_ranked(section_ids: Vec<String>, chunks: Vec<ScoredRecord<ChunkRecord>>) -> Self {
        if chunks.is_empty() {
            return Self::Empty { section_ids };
        }

        let prompt = super::assemble_context(chunks.iter().map(|c| &c.record));

        Self::Context {
            section_ids,
            chunks,
            prompt,
        }
    }

    /// Context text to inject, empty when nothing was retrieved
    pub fn prompt(&self) -> &str {
        match self {
            Self::Context { prompt, .. } => prompt,
            Self::Empty { .. } => "",
        }
    }

    pub fn chunks(&self) -> &[ScoredRecord<ChunkRecord>] {
        match self {
            Self::Context { chunks, .. } => chunks,
            Self::Empty { .. } => &[],
        }
    }

    pub fn section_ids(&self) -> &[String] {
        match self {
            Self::Context { section_ids, .. } | Self::Empty { section_ids } => section_ids,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}
