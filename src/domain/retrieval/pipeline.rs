use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use super::coarse::coarse_search_sections;
use super::fine::fine_search_chunks;
use super::index::KnowledgeIndex;
use super::outcome::RetrievalOutcome;
use crate::domain::embedding::EmbeddingProvider;
use crate::domain::DomainError;

/// How many records each search stage keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    pub top_k_sections: usize,
    pub top_k_chunks: usize,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k_sections: 3,
            top_k_chunks: 5,
        }
    }
}

impl RetrievalSettings {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.top_k_sections == 0 || self.top_k_chunks == 0 {
            return Err(DomainError::validation(
                "top_k_sections and top_k_chunks must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Embeds a query once and runs coarse then fine search over a shared index
#[derive(Debug, Clone)]
pub struct RetrievalPipeline {
    index: Arc<KnowledgeIndex>,
    embedder: Arc<dyn EmbeddingProvider>,
    settings: RetrievalSettings,
}

impl RetrievalPipeline {
    pub fn new(
        index: Arc<KnowledgeIndex>,
        embedder: Arc<dyn EmbeddingProvider>,
        settings: RetrievalSettings,
    ) -> Result<Self, DomainError> {
        settings.validate()?;

        Ok(Self {
            index,
            embedder,
            settings,
        })
    }

    pub fn index(&self) -> &KnowledgeIndex {
        &self.index
    }

    pub fn settings(&self) -> RetrievalSettings {
        self.settings
    }

    pub async fn retrieve(&self, query: &str) -> Result<RetrievalOutcome, DomainError> {
        let query_embedding = self.embedder.embed_text(query).await?;
        self.retrieve_with_embedding(&query_embedding)
    }

    /// Run both search stages for an already computed query embedding
    pub fn retrieve_with_embedding(
        &self,
        query_embedding: &[f32],
    ) -> Result<RetrievalOutcome, DomainError> {
        self.index.check_query(query_embedding)?;

        let sections = coarse_search_sections(
            query_embedding,
            self.index.sections(),
            self.settings.top_k_sections,
        )?;

        let section_ids: Vec<String> = sections
            .iter()
            .map(|s| s.record.section_id.clone())
            .collect();
        let targets: HashSet<String> = section_ids.iter().cloned().collect();

        debug!(sections = ?section_ids, "Selected sections for fine search");

        let chunks = fine_search_chunks(
            query_embedding,
            self.index.chunks(),
            &targets,
            self.settings.top_k_chunks,
        )?
        .iter()
        .map(|c| c.cloned())
        .collect();

        let outcome = RetrievalOutcome::from_ranked(section_ids, chunks);

        info!(
            chunks = outcome.chunks().len(),
            empty = outcome.is_empty(),
            "Retrieval complete"
        );

        Ok(outcome)
    }
}
