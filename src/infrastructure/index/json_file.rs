//! Section and chunk indices stored as JSON arrays on disk

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::retrieval::{ChunkRecord, IndexSource, KnowledgeIndex, SectionRecord};
use crate::domain::DomainError;

/// Loads the offline-built section and chunk files
#[derive(Debug, Clone)]
pub struct JsonFileIndexSource {
    sections_path: PathBuf,
    chunks_path: PathBuf,
}

impl JsonFileIndexSource {
    pub fn new(sections_path: impl Into<PathBuf>, chunks_path: impl Into<PathBuf>) -> Self {
        Self {
            sections_path: sections_path.into(),
            chunks_path: chunks_path.into(),
        }
    }
}

async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DomainError> {
    let display = path.display().to_string();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DomainError::missing_index_file(&display, e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| DomainError::index_format(display, e.to_string()))
}

#[async_trait]
impl IndexSource for JsonFileIndexSource {
    async fn load(&self) -> Result<KnowledgeIndex, DomainError> {
        let sections: Vec<SectionRecord> = read_records(&self.sections_path).await?;
        let chunks: Vec<ChunkRecord> = read_records(&self.chunks_path).await?;

        let section_count = sections.len();
        let chunk_count = chunks.len();
        let index = KnowledgeIndex::new(sections, chunks)?;

        info!(
            sections = section_count,
            chunks = chunk_count,
            dimensions = ?index.dimensions(),
            source = %self.describe(),
            "Knowledge index loaded"
        );

        Ok(index)
    }

    fn describe(&self) -> String {
        format!(
            "sections={} chunks={}",
            self.sections_path.display(),
            self.chunks_path.display()
        )
    }
}
