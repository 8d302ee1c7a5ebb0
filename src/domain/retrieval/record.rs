use serde::{Deserialize, Serialize};

/// A coarse-grained unit of a source document with its own embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    #[serde(alias = "section")]
    pub section_id: String,
    #[serde(alias = "source_pdf")]
    pub source_document_id: String,
    #[serde(alias = "embedding_vector")]
    pub embedding: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SectionRecord {
    pub fn new(
        section_id: impl Into<String>,
        source_document_id: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            source_document_id: source_document_id.into(),
            embedding,
            title: None,
            text: None,
        }
    }
}

/// Annotations carried alongside each chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    #[serde(alias = "source_pdf")]
    pub source_document_id: String,
    #[serde(alias = "section")]
    pub section_id: String,
    pub text: String,
}

/// A fine-grained slice of text within a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    #[serde(alias = "id")]
    pub chunk_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    section_id: Option<String>,
    #[serde(alias = "embedding_vector")]
    pub embedding: Vec<f32>,
    pub metadata: ChunkMetadata,
}

impl ChunkRecord {
    pub fn new(
        chunk_id: impl Into<String>,
        section_id: impl Into<String>,
        source_document_id: impl Into<String>,
        text: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        let section_id = section_id.into();

        Self {
            chunk_id: chunk_id.into(),
            section_id: Some(section_id.clone()),
            embedding,
            metadata: ChunkMetadata {
                source_document_id: source_document_id.into(),
                section_id,
                text: text.into(),
            },
        }
    }

    /// The section this chunk belongs to.
    ///
    /// The top-level field wins when present; files written without it carry
    /// the section only inside `metadata`.
    pub fn section_id(&self) -> &str {
        self.section_id
            .as_deref()
            .unwrap_or(&self.metadata.section_id)
    }

    /// Top-level and metadata section ids disagree
    pub(crate) fn has_conflicting_section(&self) -> bool {
        self.section_id
            .as_deref()
            .is_some_and(|id| id != self.metadata.section_id)
    }

    pub fn text(&self) -> &str {
        &self.metadata.text
    }
}
