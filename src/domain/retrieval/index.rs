use std::collections::{HashMap, HashSet};

use super::record::{ChunkRecord, SectionRecord};
use crate::domain::DomainError;

/// Chunk collection with a per-section lookup of chunk positions
#[derive(Debug, Clone, Default)]
pub struct ChunkIndex {
    chunks: Vec<ChunkRecord>,
    positions_by_section: HashMap<String, Vec<usize>>,
}

impl ChunkIndex {
    pub fn new(chunks: Vec<ChunkRecord>) -> Result<Self, DomainError> {
        let mut positions_by_section: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, chunk) in chunks.iter().enumerate() {
            if chunk.has_conflicting_section() {
                return Err(DomainError::index_integrity(format!(
                    "Chunk '{}' names section '{}' but its metadata says '{}'",
                    chunk.chunk_id,
                    chunk.section_id(),
                    chunk.metadata.section_id
                )));
            }

            positions_by_section
                .entry(chunk.section_id().to_string())
                .or_default()
                .push(position);
        }

        Ok(Self {
            chunks,
            positions_by_section,
        })
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunks(&self) -> &[ChunkRecord] {
        &self.chunks
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.positions_by_section.keys().map(String::as_str)
    }

    /// Chunks belonging to any of the given sections, in index input order
    pub fn chunks_in_sections(&self, section_ids: &HashSet<String>) -> Vec<&ChunkRecord> {
        let mut positions: Vec<usize> = section_ids
            .iter()
            .filter_map(|id| self.positions_by_section.get(id))
            .flatten()
            .copied()
            .collect();

        positions.sort_unstable();

        positions.into_iter().map(|p| &self.chunks[p]).collect()
    }
}

/// The loaded, validated section and chunk indices.
///
/// Built once and shared read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeIndex {
    sections: Vec<SectionRecord>,
    chunks: ChunkIndex,
    dimensions: Option<usize>,
}

impl KnowledgeIndex {
    /// Validate and assemble an index.
    ///
    /// Every vector must share one dimensionality and every chunk must point
    /// at a section that exists.
    pub fn new(sections: Vec<SectionRecord>, chunks: Vec<ChunkRecord>) -> Result<Self, DomainError> {
        let chunks = ChunkIndex::new(chunks)?;

        let mut dimensions: Option<usize> = None;
        let vectors = sections
            .iter()
            .map(|s| s.embedding.len())
            .chain(chunks.chunks().iter().map(|c| c.embedding.len()));

        for len in vectors {
            match dimensions {
                None => dimensions = Some(len),
                Some(expected) if expected != len => {
                    return Err(DomainError::invalid_embedding_dimension(expected, len));
                }
                Some(_) => {}
            }
        }

        if dimensions == Some(0) {
            return Err(DomainError::index_integrity("Index contains empty embeddings"));
        }

        if let Some(section) = sections.iter().find(|s| !all_finite(&s.embedding)) {
            return Err(DomainError::index_integrity(format!(
                "Section '{}' has a non-finite embedding component",
                section.section_id
            )));
        }

        if let Some(chunk) = chunks.chunks().iter().find(|c| !all_finite(&c.embedding)) {
            return Err(DomainError::index_integrity(format!(
                "Chunk '{}' has a non-finite embedding component",
                chunk.chunk_id
            )));
        }

        let known: HashSet<&str> = sections.iter().map(|s| s.section_id.as_str()).collect();

        if known.len() != sections.len() {
            return Err(DomainError::index_integrity("Duplicate section ids in section index"));
        }

        if let Some(dangling) = chunks.section_ids().find(|id| !known.contains(id)) {
            return Err(DomainError::index_integrity(format!(
                "Chunks reference unknown section '{}'",
                dangling
            )));
        }

        Ok(Self {
            sections,
            chunks,
            dimensions,
        })
    }

    pub fn sections(&self) -> &[SectionRecord] {
        &self.sections
    }

    pub fn chunks(&self) -> &ChunkIndex {
        &self.chunks
    }

    /// Shared vector length, or `None` for an empty index
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    /// Reject query vectors that do not match the index
    pub fn check_query(&self, query: &[f32]) -> Result<(), DomainError> {
        match self.dimensions {
            Some(expected) if expected != query.len() => Err(
                DomainError::invalid_embedding_dimension(expected, query.len()),
            ),
            _ if !all_finite(query) => Err(DomainError::validation(
                "Query embedding has a non-finite component",
            )),
            _ => Ok(()),
        }
    }
}

fn all_finite(vector: &[f32]) -> bool {
    vector.iter().all(|x| x.is_finite())
}
