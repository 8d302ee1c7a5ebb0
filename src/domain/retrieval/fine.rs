use std::collections::HashSet;

use tracing::debug;

use super::index::ChunkIndex;
use super::ranking::{rank_top_k, ScoredRecord};
use super::record::ChunkRecord;
use crate::domain::DomainError;

/// Rank chunks from the target sections against the query embedding.
///
/// Only chunks whose section is in `target_sections` are scored. An empty
/// target set returns immediately without touching the chunk collection.
pub fn fine_search_chunks<'a>(
    query_embedding: &[f32],
    chunk_index: &'a ChunkIndex,
    target_sections: &HashSet<String>,
    top_k: usize,
) -> Result<Vec<ScoredRecord<&'a ChunkRecord>>, DomainError> {
    if top_k == 0 {
        return Err(DomainError::validation("top_k must be at least 1"));
    }

    if target_sections.is_empty() {
        return Ok(Vec::new());
    }

    let candidates = chunk_index.chunks_in_sections(target_sections);
    let candidate_count = candidates.len();

    let ranked = rank_top_k(
        query_embedding,
        candidates,
        |c| c.embedding.as_slice(),
        top_k,
    )?;

    debug!(
        sections = target_sections.len(),
        candidates = candidate_count,
        selected = ranked.len(),
        "Fine chunk search complete"
    );

    Ok(ranked)
}
