use tracing::debug;

use super::ranking::{rank_top_k, ScoredRecord};
use super::record::SectionRecord;
use crate::domain::DomainError;

/// Rank whole sections against the query embedding and keep the best `top_k`.
///
/// An empty section collection yields an empty result. When `top_k` exceeds the
/// collection size every section is returned, ranked.
pub fn coarse_search_sections<'a>(
    query_embedding: &[f32],
    sections: &'a [SectionRecord],
    top_k: usize,
) -> Result<Vec<ScoredRecord<&'a SectionRecord>>, DomainError> {
    let ranked = rank_top_k(query_embedding, sections, |s| s.embedding.as_slice(), top_k)?;

    debug!(
        candidates = sections.len(),
        selected = ranked.len(),
        "Coarse section search complete"
    );

    Ok(ranked)
}
