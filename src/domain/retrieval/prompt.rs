use super::record::ChunkRecord;

const CHUNK_SEPARATOR: &str = "\n\n";

/// Render one chunk with its source annotation
pub fn format_chunk(chunk: &ChunkRecord) -> String {
    format!(
        "[source: {}, section: {}] {}",
        chunk.metadata.source_document_id,
        chunk.section_id(),
        chunk.text()
    )
}

/// Join ranked chunks into a single context block, separated by blank lines.
///
/// No chunks produce an empty string.
pub fn assemble_context<'a, I>(chunks: I) -> String
where
    I: IntoIterator<Item = &'a ChunkRecord>,
{
    chunks
        .into_iter()
        .map(format_chunk)
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}
