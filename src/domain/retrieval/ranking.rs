use serde::Serialize;

use crate::domain::embedding::cosine_similarity;
use crate::domain::DomainError;

/// A record paired with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord<T> {
    pub record: T,
    pub score: f32,
}

impl<T> ScoredRecord<T> {
    pub fn new(record: T, score: f32) -> Self {
        Self { record, score }
    }
}

impl<T: Clone> ScoredRecord<&T> {
    pub fn cloned(&self) -> ScoredRecord<T> {
        ScoredRecord::new(self.record.clone(), self.score)
    }
}

/// Score every candidate against the query and keep the best `top_k`.
///
/// Results are ordered by descending cosine similarity. The sort is stable, so
/// candidates with equal scores keep their input order. Every candidate vector
/// must have the same length as the query.
pub fn rank_top_k<'a, T, I, F>(
    query: &[f32],
    candidates: I,
    embedding_of: F,
    top_k: usize,
) -> Result<Vec<ScoredRecord<&'a T>>, DomainError>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> &[f32],
{
    if top_k == 0 {
        return Err(DomainError::validation("top_k must be at least 1"));
    }

    let mut scored = Vec::new();

    for candidate in candidates {
        let embedding = embedding_of(candidate);

        if embedding.len() != query.len() {
            return Err(DomainError::invalid_embedding_dimension(
                embedding.len(),
                query.len(),
            ));
        }

        scored.push(ScoredRecord::new(
            candidate,
            cosine_similarity(query, embedding),
        ));
    }

    scored.sort_by(|a, b| rank_key(b.score).total_cmp(&rank_key(a.score)));
    scored.truncate(top_k);

    Ok(scored)
}

/// NaN scores rank below every real score; -0.0 ties with 0.0
fn rank_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectors() -> Vec<(&'static str, Vec<f32>)> {
        vec![
            ("a", vec![0.0, 1.0]),
            ("b", vec![1.0, 0.0]),
            ("c", vec![0.7, 0.7]),
        ]
    }

    #[test]
    fn test_rank_orders_by_descending_score() {
        let items = vectors();

        let ranked = rank_top_k(&[1.0, 0.1], &items, |(_, v)| v.as_slice(), 3).unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.record.0).collect();

        assert_eq!(names, vec!["b", "c", "a"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let items = vec![
            ("first", vec![1.0, 0.0]),
            ("second", vec![2.0, 0.0]),
            ("third", vec![0.5, 0.0]),
        ];

        let ranked = rank_top_k(&[1.0, 0.0], &items, |(_, v)| v.as_slice(), 2).unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.record.0).collect();

        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_rank_truncates_to_min_of_k_and_n() {
        let items = vectors();

        for k in 1..6 {
            let ranked = rank_top_k(&[0.3, 0.4], &items, |(_, v)| v.as_slice(), k).unwrap();
            assert_eq!(ranked.len(), k.min(items.len()));
        }
    }

    #[test]
    fn test_rank_positive_scaling_preserves_order() {
        let items = vectors();
        let scaled: Vec<(&str, Vec<f32>)> = items
            .iter()
            .enumerate()
            .map(|(i, (n, v))| (*n, v.iter().map(|x| x * (i as f32 + 1.5) * 10.0).collect()))
            .collect();

        let query = [0.6, 0.35];
        let plain = rank_top_k(&query, &items, |(_, v)| v.as_slice(), 3).unwrap();
        let rescaled = rank_top_k(&query, &scaled, |(_, v)| v.as_slice(), 3).unwrap();

        let plain_names: Vec<&str> = plain.iter().map(|r| r.record.0).collect();
        let rescaled_names: Vec<&str> = rescaled.iter().map(|r| r.record.0).collect();
        assert_eq!(plain_names, rescaled_names);
    }

    #[test]
    fn test_rank_rejects_dimension_mismatch() {
        let items = vectors();

        let result = rank_top_k(&[1.0, 0.0, 0.0], &items, |(_, v)| v.as_slice(), 1);

        assert!(matches!(
            result,
            Err(DomainError::InvalidEmbeddingDimension {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_rank_puts_nan_scores_last() {
        let items = vec![
            ("overflow", vec![f32::INFINITY, 0.0]),
            ("exact", vec![0.0, 1.0]),
            ("orthogonal", vec![1.0, 0.0]),
        ];

        let ranked = rank_top_k(&[0.0, 1.0], &items, |(_, v)| v.as_slice(), 3).unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.record.0).collect();

        assert_eq!(names, vec!["exact", "orthogonal", "overflow"]);
        assert!(ranked[2].score.is_nan());
    }

    #[test]
    fn test_rank_rejects_zero_k() {
        let items = vectors();

        let result = rank_top_k(&[1.0, 0.0], &items, |(_, v)| v.as_slice(), 0);

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
