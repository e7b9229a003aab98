//! Similarity computation for embeddings.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{EmbeddingError, Result};

fn check_dimensions(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(EmbeddingError::InvalidArgument {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Compute the cosine similarity between two embeddings.
///
/// Returns a value between -1.0 and 1.0, where:
/// - 1.0 means identical direction
/// - 0.0 means orthogonal vectors
/// - -1.0 means opposite vectors
///
/// If either vector has zero magnitude the angle is undefined and the result
/// is exactly `0.0`. The value is not clamped, so rounding may land it a hair
/// outside `[-1.0, 1.0]`.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Compute the dot product between two embeddings.
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;

    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean length of an embedding.
pub fn magnitude(embedding: &[f64]) -> f64 {
    embedding.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Normalize an embedding to unit length.
///
/// A zero vector is left untouched.
pub fn normalize(embedding: &mut [f64]) {
    let magnitude = magnitude(embedding);
    if magnitude > 0.0 {
        for x in embedding.iter_mut() {
            *x /= magnitude;
        }
    }
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult<T> {
    /// The matched item.
    pub item: T,

    /// Cosine similarity against the query.
    pub score: f64,
}

impl<T> SimilarityResult<T> {
    /// Create a new similarity result.
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }

    /// Map the matched item, keeping the score.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SimilarityResult<U> {
        SimilarityResult {
            item: f(self.item),
            score: self.score,
        }
    }
}

/// Find the top-k most similar candidates.
///
/// Results are ordered by descending score. The sort is stable, so
/// candidates with equal scores keep the order they were supplied in.
/// Every candidate is scored before anything is returned: a dimension
/// mismatch anywhere fails the whole call.
pub fn find_top_k<'a, T, I>(
    query: &[f64],
    candidates: I,
    k: usize,
) -> Result<Vec<SimilarityResult<T>>>
where
    I: IntoIterator<Item = (T, &'a [f64])>,
{
    let mut scored = candidates
        .into_iter()
        .map(|(item, embedding)| {
            cosine_similarity(query, embedding).map(|score| SimilarityResult::new(item, score))
        })
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by_key(|result| Reverse(OrderedFloat(result.score)));
    scored.truncate(k);

    Ok(scored)
}
