//! Embedding providers.
//!
//! Providers turn text into fixed-dimension vectors. They are stateless and
//! synchronous, so a single instance can be shared freely between a store
//! and ad-hoc diagnostic calls.

use std::num::NonZeroUsize;

use tracing::trace;

use crate::similarity::normalize;
use crate::{DEFAULT_DIMENSION, Embedding};

/// Trait for embedding providers.
pub trait EmbeddingProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Length of every vector this provider returns.
    fn dimension(&self) -> usize;

    /// Generate an embedding for the given text.
    ///
    /// Must be deterministic: the same text always yields a bit-identical
    /// vector of length [`dimension`](Self::dimension).
    fn embed(&self, text: &str) -> Embedding;
}

/// Character-code embedding provider.
///
/// A placeholder for a real model. The text is lower-cased, then the code
/// point of the character at position `i` is added, scaled by `1/1000`, to
/// bucket `i % dimension`. The accumulated vector is scaled to unit length
/// unless it is all zeros (for example, empty text), in which case it is
/// returned as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCodeProvider {
    dimension: NonZeroUsize,
}

impl CharCodeProvider {
    /// Create a provider emitting vectors of the given dimension.
    pub fn new(dimension: NonZeroUsize) -> Self {
        Self { dimension }
    }
}

impl Default for CharCodeProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl EmbeddingProvider for CharCodeProvider {
    fn name(&self) -> &str {
        "char-code"
    }

    fn dimension(&self) -> usize {
        self.dimension.get()
    }

    fn embed(&self, text: &str) -> Embedding {
        let dimension = self.dimension.get();
        let mut vector = vec![0.0f64; dimension];

        for (index, ch) in text.to_lowercase().chars().enumerate() {
            vector[index % dimension] += f64::from(u32::from(ch)) / 1000.0;
        }

        normalize(&mut vector);
        trace!("Embedded {} bytes of text into {dimension} dimensions", text.len());
        vector
    }
}

/// Embed text with the default provider.
pub fn embed(text: &str) -> Embedding {
    CharCodeProvider::default().embed(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{cosine_similarity, magnitude};
    use pretty_assertions::assert_eq;

    fn dim(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_default_dimension() {
        let provider = CharCodeProvider::default();
        assert_eq!(provider.dimension(), 5);
        assert_eq!(provider.name(), "char-code");
        assert_eq!(embed("hello").len(), 5);
    }

    #[test]
    fn test_embed_is_deterministic() {
        let first = embed("I database vettoriali sono utili");
        let second = embed("I database vettoriali sono utili");
        let first_bits: Vec<u64> = first.iter().map(|x| x.to_bits()).collect();
        let second_bits: Vec<u64> = second.iter().map(|x| x.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_embed_known_vector() {
        // 'a' = 97, 'b' = 98, 'c' = 99 land in buckets 0..3.
        let v = embed("abc");
        let norm = (0.097f64.powi(2) + 0.098f64.powi(2) + 0.099f64.powi(2)).sqrt();

        assert!((v[0] - 0.097 / norm).abs() < 1e-12);
        assert!((v[1] - 0.098 / norm).abs() < 1e-12);
        assert!((v[2] - 0.099 / norm).abs() < 1e-12);
        assert_eq!(v[3], 0.0);
        assert_eq!(v[4], 0.0);
    }

    #[test]
    fn test_embed_wraps_positions() {
        // Positions 0 and 2 share bucket 0 when the dimension is 2.
        let provider = CharCodeProvider::new(dim(2));
        let v = provider.embed("aba");
        let norm = ((0.097f64 + 0.097).powi(2) + 0.098f64.powi(2)).sqrt();

        assert!((v[0] - 0.194 / norm).abs() < 1e-12);
        assert!((v[1] - 0.098 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_embed_is_case_insensitive() {
        assert_eq!(embed("Hello World"), embed("hello world"));
    }

    #[test]
    fn test_embed_is_position_sensitive() {
        let cab = embed("cab");
        let abc = embed("abc");
        assert_ne!(cab, abc);
        assert!(cosine_similarity(&cab, &abc).unwrap() < 1.0);
    }

    #[test]
    fn test_embed_empty_text_is_zero_vector() {
        let v = embed("");
        assert_eq!(v, vec![0.0; 5]);
        assert_eq!(magnitude(&v), 0.0);
    }

    #[test]
    fn test_embed_unit_norm() {
        for text in ["x", "hello", "La similarità coseno misura", "12345678901"] {
            let norm = magnitude(&embed(text));
            assert!((norm - 1.0).abs() < 1e-12, "norm of {text:?} was {norm}");
        }
    }

    #[test]
    fn test_self_similarity() {
        for text in ["x", "cab", "Le reti neurali generano embedding"] {
            let v = embed(text);
            let sim = cosine_similarity(&v, &v).unwrap();
            assert!((sim - 1.0).abs() < 1e-12, "self similarity of {text:?} was {sim}");
        }
    }

    #[test]
    fn test_custom_dimension() {
        let provider = CharCodeProvider::new(dim(8));
        assert_eq!(provider.embed("anything").len(), 8);
        assert_eq!(provider.embed("").len(), 8);
    }
}
