//! # Embeddings
//!
//! This crate provides text embedding generation and vector similarity
//! for the kvectordb store.
//!
//! ## Features
//!
//! - **Embedding Generation**: Convert text to fixed-dimension unit vectors
//! - **Similarity**: Cosine similarity with a zero-vector convention
//! - **Ranking**: Stable top-k selection over scored candidates
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Embeddings System                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  EmbeddingProvider ──► Embedding ──► find_top_k                 │
//! │       │                    │              │                     │
//! │       ▼                    ▼              ▼                     │
//! │  CharCodeProvider   cosine_similarity  SimilarityResult        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bundled [`CharCodeProvider`] is a deterministic placeholder, not a
//! semantic model: it hashes character codes into a small vector. Its exact
//! arithmetic is part of the contract so stored vectors stay comparable.

use std::num::NonZeroUsize;

pub mod error;
pub mod provider;
pub mod similarity;

pub use error::{EmbeddingError, Result};
pub use provider::{CharCodeProvider, EmbeddingProvider, embed};
pub use similarity::{
    SimilarityResult, cosine_similarity, dot_product, find_top_k, magnitude, normalize,
};

/// A dense vector embedding.
pub type Embedding = Vec<f64>;

/// Dimension of embeddings produced by the default provider.
pub const DEFAULT_DIMENSION: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(dimension) => dimension,
    None => unreachable!(),
};
