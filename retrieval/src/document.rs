//! Stored documents.

use serde::Serialize;

use kvectordb_embeddings::Embedding;

/// A document held by a [`DocumentStore`](crate::DocumentStore).
///
/// Documents are only created by the store, which computes the vector from
/// the text at insertion time. All fields are read-only afterwards.
///
/// Equality is strict: ids and texts must match and every vector component
/// must compare equal as `f64`. There is no tolerance, so this is meant for
/// deterministic checks, not fuzzy duplicate detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    id: String,
    text: String,
    vector: Embedding,
}

impl Document {
    pub(crate) fn new(id: String, text: String, vector: Embedding) -> Self {
        Self { id, text, vector }
    }

    /// Caller-supplied identifier. Not necessarily unique within a store.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The original text, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The embedding computed at insertion time.
    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}
