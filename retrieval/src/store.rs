//! Append-only document storage.

use std::slice;

use tracing::debug;

use kvectordb_embeddings::{CharCodeProvider, EmbeddingProvider};

use crate::document::Document;

/// An ordered, append-only collection of documents.
///
/// The store owns its embedding provider and computes every document's
/// vector itself, so all stored vectors share the provider's dimension.
/// Insertion order is preserved. Ids are not checked for uniqueness:
/// inserting the same id twice keeps both documents.
///
/// Inserting takes `&mut self` and reading takes `&self`. A host that shares
/// a store across threads wraps it in a single read/write lock.
#[derive(Debug, Clone)]
pub struct DocumentStore<P = CharCodeProvider> {
    documents: Vec<Document>,
    provider: P,
}

impl DocumentStore {
    /// Create an empty store using the default provider.
    pub fn new() -> Self {
        Self::with_provider(CharCodeProvider::default())
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EmbeddingProvider> DocumentStore<P> {
    /// Create an empty store that embeds with `provider`.
    pub fn with_provider(provider: P) -> Self {
        Self {
            documents: Vec::new(),
            provider,
        }
    }

    /// Embed `text` and append a new document.
    ///
    /// Returns the stored document. Never fails; empty text is stored with
    /// a zero vector.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) -> &Document {
        let id = id.into();
        let text = text.into();
        let vector = self.provider.embed(&text);

        debug!("Inserting document {id} ({} bytes)", text.len());

        let index = self.documents.len();
        self.documents.push(Document::new(id, text, vector));
        &self.documents[index]
    }

    /// Snapshot of every document in insertion order.
    ///
    /// The returned vector is an independent copy; changing it does not
    /// affect the store.
    pub fn all_documents(&self) -> Vec<Document> {
        self.documents.clone()
    }

    /// Borrowing iterator over documents in insertion order.
    pub fn documents(&self) -> slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Number of stored documents.
    pub fn size(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Dimension of every stored vector.
    pub fn dimension(&self) -> usize {
        self.provider.dimension()
    }

    /// The provider used for documents and queries.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
