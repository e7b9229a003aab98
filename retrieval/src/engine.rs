//! Vector database facade.

use tracing::{debug, info};

use kvectordb_embeddings::{CharCodeProvider, Embedding, EmbeddingProvider};

use crate::config::DatabaseConfig;
use crate::document::Document;
use crate::error::Result;
use crate::search::{self, SearchHit};
use crate::store::DocumentStore;

/// In-memory vector database.
///
/// This is the main entry point. It owns a [`DocumentStore`] and answers
/// nearest-neighbor queries against it:
/// - Insert documents, embedding each once
/// - Enumerate documents in insertion order
/// - Rank documents against a query by cosine similarity
///
/// Nothing is persisted; dropping the database discards every document.
#[derive(Debug, Clone)]
pub struct VectorDatabase<P = CharCodeProvider> {
    /// Configuration.
    config: DatabaseConfig,

    /// Document storage.
    store: DocumentStore<P>,
}

impl VectorDatabase {
    /// Create an empty database with the default configuration.
    pub fn new() -> Self {
        let config = DatabaseConfig::default();
        let provider = CharCodeProvider::new(kvectordb_embeddings::DEFAULT_DIMENSION);
        Self::with_provider(provider, config)
    }

    /// Create an empty database from a configuration.
    pub fn from_config(config: DatabaseConfig) -> Result<Self> {
        let dimension = config.checked_dimension()?;
        info!(
            "Initializing vector database (dimension {dimension}, default limit {})",
            config.default_limit
        );
        Ok(Self::with_provider(CharCodeProvider::new(dimension), config))
    }
}

impl Default for VectorDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EmbeddingProvider> VectorDatabase<P> {
    /// Create an empty database that embeds with `provider`.
    ///
    /// The provider decides the dimension; `config.dimension` is overwritten
    /// to match it.
    pub fn with_provider(provider: P, config: DatabaseConfig) -> Self {
        let config = config.with_dimension(provider.dimension());
        Self {
            config,
            store: DocumentStore::with_provider(provider),
        }
    }

    /// Add a document. See [`DocumentStore::insert`].
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) -> &Document {
        self.store.insert(id, text)
    }

    /// Snapshot of every document in insertion order.
    pub fn all_documents(&self) -> Vec<Document> {
        self.store.all_documents()
    }

    /// Borrowing iterator over documents in insertion order.
    pub fn documents(&self) -> std::slice::Iter<'_, Document> {
        self.store.documents()
    }

    /// Number of stored documents.
    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Embed text with this database's provider, without storing it.
    pub fn embed(&self, text: &str) -> Embedding {
        self.store.provider().embed(text)
    }

    /// Find the `limit` documents most similar to `query_text`.
    ///
    /// Hits are ordered by descending score, ties in insertion order.
    pub fn search(&self, query_text: &str, limit: usize) -> Result<Vec<SearchHit<'_>>> {
        search::search(&self.store, query_text, limit)
    }

    /// Search with the configured default limit.
    pub fn search_default(&self, query_text: &str) -> Result<Vec<SearchHit<'_>>> {
        self.search(query_text, self.config.default_limit)
    }

    /// Find the `limit` documents most similar to a precomputed vector.
    pub fn search_vector(&self, query: &[f64], limit: usize) -> Result<Vec<SearchHit<'_>>> {
        search::search_vector(&self.store, query, limit)
    }

    /// Find the single most similar document.
    pub fn search_one(&self, query_text: &str) -> Result<Option<SearchHit<'_>>> {
        let hit = self.search(query_text, 1)?.into_iter().next();
        if hit.is_none() {
            debug!("No documents to match against: {query_text}");
        }
        Ok(hit)
    }

    /// Get the configuration.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Get the underlying store.
    pub fn store(&self) -> &DocumentStore<P> {
        &self.store
    }
}
