//! Similarity search over a document store.
//!
//! Search is a linear scan: the query is embedded with the store's provider,
//! every document is scored by cosine similarity, and the scored list is
//! sorted and truncated.
//!
//! Ranking is by descending score. The sort is stable, so documents with
//! equal scores come back in insertion order.

use serde::Serialize;
use tracing::debug;

use kvectordb_embeddings::{EmbeddingProvider, find_top_k};

use crate::document::Document;
use crate::error::Result;
use crate::store::DocumentStore;

/// Default number of results for a search.
pub const DEFAULT_LIMIT: usize = 5;

/// A ranked search result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    /// The matched document.
    pub document: &'a Document,

    /// Cosine similarity between the query and the document.
    pub score: f64,
}

/// Rank the store's documents against `query_text`.
///
/// Returns at most `limit` hits. An empty store, an empty query, or a zero
/// limit all produce well-defined results rather than errors.
pub fn search<'a, P: EmbeddingProvider>(
    store: &'a DocumentStore<P>,
    query_text: &str,
    limit: usize,
) -> Result<Vec<SearchHit<'a>>> {
    let query = store.provider().embed(query_text);
    debug!("Searching {} documents for: {query_text}", store.size());
    search_vector(store, &query, limit)
}

/// Rank the store's documents against a precomputed query vector.
///
/// Fails without a partial result if `query` does not match the store's
/// dimension.
pub fn search_vector<'a, P: EmbeddingProvider>(
    store: &'a DocumentStore<P>,
    query: &[f64],
    limit: usize,
) -> Result<Vec<SearchHit<'a>>> {
    let candidates = store.documents().map(|doc| (doc, doc.vector()));

    let hits: Vec<SearchHit<'a>> = find_top_k(query, candidates, limit)?
        .into_iter()
        .map(|result| SearchHit {
            document: result.item,
            score: result.score,
        })
        .collect();

    debug!("Search returned {} of {} documents", hits.len(), store.size());
    Ok(hits)
}
