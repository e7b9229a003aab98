//! Error types for the embeddings system.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur in the embeddings system.
///
/// Vectors compared by a single store all come from the same provider, so
/// in normal operation none of these are reachable. They guard the invariant
/// for callers that hand in vectors of their own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    /// Two vectors that must share a dimension do not.
    #[error("invalid argument: vectors must have the same dimension (expected {expected}, got {actual})")]
    InvalidArgument { expected: usize, actual: usize },
}
