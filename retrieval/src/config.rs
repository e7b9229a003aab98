//! Configuration for the vector database.

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, RetrievalError};
use crate::search::DEFAULT_LIMIT;

/// Configuration for a [`VectorDatabase`](crate::VectorDatabase).
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// dimension = 8
/// default_limit = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Length of every embedding vector.
    pub dimension: usize,

    /// Number of results returned when a search does not name a limit.
    pub default_limit: usize,
}

impl DatabaseConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            dimension: kvectordb_embeddings::DEFAULT_DIMENSION.get(),
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Set the embedding dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the default search limit.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// The embedding dimension, checked to be non-zero.
    pub fn checked_dimension(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.dimension)
            .ok_or_else(|| RetrievalError::Config("dimension must be at least 1".to_string()))
    }

    /// Check the configuration for values the database cannot use.
    pub fn validate(&self) -> Result<()> {
        self.checked_dimension()?;
        Ok(())
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded database configuration from {}", path.display());
        Ok(config)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new()
    }
}
