//! # Retrieval Engine
//!
//! This crate provides an in-memory document store with nearest-neighbor
//! search:
//!
//! - **Documents**: Caller-supplied id and text, embedded once on insert
//! - **Document Store**: Append-only, insertion-ordered storage
//! - **Search**: Linear-scan cosine similarity with stable top-k ranking
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Vector Database                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │   insert(id, text)               search(query, limit)           │
//! │         │                                 │                     │
//! │         ▼                                 ▼                     │
//! │  ┌──────────────┐   embed    ┌──────────────────────┐           │
//! │  │   Document   │ ◄───────── │  EmbeddingProvider   │           │
//! │  │    Store     │            └──────────────────────┘           │
//! │  └──────────────┘                         │                     │
//! │         │        score every document     ▼                     │
//! │         └──────────────────────► sort ► truncate ► SearchHit    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kvectordb_retrieval::VectorDatabase;
//!
//! let mut db = VectorDatabase::new();
//! db.insert("d1", "cab");
//! db.insert("d2", "abc");
//!
//! let hits = db.search("cab", 5).unwrap();
//! assert_eq!(hits[0].document.id(), "d1");
//! ```

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod search;
pub mod store;

pub use config::DatabaseConfig;
pub use document::Document;
pub use engine::VectorDatabase;
pub use error::{Result, RetrievalError};
pub use search::{DEFAULT_LIMIT, SearchHit};
pub use store::DocumentStore;
