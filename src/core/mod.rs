//! Core domain logic (front-end agnostic)
//!
//! Everything here is independent of the command line: building,
//! storing and querying a static inverted index.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **index**: Postings, snapshots, codec and the queryable index
//! - **indexer**: Source walking, text extraction and tokenization
//! - **search**: Multi-word queries over an index
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod index;
pub mod indexer;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{FolioError, Result};
pub use services::Services;
