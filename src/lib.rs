//! Folio - static search indexes for documentation books
//!
//! Builds a compact inverted index (term to document ids, plus
//! document id to title and filename) from a book's Markdown and
//! notebook sources, and answers lookups against it. The snapshot is
//! written as `Search.setIndex({...})` so a static page can load it
//! without a server.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - index (postings, snapshot validation, codec)
//!   - indexer (file walking, text extraction, tokenization)
//!   - search (AND queries with exclusions)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{FolioError, Result};
pub use core::index::{IndexSnapshot, InvertedIndex, PostingSet};
pub use core::services::Services;
pub use core::types::*;
