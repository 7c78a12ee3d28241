//! Corpus collection and word normalization.
//!
//! Handles everything between a book's source tree and the index
//! builder:
//!
//! - File system walking with pattern matching
//! - Markdown and notebook text extraction
//! - Tokenization, stemming and stopword filtering
//! - Build pipeline orchestration

pub mod pipeline;
pub mod source;
pub mod tokenizer;
pub mod walker;

pub use pipeline::IndexingPipeline;
pub use tokenizer::Tokenizer;
pub use walker::FileWalker;
