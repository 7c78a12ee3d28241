//! Static inverted index.
//!
//! # Architecture
//!
//! - **PostingSet**: ordered document id set with compact wire form
//! - **IndexSnapshot**: validated, immutable term and document tables
//! - **IndexBuilder**: corpus to snapshot
//! - **codec**: JSON and `Search.setIndex(...)` encodings
//! - **InvertedIndex**: snapshot plus the tokenizer used to query it
//!
//! An `InvertedIndex` is never mutated after construction and is
//! `Send + Sync`, so one value can be shared behind an `Arc` by any
//! number of readers.

pub mod builder;
pub mod codec;
pub mod postings;
pub mod snapshot;

pub use builder::IndexBuilder;
pub use postings::PostingSet;
pub use snapshot::{IndexSnapshot, RawSnapshot};

use std::path::Path;

use crate::core::config::SnapshotFormat;
use crate::core::error::Result;
use crate::core::indexer::Tokenizer;
use crate::core::types::{DocumentId, DocumentInfo, SourceDocument};

/// Queryable inverted index
#[derive(Debug)]
pub struct InvertedIndex {
    snapshot: IndexSnapshot,
    tokenizer: Tokenizer,
}

impl InvertedIndex {
    /// Wrap an already validated snapshot
    pub fn from_snapshot(snapshot: IndexSnapshot, tokenizer: Tokenizer) -> Self {
        Self {
            snapshot,
            tokenizer,
        }
    }

    /// Build an index from a corpus
    pub fn build(corpus: &[SourceDocument], tokenizer: Tokenizer) -> Result<Self> {
        let snapshot = IndexBuilder::new(&tokenizer).build(corpus)?;
        Ok(Self::from_snapshot(snapshot, tokenizer))
    }

    /// Load and validate a snapshot file
    pub fn load(path: &Path, tokenizer: Tokenizer) -> Result<Self> {
        let snapshot = codec::load(path)?;
        Ok(Self::from_snapshot(snapshot, tokenizer))
    }

    /// Persist the snapshot, returning the number of bytes written
    pub fn save(&self, path: &Path, format: SnapshotFormat) -> Result<u64> {
        codec::save(&self.snapshot, path, format)
    }

    pub fn snapshot(&self) -> &IndexSnapshot {
        &self.snapshot
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Documents whose content contained `term` at build time
    ///
    /// Matches the key exactly as given and the key the tokenizer
    /// normalizes it to, in both body and title terms. Unknown terms
    /// yield an empty set.
    pub fn lookup(&self, term: &str) -> PostingSet {
        let mut result = PostingSet::new();
        let normalized = self.tokenizer.normalize(term);

        let keys = std::iter::once(term).chain(normalized.as_deref());
        for key in keys {
            if let Some(postings) = self.snapshot.postings(key) {
                result.extend_from(postings);
            }
            if let Some(postings) = self.snapshot.title_postings(key) {
                result.extend_from(postings);
            }
        }

        result
    }

    /// Display metadata for a document
    pub fn document_info(&self, id: DocumentId) -> Result<DocumentInfo> {
        self.snapshot.document_info(id)
    }
}
