//! Index construction from a corpus of source documents.
//!
//! Document ids follow corpus order. Title words are recorded in
//! `titleterms`; a body word is recorded in `terms` only if the same
//! key is not already a title term of that document.

use std::collections::{BTreeMap, HashSet};

use crate::core::error::{FolioError, Result};
use crate::core::index::postings::PostingSet;
use crate::core::index::snapshot::{strip_markup, IndexSnapshot, RawSnapshot};
use crate::core::indexer::tokenizer::{split_words, Tokenizer};
use crate::core::types::{DocumentId, SourceDocument};

/// Generator name recorded in built snapshots
pub const GENERATOR_NAME: &str = "folio";

/// Snapshot format version recorded in built snapshots
pub const FORMAT_VERSION: u32 = 1;

/// Builds snapshots with a fixed tokenizer
pub struct IndexBuilder<'a> {
    tokenizer: &'a Tokenizer,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Build a snapshot from documents in id order
    ///
    /// Deterministic: the same corpus always yields an identical
    /// snapshot.
    pub fn build(&self, corpus: &[SourceDocument]) -> Result<IndexSnapshot> {
        if corpus.len() > u32::MAX as usize {
            return Err(FolioError::IndexingFailed(format!(
                "{} documents exceed the addressable range",
                corpus.len()
            )));
        }

        let mut seen = HashSet::with_capacity(corpus.len());
        for doc in corpus {
            if !seen.insert(doc.docname.as_str()) {
                return Err(FolioError::IndexingFailed(format!(
                    "Duplicate document name '{}'",
                    doc.docname
                )));
            }
        }

        let mut terms: BTreeMap<String, PostingSet> = BTreeMap::new();
        let mut titleterms: BTreeMap<String, PostingSet> = BTreeMap::new();

        for (i, doc) in corpus.iter().enumerate() {
            let id = DocumentId(i as u32);

            for key in self.tokenizer.tokenize(&strip_markup(&doc.title)) {
                titleterms.entry(key).or_default().insert(id);
            }

            for word in split_words(&doc.text) {
                let Some(key) = self.tokenizer.normalize(word) else {
                    continue;
                };
                let in_title = titleterms.get(&key).is_some_and(|p| p.contains(id));
                if !in_title {
                    terms.entry(key).or_default().insert(id);
                }
            }

            tracing::trace!("Indexed document {} ({})", id, doc.docname);
        }

        let raw = RawSnapshot {
            docnames: corpus.iter().map(|d| d.docname.clone()).collect(),
            filenames: corpus.iter().map(|d| d.filename.clone()).collect(),
            titles: corpus.iter().map(|d| d.title.clone()).collect(),
            terms,
            titleterms,
            envversion: BTreeMap::from([(GENERATOR_NAME.to_string(), FORMAT_VERSION.into())]),
            extra: BTreeMap::new(),
        };

        IndexSnapshot::try_from(raw)
    }
}
