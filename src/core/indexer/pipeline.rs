//! Build pipeline orchestration.
//!
//! Coordinates the end-to-end build workflow:
//! 1. Walk the book source tree
//! 2. Read each file into a document
//! 3. Order documents by docname
//! 4. Build the inverted index

use std::path::Path;
use std::time::Instant;

use crate::core::error::Result;
use crate::core::index::InvertedIndex;
use crate::core::indexer::{source, FileWalker, Tokenizer};
use crate::core::types::{BuildStats, SourceDocument};

/// Orchestrates the build pipeline
pub struct IndexingPipeline {
    walker: FileWalker,
    tokenizer: Tokenizer,
}

impl IndexingPipeline {
    /// Create a new pipeline
    ///
    /// # Arguments
    ///
    /// * `walker` - Selects the source files
    /// * `tokenizer` - Normalizes words into index keys
    pub fn new(walker: FileWalker, tokenizer: Tokenizer) -> Self {
        Self { walker, tokenizer }
    }

    /// Read every matching file under `root` into documents
    ///
    /// Files that cannot be read are logged and counted but don't
    /// stop the process. Returns the documents sorted by docname and
    /// the number of skipped files.
    pub fn collect_corpus(&self, root: &Path) -> Result<(Vec<SourceDocument>, usize)> {
        tracing::info!("Collecting sources from {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} source files", files.len());

        let mut corpus = Vec::with_capacity(files.len());
        let mut skipped = 0;

        for file_path in &files {
            match source::read_document(root, file_path) {
                Ok(doc) => {
                    tracing::debug!("Read {:?} as '{}' ({})", file_path, doc.docname, doc.title);
                    corpus.push(doc);
                }
                Err(e) => {
                    tracing::warn!("Failed to process {:?}: {}", file_path, e);
                    skipped += 1;
                }
            }
        }

        corpus.sort_by(|a, b| a.docname.cmp(&b.docname));

        // Two sources with the same stem (intro.md, intro.ipynb) map to one docname
        let before = corpus.len();
        corpus.dedup_by(|later, earlier| {
            let duplicate = later.docname == earlier.docname;
            if duplicate {
                tracing::warn!(
                    "Skipping {} (document '{}' already provided by {})",
                    later.filename,
                    later.docname,
                    earlier.filename
                );
            }
            duplicate
        });
        skipped += before - corpus.len();

        Ok((corpus, skipped))
    }

    /// Build an index from a book source directory
    pub fn build_directory(self, root: &Path) -> Result<(InvertedIndex, BuildStats)> {
        let start = Instant::now();

        let (corpus, files_skipped) = self.collect_corpus(root)?;
        let index = InvertedIndex::build(&corpus, self.tokenizer)?;

        let snapshot = index.snapshot();
        let stats = BuildStats {
            documents_indexed: snapshot.document_count(),
            files_skipped,
            terms: snapshot.term_count(),
            title_terms: snapshot.title_term_count(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Build complete: {} documents, {} skipped, {} terms, {} title terms in {}ms",
            stats.documents_indexed,
            stats.files_skipped,
            stats.terms,
            stats.title_terms,
            stats.duration_ms
        );

        Ok((index, stats))
    }
}
