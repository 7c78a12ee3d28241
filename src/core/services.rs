//! Unified service container for Folio
//!
//! Provides shared access to configuration and the factories every
//! command goes through.

use std::path::Path;
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::index::InvertedIndex;
use crate::core::indexer::{FileWalker, IndexingPipeline, Tokenizer};
use crate::core::search::SearchService;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Tokenizer built from the `[tokenizer]` section
    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Tokenizer::new(&self.config.tokenizer)
    }

    /// Create an IndexingPipeline with request-specific patterns
    ///
    /// Empty pattern lists fall back to the configured ones.
    pub fn create_pipeline(
        &self,
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
    ) -> Result<IndexingPipeline> {
        let include = if include_patterns.is_empty() {
            self.config.indexing.include_patterns.clone()
        } else {
            include_patterns
        };
        let exclude = if exclude_patterns.is_empty() {
            self.config.indexing.exclude_patterns.clone()
        } else {
            exclude_patterns
        };

        let walker = FileWalker::new(include, exclude, self.config.indexing.max_file_size_mb)?;
        Ok(IndexingPipeline::new(walker, self.tokenizer()?))
    }

    /// Load the snapshot at `path`, or at the configured output path
    pub fn open_index(&self, path: Option<&Path>) -> Result<Arc<InvertedIndex>> {
        let path = path.unwrap_or(self.config.output.path.as_path());
        tracing::debug!("Loading index from {:?}", path);
        let index = InvertedIndex::load(path, self.tokenizer()?)?;
        Ok(Arc::new(index))
    }

    /// Search service over a loaded index with configured limits
    pub fn search_service(&self, index: Arc<InvertedIndex>) -> SearchService {
        SearchService::new(
            index,
            self.config.search.default_limit,
            self.config.search.max_limit,
            self.config.search.max_query_length,
        )
    }
}
