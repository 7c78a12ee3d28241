//! Core data types for folio.
//!
//! This module defines the data structures shared between the
//! index, the corpus reader, the searcher and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a document in the snapshot's document arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u32);

impl DocumentId {
    /// Index into the document arrays
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DocumentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single source document fed to the index builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Stable identifier, relative path without extension
    pub docname: String,

    /// Relative path with extension
    pub filename: String,

    /// Display title (may carry HTML markup)
    pub title: String,

    /// Searchable body text
    pub text: String,
}

impl SourceDocument {
    /// Create a document whose docname and title derive from the filename
    pub fn from_filename(filename: impl Into<String>, text: impl Into<String>) -> Self {
        let filename = filename.into();
        let docname = match filename.rfind('.') {
            Some(dot) if dot > filename.rfind('/').map_or(0, |s| s + 1) => {
                filename[..dot].to_string()
            }
            _ => filename.clone(),
        };
        let title = docname.rsplit('/').next().unwrap_or(&docname).to_string();

        Self {
            docname,
            filename,
            title,
            text: text.into(),
        }
    }
}

/// Display metadata of an indexed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub id: DocumentId,

    /// Stable identifier (URL fragment without extension)
    pub docname: String,

    /// Source filename
    pub filename: String,

    /// Title as stored in the snapshot
    pub title: String,

    /// Title with HTML markup removed
    pub plain_title: String,
}

/// Statistics from a build operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of documents indexed
    pub documents_indexed: usize,

    /// Files skipped (unreadable, non-UTF-8, malformed notebooks)
    pub files_skipped: usize,

    /// Distinct body terms
    pub terms: usize,

    /// Distinct title terms
    pub title_terms: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}

/// A single search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub document: DocumentInfo,

    /// True if at least one query word matched the title
    pub title_match: bool,
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Normalized words the query was reduced to
    pub words: Vec<String>,

    /// Matching documents, ordered by document id
    pub hits: Vec<SearchHit>,

    /// Number of matches before truncation
    pub total: usize,
}
