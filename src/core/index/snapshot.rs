//! Validated, immutable index snapshot.
//!
//! `RawSnapshot` mirrors the wire layout; `IndexSnapshot` is only
//! constructed through `TryFrom<RawSnapshot>`, so every value of the
//! type satisfies:
//!
//! - `docnames`, `titles` and `filenames` are index-aligned
//! - no posting set is empty
//! - every posting refers to an existing document

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::error::{FolioError, Result};
use crate::core::index::postings::PostingSet;
use crate::core::types::{DocumentId, DocumentInfo};

static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid markup regex"));

/// Remove HTML tags from a stored title
pub fn strip_markup(title: &str) -> String {
    let text = MARKUP.replace_all(title, "");
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .trim()
        .to_string()
}

/// Wire layout of a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSnapshot {
    #[serde(alias = "documentNames")]
    pub docnames: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filenames: Vec<String>,

    #[serde(alias = "documentTitles")]
    pub titles: Vec<String>,

    pub terms: BTreeMap<String, PostingSet>,

    #[serde(default)]
    pub titleterms: BTreeMap<String, PostingSet>,

    /// Generator name to version; descriptive only
    #[serde(default, alias = "generatorMetadata")]
    pub envversion: BTreeMap<String, serde_json::Value>,

    /// Sections this crate does not interpret (`objects`, `objtypes`, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Immutable inverted index data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot", into = "RawSnapshot")]
pub struct IndexSnapshot {
    docnames: Vec<String>,
    filenames: Vec<String>,
    titles: Vec<String>,
    terms: BTreeMap<String, PostingSet>,
    titleterms: BTreeMap<String, PostingSet>,
    envversion: BTreeMap<String, serde_json::Value>,
    extra: BTreeMap<String, serde_json::Value>,
}

fn check_postings(
    section: &str,
    map: &BTreeMap<String, PostingSet>,
    document_count: usize,
) -> Result<()> {
    for (term, postings) in map {
        if postings.is_empty() {
            return Err(FolioError::Validation(format!(
                "{section} entry '{term}' has an empty posting set"
            )));
        }
        if let Some(max) = postings.max_id() {
            if max.index() >= document_count {
                return Err(FolioError::Validation(format!(
                    "{section} entry '{term}' references document {max} \
                     but only {document_count} documents exist"
                )));
            }
        }
    }
    Ok(())
}

impl TryFrom<RawSnapshot> for IndexSnapshot {
    type Error = FolioError;

    fn try_from(raw: RawSnapshot) -> Result<Self> {
        let count = raw.docnames.len();

        if count > u32::MAX as usize {
            return Err(FolioError::Validation(format!(
                "{count} documents exceed the addressable range"
            )));
        }

        if raw.titles.len() != count {
            return Err(FolioError::Validation(format!(
                "titles has {} entries but docnames has {}",
                raw.titles.len(),
                count
            )));
        }

        // Missing filenames fall back to docnames
        let filenames = if raw.filenames.is_empty() {
            raw.docnames.clone()
        } else if raw.filenames.len() != count {
            return Err(FolioError::Validation(format!(
                "filenames has {} entries but docnames has {}",
                raw.filenames.len(),
                count
            )));
        } else {
            raw.filenames
        };

        check_postings("terms", &raw.terms, count)?;
        check_postings("titleterms", &raw.titleterms, count)?;

        Ok(Self {
            docnames: raw.docnames,
            filenames,
            titles: raw.titles,
            terms: raw.terms,
            titleterms: raw.titleterms,
            envversion: raw.envversion,
            extra: raw.extra,
        })
    }
}

impl From<IndexSnapshot> for RawSnapshot {
    fn from(snapshot: IndexSnapshot) -> Self {
        Self {
            docnames: snapshot.docnames,
            filenames: snapshot.filenames,
            titles: snapshot.titles,
            terms: snapshot.terms,
            titleterms: snapshot.titleterms,
            envversion: snapshot.envversion,
            extra: snapshot.extra,
        }
    }
}

impl IndexSnapshot {
    /// Number of documents
    pub fn document_count(&self) -> usize {
        self.docnames.len()
    }

    /// Number of distinct body terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of distinct title terms
    pub fn title_term_count(&self) -> usize {
        self.titleterms.len()
    }

    /// Body postings of an exact key
    pub fn postings(&self, term: &str) -> Option<&PostingSet> {
        self.terms.get(term)
    }

    /// Title postings of an exact key
    pub fn title_postings(&self, term: &str) -> Option<&PostingSet> {
        self.titleterms.get(term)
    }

    /// All body terms in key order
    pub fn terms(&self) -> impl Iterator<Item = (&str, &PostingSet)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All title terms in key order
    pub fn title_terms(&self) -> impl Iterator<Item = (&str, &PostingSet)> {
        self.titleterms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Generator name to format version
    pub fn generator(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.envversion
    }

    /// Display metadata for a document id
    pub fn document_info(&self, id: DocumentId) -> Result<DocumentInfo> {
        let i = id.index();
        let (Some(docname), Some(filename), Some(title)) = (
            self.docnames.get(i),
            self.filenames.get(i),
            self.titles.get(i),
        ) else {
            return Err(FolioError::DocumentNotFound(id.0));
        };

        Ok(DocumentInfo {
            id,
            docname: docname.clone(),
            filename: filename.clone(),
            title: title.clone(),
            plain_title: strip_markup(title),
        })
    }

    /// Every document in id order
    pub fn documents(&self) -> impl Iterator<Item = DocumentInfo> + '_ {
        (0..self.docnames.len()).filter_map(|i| self.document_info(DocumentId(i as u32)).ok())
    }
}
