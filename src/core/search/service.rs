//! Query execution over an inverted index.
//!
//! Hits are documents containing every required word (in body or
//! title) and none of the excluded words, in document id order.

use std::sync::Arc;

use crate::core::error::Result;
use crate::core::index::{InvertedIndex, PostingSet};
use crate::core::search::query::{parse_query, QueryWord};
use crate::core::types::{SearchHit, SearchResponse};

/// Search service bound to one index
pub struct SearchService {
    index: Arc<InvertedIndex>,
    default_limit: usize,
    max_limit: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(
        index: Arc<InvertedIndex>,
        default_limit: usize,
        max_limit: usize,
        max_query_length: usize,
    ) -> Self {
        Self {
            index,
            default_limit,
            max_limit,
            max_query_length,
        }
    }

    /// Body and title postings of a word, across all of its keys
    fn postings_of(&self, word: &QueryWord) -> (PostingSet, PostingSet) {
        let snapshot = self.index.snapshot();
        let mut body = PostingSet::new();
        let mut title = PostingSet::new();
        for key in word.keys() {
            if let Some(postings) = snapshot.postings(key) {
                body.extend_from(postings);
            }
            if let Some(postings) = snapshot.title_postings(key) {
                title.extend_from(postings);
            }
        }
        (body, title)
    }

    /// Execute a query
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<SearchResponse> {
        let parsed = parse_query(self.index.tokenizer(), query, self.max_query_length)?;
        let limit = limit.unwrap_or(self.default_limit).min(self.max_limit).max(1);

        if parsed.is_empty() {
            tracing::debug!("Query {:?} has no searchable words", query);
            return Ok(SearchResponse {
                query: query.to_string(),
                words: Vec::new(),
                hits: Vec::new(),
                total: 0,
            });
        }

        let mut matched: Option<PostingSet> = None;
        let mut title_hits = PostingSet::new();

        for word in &parsed.required {
            let (body, title) = self.postings_of(word);
            let mut any = body;
            any.extend_from(&title);
            title_hits.extend_from(&title);

            matched = Some(match matched {
                Some(acc) => acc.intersection(&any),
                None => any,
            });
        }

        let mut matched = matched.unwrap_or_default();

        for word in &parsed.excluded {
            let (body, title) = self.postings_of(word);
            matched = matched.difference(&body).difference(&title);
        }

        let words = parsed.required_keys();
        let total = matched.len();
        let mut hits = Vec::with_capacity(total.min(limit));

        for id in matched.iter() {
            if hits.len() >= limit {
                break;
            }
            match self.index.document_info(id) {
                Ok(document) => hits.push(SearchHit {
                    document,
                    title_match: title_hits.contains(id),
                }),
                Err(e) => tracing::warn!("Skipping hit {}: {}", id, e),
            }
        }

        tracing::debug!(
            "Query {:?} -> {:?}: {} matches, {} returned",
            query,
            words,
            total,
            hits.len()
        );

        Ok(SearchResponse {
            query: query.to_string(),
            words,
            hits,
            total,
        })
    }
}
