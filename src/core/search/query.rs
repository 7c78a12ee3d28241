//! Query parsing.
//!
//! A query is a whitespace-separated list of words. Words prefixed
//! with `-` exclude documents. Every piece is split and normalized
//! with the index tokenizer, so `Templates` in a query finds the
//! `templat` key and `size_t` stays a single word. Stopwords drop
//! out of the query the same way they dropped out of the index.
//!
//! Each word also keeps its lowercased form, which is the key an
//! index built without stemming stores it under.

use crate::core::error::{FolioError, Result};
use crate::core::indexer::tokenizer::{split_words, Tokenizer};

/// One query word and the index keys it may be stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord {
    /// Key produced by the index tokenizer
    pub key: String,

    /// Lowercased forms typed for this key
    pub raw: Vec<String>,
}

impl QueryWord {
    /// Distinct keys to match, normalized key first
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key.as_str())
            .chain(self.raw.iter().map(String::as_str).filter(move |r| *r != self.key))
    }
}

/// Normalized query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Words every hit must contain
    pub required: Vec<QueryWord>,

    /// Words no hit may contain
    pub excluded: Vec<QueryWord>,
}

impl ParsedQuery {
    /// True if no usable word survived normalization
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// Normalized keys of the required words
    pub fn required_keys(&self) -> Vec<String> {
        self.required.iter().map(|w| w.key.clone()).collect()
    }
}

/// Add `raw` under `key`, merging words that normalize to the same key
fn push_word(words: &mut Vec<QueryWord>, key: String, raw: String) {
    match words.iter_mut().find(|w| w.key == key) {
        Some(word) => {
            if !word.raw.contains(&raw) {
                word.raw.push(raw);
            }
        }
        None => words.push(QueryWord {
            key,
            raw: vec![raw],
        }),
    }
}

/// Parse a raw query string
///
/// Fails on blank queries and on queries longer than
/// `max_query_length` characters.
pub fn parse_query(tokenizer: &Tokenizer, query: &str, max_query_length: usize) -> Result<ParsedQuery> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err(FolioError::InvalidQuery(
            "Query cannot be empty".to_string(),
        ));
    }

    let length = trimmed.chars().count();
    if length > max_query_length {
        return Err(FolioError::InvalidQuery(format!(
            "Query is {length} characters long, maximum is {max_query_length}"
        )));
    }

    let mut parsed = ParsedQuery::default();

    for piece in trimmed.split_whitespace() {
        let (exclude, body) = match piece.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, piece),
        };

        for word in split_words(body) {
            let Some(key) = tokenizer.normalize(word) else {
                continue;
            };
            let words = if exclude {
                &mut parsed.excluded
            } else {
                &mut parsed.required
            };
            push_word(words, key, word.to_lowercase());
        }
    }

    Ok(parsed)
}
