//! Word splitting and normalization.
//!
//! The same tokenizer runs at build time (to produce index keys)
//! and at query time (to map user input onto those keys). A word
//! is a maximal run of alphanumeric characters or `_`, so
//! identifiers like `size_t` or `0x120050b50` survive intact.
//!
//! Normalization lowercases and stems each word. When the stemmed
//! form is rejected by the word filter (it is a stopword) but the
//! raw word is not, the raw word is kept with its original case.
//! That is why `For` or `The` can appear as keys in a snapshot
//! while `for` and `the` never do.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

use crate::core::config::TokenizerConfig;
use crate::core::error::{FolioError, Result};

static ENGLISH_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
        "near", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
        "these", "they", "this", "to", "was", "will", "with",
    ]
    .into_iter()
    .collect()
});

/// Map a configured language name onto a stemming algorithm
pub fn stemmer_algorithm(language: &str) -> Option<Algorithm> {
    let algorithm = match language.to_ascii_lowercase().as_str() {
        "arabic" => Algorithm::Arabic,
        "danish" => Algorithm::Danish,
        "dutch" => Algorithm::Dutch,
        "english" => Algorithm::English,
        "finnish" => Algorithm::Finnish,
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "greek" => Algorithm::Greek,
        "hungarian" => Algorithm::Hungarian,
        "italian" => Algorithm::Italian,
        "norwegian" => Algorithm::Norwegian,
        "portuguese" => Algorithm::Portuguese,
        "romanian" => Algorithm::Romanian,
        "russian" => Algorithm::Russian,
        "spanish" => Algorithm::Spanish,
        "swedish" => Algorithm::Swedish,
        "tamil" => Algorithm::Tamil,
        "turkish" => Algorithm::Turkish,
        _ => return None,
    };
    Some(algorithm)
}

/// Split text into raw words
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
}

/// Text tokenizer with stemming and stopword removal
pub struct Tokenizer {
    stemmer: Option<Stemmer>,
    stopwords: HashSet<&'static str>,
    language: String,
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("language", &self.language)
            .field("stem", &self.stemmer.is_some())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Result<Self> {
        let algorithm = stemmer_algorithm(&config.language).ok_or_else(|| {
            FolioError::ConfigError(format!(
                "Unsupported tokenizer language '{}'",
                config.language
            ))
        })?;

        let stemmer = config.stem.then(|| Stemmer::create(algorithm));

        // Only the English list exists; other languages index every word
        let stopwords = if config.remove_stopwords && matches!(algorithm, Algorithm::English) {
            ENGLISH_STOP_WORDS.clone()
        } else {
            HashSet::new()
        };

        Ok(Self {
            stemmer,
            stopwords,
            language: config.language.to_ascii_lowercase(),
        })
    }

    /// Tokenizer with default settings (English, stemming, stopwords)
    pub fn english() -> Self {
        Self {
            stemmer: Some(Stemmer::create(Algorithm::English)),
            stopwords: ENGLISH_STOP_WORDS.clone(),
            language: "english".to_string(),
        }
    }

    /// Lowercase and stem a single word
    pub fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(&lower).into_owned(),
            None => lower,
        }
    }

    /// Word filter applied to index keys
    ///
    /// Stopwords are only checked for words starting in the Latin-1
    /// range; very short words starting with Hiragana are dropped.
    pub fn accepts(&self, word: &str) -> bool {
        let Some(first) = word.chars().next() else {
            return false;
        };
        let code = first as u32;

        if word.chars().count() < 3 && (12354..12436).contains(&code) {
            return false;
        }

        !(code < 256 && self.stopwords.contains(word))
    }

    /// Index key for a raw word, or `None` if the word is filtered out
    pub fn normalize(&self, word: &str) -> Option<String> {
        let stemmed = self.stem(word);
        if self.accepts(&stemmed) {
            Some(stemmed)
        } else if self.accepts(word) {
            Some(word.to_string())
        } else {
            None
        }
    }

    /// Tokenize text into index keys (duplicates preserved, in order)
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(text).filter_map(|w| self.normalize(w)).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}
