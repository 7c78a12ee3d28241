//! Configuration management for folio.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{FolioError, Result};
use crate::core::indexer::tokenizer::stemmer_algorithm;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Corpus collection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

/// Word normalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenizerConfig {
    /// Apply the stemmer to every word
    #[serde(default = "default_true")]
    pub stem: bool,

    /// Drop stopwords (English only)
    #[serde(default = "default_true")]
    pub remove_stopwords: bool,

    /// Stemmer language
    #[serde(default = "default_language")]
    pub language: String,
}

/// Snapshot output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where `build` writes the snapshot and where queries read it
    #[serde(default = "default_index_path")]
    pub path: PathBuf,

    /// Snapshot encoding
    #[serde(default)]
    pub format: SnapshotFormat,
}

/// On-disk encoding of a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    /// `Search.setIndex({...})`, loadable by a static page
    #[default]
    Js,
    /// Bare JSON object
    Json,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "english".to_string()
}

fn default_max_file_size() -> usize {
    10
}

fn default_index_path() -> PathBuf {
    PathBuf::from("searchindex.js")
}

fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    200
}

fn default_max_query_length() -> usize {
    500
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.md".to_string(), "*.ipynb".to_string(), "*.txt".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/_build/**".to_string(),
        "**/.ipynb_checkpoints/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
        "**/.git/**".to_string(),
    ]
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            stem: true,
            remove_stopwords: true,
            language: default_language(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_index_path(),
            format: SnapshotFormat::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FolioError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. FOLIO_CONFIG env var
    /// 2. XDG config file (~/.config/folio/config.toml)
    /// 3. ./folio.toml next to the book sources
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("FOLIO_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("folio.toml").exists() {
                Self::from_file("folio.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Indexing configuration
        if let Ok(max_size) = env::var("FOLIO_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.indexing.max_file_size_mb = size;
            }
        }

        // Tokenizer configuration
        if let Ok(stem) = env::var("FOLIO_STEM") {
            if let Ok(s) = stem.parse() {
                self.tokenizer.stem = s;
            }
        }
        if let Ok(language) = env::var("FOLIO_LANGUAGE") {
            self.tokenizer.language = language;
        }

        // Output configuration
        if let Ok(path) = env::var("FOLIO_INDEX_PATH") {
            self.output.path = PathBuf::from(path);
        }
        if let Ok(format) = env::var("FOLIO_INDEX_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "js" => self.output.format = SnapshotFormat::Js,
                "json" => self.output.format = SnapshotFormat::Json,
                other => tracing::warn!("Ignoring unknown FOLIO_INDEX_FORMAT '{}'", other),
            }
        }

        // Search configuration
        if let Ok(limit) = env::var("FOLIO_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(max_limit) = env::var("FOLIO_MAX_LIMIT") {
            if let Ok(l) = max_limit.parse() {
                self.search.max_limit = l;
            }
        }
        if let Ok(max_query_len) = env::var("FOLIO_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.max_file_size_mb == 0 {
            return Err(FolioError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if stemmer_algorithm(&self.tokenizer.language).is_none() {
            return Err(FolioError::ConfigError(format!(
                "Unsupported tokenizer language '{}'",
                self.tokenizer.language
            )));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(FolioError::ConfigError(
                "Output path cannot be empty".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(FolioError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(FolioError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(FolioError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max file size: {} MB", self.indexing.max_file_size_mb);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.indexing.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::info!(
            "  Tokenizer: {} (stem={}, stopwords={})",
            self.tokenizer.language,
            self.tokenizer.stem,
            self.tokenizer.remove_stopwords
        );
        tracing::info!("  Index path: {:?}", self.output.path);
        tracing::info!("  Index format: {:?}", self.output.format);
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
    }
}
