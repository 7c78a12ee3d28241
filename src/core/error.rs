//! Error types and error handling for folio.
//!
//! This module defines the error types used throughout the
//! application. Presentation of errors (colored CLI output, exit
//! codes) is handled in the CLI adapter.

use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Main error type for folio
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Document not found: {0}")]
    DocumentNotFound(u32),

    #[error("Invalid index snapshot: {0}")]
    Validation(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Indexing failed: {0}")]
    IndexingFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl FolioError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::DocumentNotFound(_))
    }

    /// Check if the snapshot failed validation
    pub fn is_validation(&self) -> bool {
        matches!(self, FolioError::Validation(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            FolioError::InvalidQuery(_) | FolioError::ConfigError(_)
        )
    }
}
