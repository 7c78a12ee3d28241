//! Snapshot encoding and decoding.
//!
//! Two encodings are supported: a bare JSON object, and the same
//! object wrapped in a `Search.setIndex(...)` call so that a static
//! page can load it with a `<script>` tag. Decoding detects the
//! wrapper automatically.

use std::fs;
use std::path::Path;

use crate::core::config::SnapshotFormat;
use crate::core::error::{FolioError, Result};
use crate::core::index::snapshot::IndexSnapshot;

const JS_PREFIX: &str = "Search.setIndex(";
const JS_SUFFIX: &str = ")";

/// Strip the `Search.setIndex(...)` wrapper if present
fn unwrap_payload(contents: &str) -> Result<&str> {
    let trimmed = contents.trim();
    let Some(rest) = trimmed.strip_prefix(JS_PREFIX) else {
        return Ok(trimmed);
    };

    let rest = rest.trim_end().trim_end_matches(';').trim_end();
    rest.strip_suffix(JS_SUFFIX).ok_or_else(|| {
        FolioError::Validation(format!(
            "'{JS_PREFIX}' wrapper is not closed with '{JS_SUFFIX}'"
        ))
    })
}

/// Detect the encoding of snapshot text
pub fn detect_format(contents: &str) -> SnapshotFormat {
    if contents.trim_start().starts_with(JS_PREFIX) {
        SnapshotFormat::Js
    } else {
        SnapshotFormat::Json
    }
}

/// Decode and validate a snapshot
pub fn decode(contents: &str) -> Result<IndexSnapshot> {
    let payload = unwrap_payload(contents)?;
    serde_json::from_str(payload).map_err(|e| FolioError::Validation(e.to_string()))
}

/// Encode a snapshot
pub fn encode(snapshot: &IndexSnapshot, format: SnapshotFormat) -> Result<String> {
    let json = serde_json::to_string(snapshot)?;
    Ok(match format {
        SnapshotFormat::Json => json,
        SnapshotFormat::Js => format!("{JS_PREFIX}{json}{JS_SUFFIX}"),
    })
}

/// Read and validate a snapshot file
pub fn load(path: &Path) -> Result<IndexSnapshot> {
    let contents = fs::read_to_string(path)?;
    let snapshot = decode(&contents)?;
    tracing::debug!(
        "Loaded snapshot {:?}: {} documents, {} terms",
        path,
        snapshot.document_count(),
        snapshot.term_count()
    );
    Ok(snapshot)
}

/// Write a snapshot file, creating parent directories
pub fn save(snapshot: &IndexSnapshot, path: &Path, format: SnapshotFormat) -> Result<u64> {
    let encoded = encode(snapshot, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &encoded)?;
    tracing::debug!("Wrote {} bytes to {:?}", encoded.len(), path);
    Ok(encoded.len() as u64)
}
