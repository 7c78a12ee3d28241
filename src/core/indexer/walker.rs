//! Book source walker with pattern-based filtering.
//!
//! Traverses a book's source tree and selects the files that become
//! documents. Hidden directories (`.git`, `.ipynb_checkpoints`) are
//! never entered. Walk errors are logged and skipped.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{FolioError, Result};

fn compile(kind: &str, patterns: Vec<String>) -> Result<Vec<Pattern>> {
    patterns
        .into_iter()
        .map(|p| {
            Pattern::new(&p)
                .map_err(|e| FolioError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}")))
        })
        .collect()
}

/// File system walker with pattern-based filtering
pub struct FileWalker {
    include_patterns: Vec<Pattern>,
    exclude_patterns: Vec<Pattern>,
    max_file_size_bytes: u64,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    ///   (matched against the file name and the relative path)
    /// * `exclude_patterns` - Glob patterns for files to exclude
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include_patterns: compile("include", include_patterns)?,
            exclude_patterns: compile("exclude", exclude_patterns)?,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect matching files under `root`, sorted by path
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(FolioError::IndexingFailed(format!(
                "Source root {root:?} is not a directory"
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_descend(e, root))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if let Ok(metadata) = entry.metadata() {
                if metadata.len() > self.max_file_size_bytes {
                    tracing::debug!("Skipping large file: {:?} ({} bytes)", path, metadata.len());
                    continue;
                }
            }

            let relative = path.strip_prefix(root).unwrap_or(path);
            if self.matches_patterns(relative) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Skip hidden and excluded directories before descending
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root || !entry.file_type().is_dir() {
            return true;
        }

        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
        {
            return false;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let excluded = self
            .exclude_patterns
            .iter()
            .any(|p| p.matches_path(relative) || p.matches(&format!("/{}/", relative.display())));
        if excluded {
            tracing::debug!("Skipping excluded directory: {:?}", path);
        }
        !excluded
    }

    /// Check a root-relative path against include/exclude patterns
    fn matches_patterns(&self, relative: &Path) -> bool {
        let Some(path_str) = relative.to_str() else {
            return false;
        };
        let file_name = relative.file_name().and_then(|f| f.to_str()).unwrap_or("");

        let included = self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| p.matches(path_str) || p.matches(file_name));

        included
            && !self
                .exclude_patterns
                .iter()
                .any(|p| p.matches(path_str) || p.matches(&format!("/{path_str}")))
    }
}
