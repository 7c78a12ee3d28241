//! Source file to document conversion.
//!
//! Markdown and plain text files are indexed as written, minus any
//! YAML front matter. Jupyter notebooks are parsed and flattened
//! into the text of their cells and plain-text outputs. The title
//! is the first heading outside fenced code; files without one are
//! titled after their file stem.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{FolioError, Result};
use crate::core::types::SourceDocument;

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    #[serde(default)]
    cell_type: String,
    #[serde(default)]
    source: CellText,
    #[serde(default)]
    outputs: Vec<CellOutput>,
}

#[derive(Debug, Deserialize)]
struct CellOutput {
    #[serde(default)]
    text: Option<CellText>,
    #[serde(default)]
    data: Option<OutputData>,
}

#[derive(Debug, Deserialize)]
struct OutputData {
    #[serde(rename = "text/plain", default)]
    plain: Option<CellText>,
}

/// nbformat stores multi-line strings either whole or as a line list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellText {
    Whole(String),
    Lines(Vec<String>),
}

impl Default for CellText {
    fn default() -> Self {
        CellText::Whole(String::new())
    }
}

impl CellText {
    fn into_string(self) -> String {
        match self {
            CellText::Whole(s) => s,
            CellText::Lines(lines) => lines.concat(),
        }
    }
}

/// Root-relative path with `/` separators
fn relative_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        FolioError::IndexingFailed(format!("{path:?} is not under source root {root:?}"))
    })?;

    let parts: Vec<&str> = relative
        .components()
        .map(|c| {
            c.as_os_str()
                .to_str()
                .ok_or_else(|| FolioError::IndexingFailed(format!("Non-UTF-8 path: {path:?}")))
        })
        .collect::<Result<_>>()?;

    Ok(parts.join("/"))
}

/// Drop a leading `---` YAML block
fn strip_front_matter(text: &str) -> &str {
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return text;
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == "---" {
            return &rest[offset..];
        }
    }
    text
}

/// First ATX heading outside fenced code blocks
pub fn first_heading(markdown: &str) -> Option<String> {
    let mut in_fence = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        let hashes = trimmed.chars().take_while(|&c| c == '#').count();
        if (1..=6).contains(&hashes) {
            let rest = &trimmed[hashes..];
            if rest.starts_with(' ') || rest.starts_with('\t') {
                let title = rest.trim().trim_end_matches('#').trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
            }
        }
    }

    None
}

fn read_notebook(contents: &str) -> Result<(String, Option<String>)> {
    let notebook: Notebook = serde_json::from_str(contents)
        .map_err(|e| FolioError::IndexingFailed(format!("Malformed notebook: {e}")))?;

    let mut title = None;
    let mut parts = Vec::with_capacity(notebook.cells.len());

    for cell in notebook.cells {
        let source = cell.source.into_string();
        if title.is_none() && cell.cell_type == "markdown" {
            title = first_heading(&source);
        }
        parts.push(source);

        for output in cell.outputs {
            if let Some(text) = output.text {
                parts.push(text.into_string());
            }
            if let Some(plain) = output.data.and_then(|d| d.plain) {
                parts.push(plain.into_string());
            }
        }
    }

    Ok((parts.join("\n"), title))
}

/// Build a document from raw file contents
pub fn document_from_contents(filename: &str, contents: &str) -> Result<SourceDocument> {
    let mut doc = SourceDocument::from_filename(filename, "");

    let (text, heading) = if filename.ends_with(".ipynb") {
        read_notebook(contents)?
    } else {
        let body = strip_front_matter(contents);
        (body.to_string(), first_heading(body))
    };

    if let Some(heading) = heading {
        doc.title = heading;
    }
    doc.text = text;
    Ok(doc)
}

/// Read a source file under `root` into a document
pub fn read_document(root: &Path, path: &Path) -> Result<SourceDocument> {
    let filename = relative_name(root, path)?;

    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            FolioError::IndexingFailed(format!("Skipping non-UTF-8 file: {path:?}"))
        } else {
            FolioError::IndexingFailed(format!("Failed to read {path:?}: {e}"))
        }
    })?;

    document_from_contents(&filename, &contents)
}
