//! Info command - show statistics about an index file

use crate::cli::output::{colors, format_bytes, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::config::SnapshotFormat;
use crate::core::index::codec;
use crate::core::services::Services;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Index file (defaults to the configured path)
    #[arg(long)]
    pub index: Option<PathBuf>,
}

/// Index information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub version: String,
    pub path: String,
    pub format: SnapshotFormat,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    pub documents: usize,
    pub terms: usize,
    pub title_terms: usize,
    pub generator: BTreeMap<String, serde_json::Value>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = args
        .index
        .unwrap_or_else(|| services.config.output.path.clone());

    let contents = tokio::fs::read_to_string(&path).await?;
    let metadata = tokio::fs::metadata(&path).await?;
    let snapshot = codec::decode(&contents)?;

    let info = InfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string_lossy().into_owned(),
        format: codec::detect_format(&contents),
        size_bytes: metadata.len(),
        modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        documents: snapshot.document_count(),
        terms: snapshot.term_count(),
        title_terms: snapshot.title_term_count(),
        generator: snapshot.generator().clone(),
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label(&info.path));
            println!(
                "  Format:      {} ({})",
                match info.format {
                    SnapshotFormat::Js => "js",
                    SnapshotFormat::Json => "json",
                },
                format_bytes(info.size_bytes)
            );
            if let Some(modified) = &info.modified {
                println!(
                    "  Modified:    {} ({})",
                    modified.format("%Y-%m-%d %H:%M:%S UTC"),
                    colors::dim(&format_relative_time(modified))
                );
            }
            println!(
                "  Documents:   {}",
                colors::number(&info.documents.to_string())
            );
            println!("  Terms:       {}", colors::number(&info.terms.to_string()));
            println!(
                "  Title terms: {}",
                colors::number(&info.title_terms.to_string())
            );
            if !info.generator.is_empty() {
                let generator: Vec<String> = info
                    .generator
                    .iter()
                    .map(|(name, version)| match version {
                        serde_json::Value::String(v) => format!("{name} {v}"),
                        other => format!("{name} {other}"),
                    })
                    .collect();
                println!("  Generator:   {}", generator.join(", "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
