//! Build command - build an index from a book source directory

use crate::cli::output::{colors, format_bytes, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::SnapshotFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Root directory of the book sources
    pub source: PathBuf,

    /// Where to write the snapshot (defaults to the configured path)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Snapshot encoding (defaults to the configured format)
    #[arg(long, value_enum)]
    pub snapshot_format: Option<SnapshotFormat>,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Index lowercased words without stemming
    #[arg(long)]
    pub no_stem: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub source: String,
    pub output: String,
    pub format: SnapshotFormat,
    pub documents_indexed: usize,
    pub files_skipped: usize,
    pub terms: usize,
    pub title_terms: usize,
    pub bytes_written: u64,
    pub duration_secs: f64,
}

/// Execute the build command
pub async fn execute(
    args: BuildArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = args.source.canonicalize().map_err(|e| {
        format!(
            "Invalid path '{}': {}. Make sure the path exists and is accessible.",
            args.source.display(),
            e
        )
    })?;

    if !source.is_dir() {
        return Err(format!(
            "Path '{}' is not a directory. Point folio at the root of the book sources.",
            source.display()
        )
        .into());
    }

    let output = args
        .output
        .unwrap_or_else(|| services.config.output.path.clone());
    let snapshot_format = args.snapshot_format.unwrap_or(services.config.output.format);

    let services = if args.no_stem {
        let mut config = (*services.config).clone();
        config.tokenizer.stem = false;
        Arc::new(Services::new(config))
    } else {
        Arc::clone(services)
    };

    let pipeline = services.create_pipeline(args.include, args.exclude)?;

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Building index for {}...",
            colors::file_path(&source.display().to_string())
        );
    }

    let build_root = source.clone();
    let build_output = output.clone();
    let (stats, bytes_written) = tokio::task::spawn_blocking(move || {
        let (index, stats) = pipeline.build_directory(&build_root)?;
        let bytes = index.save(&build_output, snapshot_format)?;
        Ok::<_, crate::core::error::FolioError>((stats, bytes))
    })
    .await??;

    let response = BuildResponse {
        source: source.to_string_lossy().into_owned(),
        output: output.to_string_lossy().into_owned(),
        format: snapshot_format,
        documents_indexed: stats.documents_indexed,
        files_skipped: stats.files_skipped,
        terms: stats.terms,
        title_terms: stats.title_terms,
        bytes_written,
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} documents ({} terms, {} title terms) in {}",
                colors::success("Indexed"),
                colors::number(&response.documents_indexed.to_string()),
                colors::number(&response.terms.to_string()),
                colors::number(&response.title_terms.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            if response.files_skipped > 0 {
                println!(
                    "Skipped: {} files",
                    colors::warning(&response.files_skipped.to_string())
                );
            }
            println!(
                "Wrote {} to {}",
                colors::number(&format_bytes(response.bytes_written)),
                colors::file_path(&response.output)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
