//! Search command - find documents containing every query word

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (prefix a word with '-' to exclude it)
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Index file (defaults to the configured path)
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// Maximum number of results
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show file names
    #[arg(long)]
    pub files_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub id: u32,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub title_match: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub words: Vec<String>,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = services.open_index(args.index.as_deref())?;
    let response = services.search_service(index).search(&args.query, args.limit)?;

    let output = SearchResponseOutput {
        query: response.query,
        words: response.words,
        total_results: response.total,
        results: response
            .hits
            .into_iter()
            .map(|hit| SearchResultItem {
                id: hit.document.id.0,
                file: hit.document.filename,
                title: if args.files_only {
                    None
                } else {
                    Some(hit.document.plain_title)
                },
                title_match: hit.title_match,
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&output.query));
            } else {
                if !args.files_only {
                    println!(
                        "Found {} result(s) for {}:\n",
                        colors::number(&output.total_results.to_string()),
                        colors::dim(&output.words.join(" "))
                    );
                }

                for result in &output.results {
                    match &result.title {
                        None => println!("{}", colors::file_path(&result.file)),
                        Some(title) => {
                            let title = if result.title_match {
                                colors::title_match(title)
                            } else {
                                colors::label(title)
                            };
                            println!(
                                "[{}] {} {}",
                                colors::doc_id(&result.id.to_string()),
                                title,
                                colors::file_path(&result.file)
                            );
                        }
                    }
                }

                if !args.files_only && output.total_results > output.results.len() {
                    println!(
                        "\n{}",
                        colors::dim(&format!(
                            "({} more not shown, raise --limit to see them)",
                            output.total_results - output.results.len()
                        ))
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
