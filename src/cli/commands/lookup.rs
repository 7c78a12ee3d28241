//! Lookup command - list the documents containing a term

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::DocumentInfo;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the lookup command
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Term to look up (matched as given and normalized)
    pub term: String,

    /// Index file (defaults to the configured path)
    #[arg(long)]
    pub index: Option<PathBuf>,
}

/// Lookup response
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    pub count: usize,
    pub documents: Vec<DocumentInfo>,
}

/// Execute the lookup command
pub async fn execute(
    args: LookupArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = services.open_index(args.index.as_deref())?;

    let postings = index.lookup(&args.term);
    let mut documents = Vec::with_capacity(postings.len());
    for id in postings.iter() {
        match index.document_info(id) {
            Ok(info) => documents.push(info),
            Err(e) => tracing::warn!("Skipping document {}: {}", id, e),
        }
    }

    let response = LookupResponse {
        normalized: index
            .tokenizer()
            .normalize(&args.term)
            .filter(|key| key != &args.term),
        term: args.term,
        count: documents.len(),
        documents,
    };

    match format {
        OutputFormat::Human => {
            if response.documents.is_empty() {
                println!("No documents contain '{}'", colors::label(&response.term));
            } else {
                println!(
                    "'{}' appears in {} document(s):\n",
                    colors::label(&response.term),
                    colors::number(&response.count.to_string())
                );
                for doc in &response.documents {
                    println!(
                        "[{}] {} {}",
                        colors::doc_id(&doc.id.to_string()),
                        doc.plain_title,
                        colors::file_path(&doc.filename)
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
