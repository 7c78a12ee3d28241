//! Doc command - show title and filename of a document

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::DocumentId;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the doc command
#[derive(Args, Debug)]
pub struct DocArgs {
    /// Document id
    pub id: u32,

    /// Index file (defaults to the configured path)
    #[arg(long)]
    pub index: Option<PathBuf>,
}

/// Execute the doc command
pub async fn execute(
    args: DocArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = services.open_index(args.index.as_deref())?;
    let info = index.document_info(DocumentId(args.id))?;

    match format {
        OutputFormat::Human => {
            println!(
                "[{}] {}",
                colors::doc_id(&info.id.to_string()),
                colors::label(&info.plain_title)
            );
            println!("  docname:  {}", info.docname);
            println!("  filename: {}", colors::file_path(&info.filename));
            if info.title != info.plain_title {
                println!("  title:    {}", colors::dim(&info.title));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
