//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::{IndexingConfig, OutputConfig, SearchConfig, TokenizerConfig};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    pub indexing: &'a IndexingConfig,
    pub tokenizer: &'a TokenizerConfig,
    pub output: &'a OutputConfig,
    pub search: &'a SearchConfig,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let xdg = crate::core::xdg::XdgDirs::new();
    let config_file = xdg.config_file().to_string_lossy().into_owned();

    let response = ConfigResponse {
        config_file,
        indexing: &config.indexing,
        tokenizer: &config.tokenizer,
        output: &config.output,
        search: &config.search,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  indexing:");
            println!(
                "    max_file_size_mb: {}",
                response.indexing.max_file_size_mb
            );
            println!(
                "    include_patterns: {:?}",
                response.indexing.include_patterns
            );
            println!(
                "    exclude_patterns: {:?}",
                response.indexing.exclude_patterns
            );
            println!("  tokenizer:");
            println!("    language: {}", response.tokenizer.language);
            println!("    stem: {}", response.tokenizer.stem);
            println!(
                "    remove_stopwords: {}",
                response.tokenizer.remove_stopwords
            );
            println!("  output:");
            println!("    path: {}", response.output.path.display());
            println!("    format: {:?}", response.output.format);
            println!("  search:");
            println!("    default_limit: {}", response.search.default_limit);
            println!("    max_limit: {}", response.search.max_limit);
            println!(
                "    max_query_length: {}",
                response.search.max_query_length
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
