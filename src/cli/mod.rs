//! CLI adapter for Folio
//!
//! Provides the command-line interface for building and querying
//! static search indexes. Depends on `core/`; `core/` never depends
//! on it.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Folio - static search indexes for documentation books
///
/// Build a `searchindex.js` from a book's Markdown and notebook
/// sources, then look up terms, run multi-word searches and inspect
/// documents against it.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Static inverted search index builder", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an index from a book source directory
    Build(commands::BuildArgs),

    /// List the documents containing a term
    Lookup(commands::LookupArgs),

    /// Find documents containing every query word
    Search(commands::SearchArgs),

    /// Show title and filename of a document
    Doc(commands::DocArgs),

    /// Show statistics about an index file
    Info(commands::InfoArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Prints the script to stdout, or writes it with `-o`:
    ///
    ///   bash:  folio completions bash -o ~/.local/share/bash-completion/completions/folio
    ///   zsh:   folio completions zsh -o ~/.zfunc/_folio
    ///   fish:  folio completions fish -o ~/.config/fish/completions/folio.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &services, cli.format).await,
        Commands::Lookup(args) => commands::lookup::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Doc(args) => commands::doc::execute(args, &services, cli.format).await,
        Commands::Info(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
