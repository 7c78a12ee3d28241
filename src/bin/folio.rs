//! Folio CLI - build and query static search indexes
//!
//! # Examples
//!
//! ```bash
//! # Build searchindex.js from a book's sources
//! folio build ./book -o _build/html/searchindex.js
//!
//! # Documents containing a term
//! folio lookup poisson --index _build/html/searchindex.js
//!
//! # Multi-word search with an exclusion
//! folio search "wave equation -poisson"
//!
//! # Snapshot statistics as JSON
//! folio info --format json
//! ```
//!
//! Logging goes to stderr. `FOLIO_LOG` (or `RUST_LOG`) sets the filter,
//! `FOLIO_LOG_FORMAT=json` switches to structured output.

use clap::Parser;
use folio::cli::{run, Cli};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("folio=warn"));

    let json = std::env::var("FOLIO_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
