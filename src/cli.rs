//! Command-line interface.

use clap::Parser;

/// Terminal console for the CrediTrust complaint-analysis RAG service.
#[derive(Debug, Parser)]
#[command(name = "creditrust", version, about)]
pub struct Cli {
    /// Backend base URL (overrides CREDITRUST_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log filter directive, e.g. "creditrust=debug" (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}
