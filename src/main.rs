//! prsum - AI pull-request summary generator for CI
//!
//! Fetches the diff between two revisions, sends it to a text generation
//! provider (OpenAI or Gemini), and emits the formatted summary as a CI
//! output variable.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prsum::cli::{summary, Cli};

#[tokio::main]
async fn main() {
    // Initialize logging; stdout is reserved for the output variable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = summary::handle_summary(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
