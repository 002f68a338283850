//! CLI command definitions using clap

use clap::Parser;

/// prsum - AI pull-request summary generator for CI
///
/// Reads the diff between two revisions, asks the configured text
/// generation provider for a summary, and emits it as the `pr_content`
/// output variable.
#[derive(Parser, Debug)]
#[command(name = "prsum", version, about, long_about = None)]
pub struct Cli {
    /// Text generation provider (openai or gemini)
    #[arg(long, env = "API_PROVIDER", default_value = "openai")]
    pub provider: String,

    /// Base revision for the diff
    #[arg(long, default_value = "HEAD^")]
    pub base: String,

    /// Head revision for the diff
    #[arg(long, default_value = "HEAD")]
    pub head: String,
}
