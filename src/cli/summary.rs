//! Summary pipeline handler
//!
//! Runs the steps in order: diff retrieval, configuration and provider
//! selection, one generation request, output emission.

use tracing::info;

use crate::ai::SummaryClient;
use crate::cli::commands::Cli;
use crate::core::config::{Config, Provider};
use crate::core::credentials;
use crate::core::git::GitRepository;
use crate::core::output;
use crate::error::Result;

/// Handle the summary pipeline
pub async fn handle_summary(args: Cli) -> Result<()> {
    let git = GitRepository::open_current_dir()?;
    let diff = git.head_diff(&args.base, &args.head)?;
    info!(bytes = diff.len(), "retrieved diff");

    let config = Config::load()?;
    let provider = Provider::parse(&args.provider)?;
    let api_key = credentials::require_api_key(provider)?;
    info!(
        provider = provider.display_name(),
        key = %credentials::mask_key(&api_key),
        "provider selected"
    );

    let client = SummaryClient::new(provider, &config, api_key)?;
    info!(model = client.model_name(), "requesting summary");
    let summary = client.generate_summary(&diff, config.max_diff_chars).await?;

    let formatted = output::format_summary(provider, &summary);
    output::emit_output(output::OUTPUT_NAME, &formatted)
}
