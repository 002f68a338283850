//! CI output formatting and emission
//!
//! The formatted summary is exposed to later pipeline steps as the output
//! variable `pr_content`.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use crate::core::config::Provider;
use crate::error::Result;

/// Name of the output variable consumed by later pipeline steps
pub const OUTPUT_NAME: &str = "pr_content";

/// Static trailer appended below the generated summary
const TRAILER: &str = "## Further details to be added as required.";

/// Build the formatted PR content block
pub fn format_summary(provider: Provider, summary: &str) -> String {
    format!(
        "## {} Summary\n{}\n\n{}",
        provider.display_name(),
        summary,
        TRAILER
    )
}

/// Emit a CI output variable.
///
/// With `GITHUB_OUTPUT` set (GitHub Actions), a heredoc block is appended
/// to the output file. Otherwise a single `name=<json>` line goes to
/// stdout; JSON encoding keeps multi-line values on one line.
pub fn emit_output(name: &str, value: &str) -> Result<()> {
    match env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            let delimiter = heredoc_delimiter(value);
            writeln!(file, "{}<<{}", name, delimiter)?;
            writeln!(file, "{}", value)?;
            writeln!(file, "{}", delimiter)?;
        }
        _ => {
            println!("{}={}", name, serde_json::to_string(value)?);
        }
    }

    Ok(())
}

/// Pick a delimiter that no line of the value can terminate early
fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = String::from("PRSUM_EOF");
    while value.lines().any(|line| line == delimiter) {
        delimiter.push('_');
    }
    delimiter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary_openai() {
        let formatted = format_summary(Provider::OpenAi, "Adds a retry loop to the uploader.");
        assert_eq!(
            formatted,
            "## OpenAI Summary\nAdds a retry loop to the uploader.\n\n## Further details to be added as required."
        );
    }

    #[test]
    fn test_format_summary_is_idempotent() {
        let first = format_summary(Provider::Gemini, "Refactors the parser.");
        let second = format_summary(Provider::Gemini, "Refactors the parser.");
        assert_eq!(first, second);
    }

    #[test]
    fn test_heredoc_delimiter_avoids_collisions() {
        assert_eq!(heredoc_delimiter("plain text"), "PRSUM_EOF");
        assert_eq!(heredoc_delimiter("a\nPRSUM_EOF\nb"), "PRSUM_EOF_");
        assert_eq!(heredoc_delimiter("PRSUM_EOF\nPRSUM_EOF_"), "PRSUM_EOF__");
    }

    #[test]
    fn test_emit_output_to_github_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("output");
        std::env::set_var("GITHUB_OUTPUT", &path);

        emit_output("pr_content", "line one\nline two").unwrap();
        std::env::remove_var("GITHUB_OUTPUT");

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "pr_content<<PRSUM_EOF\nline one\nline two\nPRSUM_EOF\n"
        );
    }
}
