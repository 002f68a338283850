//! Prompt construction for summary generation
//!
//! Diffs are unbounded, so oversized ones are reduced before prompting:
//! complete per-file sections are kept while they fit and the remainder is
//! summarized as one line per file.

/// Build the summary prompt embedding the diff
pub fn summary_prompt(diff: &str) -> String {
    format!("Summarize the following code changes in a detailed and formatted manner:\n{diff}")
}

/// A single file's section of a unified diff
struct FileSection {
    /// File path from the `diff --git` header
    path: String,
    /// Full patch text of this file's section
    patch: String,
    /// Added lines (excluding the `+++` header)
    added: usize,
    /// Removed lines (excluding the `---` header)
    removed: usize,
    /// Whether this section describes a binary file
    binary: bool,
}

/// Split a unified diff into per-file sections
fn split_sections(diff: &str) -> Vec<FileSection> {
    let mut sections: Vec<FileSection> = Vec::new();

    for line in diff.lines() {
        if let Some(header) = line.strip_prefix("diff --git ") {
            // "a/path b/path" -> "path"
            let path = header
                .split(" b/")
                .last()
                .unwrap_or(header)
                .to_string();
            sections.push(FileSection {
                path,
                patch: String::new(),
                added: 0,
                removed: 0,
                binary: false,
            });
        }

        let Some(current) = sections.last_mut() else {
            continue;
        };

        if line.starts_with("Binary files") || line.contains("GIT binary patch") {
            current.binary = true;
        } else if line.starts_with('+') && !line.starts_with("+++") {
            current.added += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            current.removed += 1;
        }

        current.patch.push_str(line);
        current.patch.push('\n');
    }

    sections
}

/// Reduce an oversized diff to `max_chars`, keeping complete per-file
/// sections while they fit. Diffs within budget pass through unchanged.
pub fn fit_diff(diff: &str, max_chars: usize) -> String {
    if diff.len() <= max_chars {
        return diff.to_string();
    }

    let sections = split_sections(diff);
    if sections.is_empty() {
        // Fallback text or something that is not a unified diff
        return cut_at_line(diff, max_chars);
    }

    const OMITTED_HEADER: &str = "\n--- Files omitted for length ---\n";
    const CHARS_PER_OMITTED_LINE: usize = 64;

    // Reserve room for the omission summary up front
    let budget = max_chars
        .saturating_sub(OMITTED_HEADER.len() + CHARS_PER_OMITTED_LINE * sections.len());

    let mut kept = String::new();
    let mut omitted: Vec<&FileSection> = Vec::new();

    for section in &sections {
        if kept.len() + section.patch.len() <= budget {
            kept.push_str(&section.patch);
        } else {
            omitted.push(section);
        }
    }

    if !omitted.is_empty() {
        kept.push_str(OMITTED_HEADER);
        for section in omitted {
            if section.binary {
                kept.push_str(&format!("{} (binary file)\n", section.path));
            } else {
                kept.push_str(&format!(
                    "{} (+{}/-{} lines)\n",
                    section.path, section.added, section.removed
                ));
            }
        }
    }

    kept
}

/// Line-boundary truncation for text without diff structure
fn cut_at_line(text: &str, max_chars: usize) -> String {
    const MARKER: &str = "\n... (truncated)";

    let mut kept = String::new();
    for line in text.lines() {
        if kept.len() + line.len() + 1 + MARKER.len() > max_chars {
            break;
        }
        if !kept.is_empty() {
            kept.push('\n');
        }
        kept.push_str(line);
    }

    kept.push_str(MARKER);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_diff() -> String {
        let mut diff = String::new();
        diff.push_str("diff --git a/small.rs b/small.rs\n");
        diff.push_str("--- a/small.rs\n+++ b/small.rs\n");
        diff.push_str("@@ -1,1 +1,2 @@\n line\n+added\n");
        diff.push_str("diff --git a/big.rs b/big.rs\n");
        diff.push_str("--- a/big.rs\n+++ b/big.rs\n");
        diff.push_str("@@ -1,3 +1,40 @@\n");
        for i in 0..40 {
            diff.push_str(&format!("+new line number {}\n", i));
        }
        diff.push_str("-old line\n-old line\n-old line\n");
        diff
    }

    #[test]
    fn test_prompt_embeds_diff() {
        let prompt = summary_prompt("diff --git a/x b/x");
        assert!(prompt.starts_with("Summarize the following code changes"));
        assert!(prompt.ends_with("diff --git a/x b/x"));
    }

    #[test]
    fn test_fit_diff_passthrough_within_budget() {
        let diff = sample_diff();
        assert_eq!(fit_diff(&diff, diff.len()), diff);
    }

    #[test]
    fn test_fit_diff_keeps_complete_files_and_summarizes_rest() {
        let diff = sample_diff();
        let fitted = fit_diff(&diff, 400);

        // First file fits whole, second is replaced by its summary line
        assert!(fitted.contains("+added"));
        assert!(!fitted.contains("new line number 17"));
        assert!(fitted.contains("--- Files omitted for length ---"));
        assert!(fitted.contains("big.rs (+40/-3 lines)"));
        assert!(fitted.len() <= 400);
    }

    #[test]
    fn test_fit_diff_marks_binary_files() {
        let mut diff = sample_diff();
        diff.push_str("diff --git a/logo.png b/logo.png\n");
        diff.push_str("Binary files a/logo.png and b/logo.png differ\n");

        let fitted = fit_diff(&diff, 400);
        assert!(fitted.contains("logo.png (binary file)"));
    }

    #[test]
    fn test_fit_diff_non_diff_text() {
        let text = "x\n".repeat(200);
        let fitted = fit_diff(&text, 50);
        assert!(fitted.len() <= 50);
        assert!(fitted.ends_with("... (truncated)"));
    }
}
