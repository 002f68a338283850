//! Local git repository operations
//!
//! Repository discovery and revision resolution go through git2; the diff
//! itself runs system git as a subprocess so the text matches `git diff`
//! output byte for byte.

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository;

use crate::error::{PrsumError, Result};

/// Literal returned when the base revision does not exist (first commit in
/// history). This is the only non-fatal git failure.
pub const NO_PARENT_FALLBACK: &str = "No previous commit to compare.";

/// Wrapper for local git repository operations
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the git repository in the current directory
    pub fn open_current_dir() -> Result<Self> {
        Self::discover(".")
    }

    /// Discover a git repository from the given path
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| PrsumError::NotGitRepository)?;
        Ok(Self { repo })
    }

    /// Check whether a revision resolves to a commit
    pub fn rev_exists(&self, rev: &str) -> bool {
        self.repo
            .revparse_single(rev)
            .and_then(|obj| obj.peel_to_commit())
            .is_ok()
    }

    /// Get the repository root directory
    pub fn root_dir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(|p| p.to_path_buf())
            .ok_or(PrsumError::NotGitRepository)
    }

    /// Textual diff between two revisions using system git
    pub fn diff_between(&self, base: &str, head: &str) -> Result<String> {
        let output = Command::new("git")
            .current_dir(self.root_dir()?)
            .args(["diff", base, head])
            .output()
            .map_err(|e| PrsumError::DiffCommand(format!("failed to execute git diff: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PrsumError::DiffCommand(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Diff retrieval entry point: the diff of `base..head`, or the
    /// fallback literal when `base` does not exist. Every other git
    /// failure stays fatal.
    pub fn head_diff(&self, base: &str, head: &str) -> Result<String> {
        if !self.rev_exists(base) {
            tracing::warn!(base, "base revision not found, using fallback");
            return Ok(NO_PARENT_FALLBACK.to_string());
        }

        self.diff_between(base, head)
    }
}
