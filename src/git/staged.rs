//! Working-tree validation and staged diff collection.

use tracing::debug;

use crate::error::GitError;

use super::subprocess::GitExecutor;

/// Arguments used to confirm the current directory is inside a work tree.
pub const WORK_TREE_ARGS: &[&str] = &["rev-parse", "--is-inside-work-tree"];

/// Arguments used to render staged changes with five lines of context.
pub const STAGED_DIFF_ARGS: &[&str] = &["diff", "--staged", "--patch", "--unified=5"];

/// The staged changes as a unified patch. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDiff(String);

impl StagedDiff {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of changed files, counted from `diff --git` headers.
    pub fn file_count(&self) -> usize {
        self.0
            .lines()
            .filter(|line| line.starts_with("diff --git "))
            .count()
    }
}

/// Fail unless git reports the current directory is inside a work tree.
pub async fn ensure_work_tree<E: GitExecutor + ?Sized>(git: &E) -> Result<(), GitError> {
    let output = git.run(WORK_TREE_ARGS).await?;

    // Inside `.git` itself git exits 0 but prints "false".
    if !output.success || output.stdout.trim() != "true" {
        return Err(GitError::NotInWorkTree {
            stderr: output.stderr,
        });
    }

    Ok(())
}

/// Capture the staged patch.
///
/// Returns [`GitError::NothingStaged`] when the index matches `HEAD`.
pub async fn collect_staged_diff<E: GitExecutor + ?Sized>(git: &E) -> Result<StagedDiff, GitError> {
    let output = git.run(STAGED_DIFF_ARGS).await?;

    if !output.success {
        return Err(GitError::NonZeroExit {
            command: STAGED_DIFF_ARGS.join(" "),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        });
    }

    if output.stdout.trim().is_empty() {
        return Err(GitError::NothingStaged);
    }

    let diff = StagedDiff(output.stdout);
    debug!(
        "Staged diff: {} files, {} bytes",
        diff.file_count(),
        diff.len()
    );

    Ok(diff)
}
