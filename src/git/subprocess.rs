//! git CLI spawning.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    /// Exit code, or -1 when the process was killed by a signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Trait for running git commands.
///
/// This abstraction allows substituting the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Run git with the given arguments in the current directory.
    ///
    /// Only spawn failures are errors; a non-zero exit is reported through
    /// [`GitOutput`] so callers can decide what it means.
    async fn run(&self, args: &'static [&'static str]) -> Result<GitOutput, GitError>;
}

/// Executor that calls the real git binary found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

#[async_trait]
impl GitExecutor for GitCli {
    async fn run(&self, args: &'static [&'static str]) -> Result<GitOutput, GitError> {
        check_git_installed()?;

        debug!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(GitError::SpawnFailed)?;

        Ok(GitOutput {
            success: output.status.success(),
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Check that a git executable is reachable on `PATH`.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map_err(|_| GitError::NotInstalled)?;
    Ok(())
}
