//! Error types for ai-commit modules using thiserror.

use thiserror::Error;

/// Errors from reading the environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "GEMINI_API_KEY environment variable is not set.\n\
         hint: set it with `export GEMINI_API_KEY=your_key`"
    )]
    MissingApiKey,
}

/// Errors from git invocations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Not inside a git repository{}", format_stderr(.stderr))]
    NotInWorkTree { stderr: String },

    #[error("`git {command}` exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Nothing staged to commit. Stage changes with `git add` first")]
    NothingStaged,
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Errors from the Gemini generation API.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to Gemini failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Gemini request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Gemini API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Gemini returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("Gemini blocked the prompt: {0}")]
    Blocked(String),

    #[error("Gemini returned no candidates")]
    EmptyResponse,

    #[error("Gemini returned no text (finish reason: {0})")]
    NoText(String),
}

/// Top-level error for one ai-commit invocation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Gemini(#[from] GeminiError),
}
