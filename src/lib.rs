//! ai-commit - A CLI tool that generates Conventional Commit messages from staged changes.
//!
//! # Overview
//!
//! ai-commit reads the staged diff with git, wraps it in a fixed instruction
//! prompt, asks Gemini for a single-line `<emoji> <type>(<scope>): <description>`
//! message and prints that message on stdout. Progress and errors go to stderr,
//! so the output can be piped straight into `git commit -F -`.

pub mod commit;
pub mod config;
pub mod error;
pub mod gemini;
pub mod git;
pub mod spinner;

// Re-export commonly used types
pub use commit::{CommitPipeline, Hint};
pub use config::Config;
pub use error::{ConfigError, Error, GeminiError, GitError};
pub use gemini::{GeminiClient, GenerationClient};
pub use git::{GitCli, GitExecutor, GitOutput, StagedDiff};
