//! AI-generated commit messages from staged changes.

pub mod pipeline;
pub mod prompt;

pub use pipeline::CommitPipeline;
pub use prompt::{DIFF_FENCE, PROMPT_TEMPLATE, build_commit_prompt};

/// Optional free-text context supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hint(Option<String>);

impl Hint {
    pub fn none() -> Self {
        Self(None)
    }

    /// Join all arguments with single spaces.
    ///
    /// No arguments, or only empty ones, count as no hint.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            Self(None)
        } else {
            Self(Some(joined))
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }
}
