//! Linear orchestration: validate the repository, collect the diff, build the
//! prompt, call the model with a spinner running, return the message.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Error;
use crate::gemini::GenerationClient;
use crate::git::{GitExecutor, collect_staged_diff, ensure_work_tree};
use crate::spinner::Spinner;

use super::Hint;
use super::prompt::build_commit_prompt;

/// One commit-message generation run over a git executor and a model client.
pub struct CommitPipeline<G, C> {
    git: G,
    client: C,
    model: String,
}

impl<G: GitExecutor, C: GenerationClient> CommitPipeline<G, C> {
    pub fn new(git: G, client: C, model: impl Into<String>) -> Self {
        Self {
            git,
            client,
            model: model.into(),
        }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generate a commit message, showing progress on stderr.
    pub async fn run(&self, hint: &Hint) -> Result<String, Error> {
        self.run_with_progress(hint, io::stderr()).await
    }

    /// Generate a commit message, drawing the spinner on `progress`.
    ///
    /// The spinner is stopped and its line erased before this returns,
    /// whether or not the model call succeeded.
    pub async fn run_with_progress<W>(&self, hint: &Hint, progress: W) -> Result<String, Error>
    where
        W: Write + Send + 'static,
    {
        ensure_work_tree(&self.git).await?;
        let diff = collect_staged_diff(&self.git).await?;

        let prompt = build_commit_prompt(hint, diff.as_str());
        debug!(
            "Commit prompt length: {} chars, hint: {}",
            prompt.len(),
            hint.is_some()
        );

        let spinner = Spinner::start(format!("🤖 {}", self.model), progress);
        let result = self.client.generate(&prompt).await;
        spinner.stop().await;

        Ok(result?)
    }
}
