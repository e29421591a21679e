//! ai-commit - CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ai_commit::{CommitPipeline, Config, GeminiClient, GitCli, Hint};

/// Generate a Conventional Commit message from staged changes using Gemini.
#[derive(Parser, Debug)]
#[command(name = "ai-commit")]
#[command(about = "Generate a Conventional Commit message from staged changes using Gemini")]
#[command(version)]
struct Cli {
    /// Optional hint for the model, e.g. why the change was made
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    hint: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the commit message.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let hint = Hint::from_args(&cli.hint);

    // Step 1: Credentials, before touching the repository
    let config = Config::from_env()?;

    // Step 2: Model client
    let client = GeminiClient::from_config(&config).context("Failed to create Gemini client")?;

    // Step 3: Repository checks, diff, prompt and generation
    let pipeline = CommitPipeline::new(GitCli, client, config.model());
    let message = pipeline
        .run(&hint)
        .await
        .context("Failed to generate commit message")?;

    Ok(message)
}
