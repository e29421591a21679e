//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::fs;
#[cfg(unix)]
use std::fs::File;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

/// Spinner frames, duplicated here to assert on raw stderr bytes.
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A directory holding a fake `git` executable that logs every invocation.
///
/// `rev-parse` answers with the configured work-tree status and `diff`
/// prints the configured staged diff.
#[cfg(unix)]
pub struct FakeGit {
    pub dir: TempDir,
    log_path: PathBuf,
}

#[cfg(unix)]
impl FakeGit {
    /// Fake git inside a work tree with the given staged diff.
    pub fn with_diff(diff: &str) -> Self {
        Self::build(true, diff)
    }

    /// Fake git that reports the cwd is not a repository.
    pub fn outside_repository() -> Self {
        Self::build(false, "")
    }

    fn build(inside: bool, diff: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = dir.path().join("git.log");
        let diff_path = dir.path().join("staged.diff");
        fs::write(&diff_path, diff).expect("Failed to write staged diff");

        let rev_parse = if inside {
            "echo true; exit 0".to_string()
        } else {
            "echo 'fatal: not a git repository (or any of the parent directories): .git' >&2; exit 128"
                .to_string()
        };

        let script = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> '{log}'\n\
             case \"$1\" in\n\
             rev-parse) {rev_parse} ;;\n\
             diff) cat '{diff}'; exit 0 ;;\n\
             esac\n\
             echo \"fake git: unexpected args: $*\" >&2\n\
             exit 1\n",
            log = log_path.display(),
            diff = diff_path.display(),
        );

        let script_path = dir.path().join("git");
        let mut file = File::create(&script_path).expect("Failed to create fake git");
        file.write_all(script.as_bytes())
            .expect("Failed to write fake git");
        drop(file);

        let mut perms = fs::metadata(&script_path)
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to set permissions");

        Self { dir, log_path }
    }

    /// `PATH` value with the fake git first.
    pub fn path_env(&self) -> String {
        let original = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.dir.path().display(), original)
    }

    /// Argument lines of every invocation, in order.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log_path)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Command for the built `ai-commit` binary with a clean environment.
///
/// The API key and endpoint override are only set when given.
#[cfg(unix)]
pub fn ai_commit_command(
    git: &FakeGit,
    api_key: Option<&str>,
    base_url: Option<&str>,
) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_ai-commit"));
    cmd.current_dir(git.dir.path())
        .env("PATH", git.path_env())
        .env_remove("GEMINI_API_KEY")
        .env_remove("AI_COMMIT_GEMINI_BASE_URL")
        .env_remove("AI_COMMIT_TIMEOUT")
        .env_remove("RUST_LOG");

    if let Some(key) = api_key {
        cmd.env("GEMINI_API_KEY", key);
    }
    if let Some(url) = base_url {
        cmd.env("AI_COMMIT_GEMINI_BASE_URL", url);
    }

    cmd
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Gemini `generateContent` response body with a single text part.
pub fn gemini_text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "index": 0
        }],
        "modelVersion": "gemini-2.5-flash-preview-05-20"
    })
}

/// Cloneable in-memory writer used as a spinner sink.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Replay carriage returns like a terminal and return what stays visible.
pub fn render_line(raw: &str) -> String {
    let mut line: Vec<char> = Vec::new();
    for segment in raw.split('\r') {
        for (col, ch) in segment.chars().enumerate() {
            if col < line.len() {
                line[col] = ch;
            } else {
                line.push(ch);
            }
        }
    }
    line.into_iter().collect()
}

/// A scratch git repository driven through the real git CLI.
pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    /// Initialise an empty repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repository and panic on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    pub fn stage(&self, name: &str) {
        self.git(&["add", name]);
    }

    pub fn commit(&self, message: &str) {
        self.git(&["commit", "--quiet", "-m", message]);
    }
}

pub fn git_available() -> bool {
    which::which("git").is_ok()
}
