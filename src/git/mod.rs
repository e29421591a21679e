//! git CLI integration.

pub mod staged;
pub mod subprocess;

pub use staged::{StagedDiff, collect_staged_diff, ensure_work_tree};
pub use subprocess::{GitCli, GitExecutor, GitOutput, check_git_installed};
