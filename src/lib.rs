// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gcz - Guided conventional commits for Git
//!
//! Asks the questions of a commit convention, formats the answers into a
//! message and commits the staged changes with it.
//!
//! # Features
//!
//! - **Guided commits**: Conventional Commits or a config-driven template
//! - **Recovery**: a failed commit keeps its message for `--retry`
//! - **Editor integration**: a `prepare-commit-msg` hook that prompts on the terminal
//!
//! # Example
//!
//! ```no_run
//! use gcz::commit::{CommitCommand, CommitOptions};
//! use gcz::GczConfig;
//!
//! let config = GczConfig::load().unwrap();
//! let cwd = std::env::current_dir().unwrap();
//! let options = CommitOptions {
//!     dry_run: true,
//!     ..CommitOptions::default()
//! };
//!
//! let outcome = CommitCommand::new(&config, options, &cwd).unwrap().run();
//! println!("{:?}", outcome);
//! ```

pub mod cli;
pub mod commit;
pub mod config;
pub mod console;
pub mod conventions;
pub mod error;
pub mod git;
pub mod hooks;
pub mod prompt;

pub use config::GczConfig;
pub use error::{GczError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of gcz.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
