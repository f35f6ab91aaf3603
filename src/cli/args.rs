// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::commit::CommitOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gcz - Guided conventional commits for Git
///
/// Asks a few questions, formats the answers into a commit message and
/// commits the staged changes with it.
#[derive(Parser, Debug)]
#[command(name = "gcz")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Guided conventional commits for Git", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to commit if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GCZ_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Guided commit creation (default command)
    Commit(CommitArgs),

    /// Manage the prepare-commit-msg hook
    Hooks(HooksArgs),

    /// Write an example gcz.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the commit command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Show the composed message without committing
    #[arg(long)]
    pub dry_run: bool,

    /// Reuse the message of the last failed commit
    #[arg(long, conflicts_with = "no_retry")]
    pub retry: bool,

    /// Always ask, even when retry_after_failure is set
    #[arg(long)]
    pub no_retry: bool,

    /// Prepend the message to this file instead of committing
    #[arg(long, value_name = "PATH")]
    pub commit_msg_file: Option<PathBuf>,

    /// Add a Signed-off-by trailer
    #[arg(short, long)]
    pub signoff: bool,

    /// Commit modified tracked files without staging them
    #[arg(short, long)]
    pub all: bool,

    /// Extra arguments for git commit, after `--`
    #[arg(last = true, value_name = "GIT_ARGS")]
    pub extra_args: Vec<String>,
}

impl From<CommitArgs> for CommitOptions {
    fn from(args: CommitArgs) -> Self {
        Self {
            dry_run: args.dry_run,
            retry: args.retry,
            no_retry: args.no_retry,
            commit_msg_file: args.commit_msg_file,
            signoff: args.signoff,
            all: args.all,
            extra_args: args.extra_args,
        }
    }
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install the prepare-commit-msg hook
    Install {
        /// Replace an existing hook (it is kept as a backup)
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the hook and restore any backed-up one
    Uninstall,

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Commit if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Commit(CommitArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_commit() {
        let args = Cli::parse_from(["gcz", "commit", "--dry-run", "-s", "-a"]);
        if let Some(Commands::Commit(commit)) = args.command {
            assert!(commit.dry_run);
            assert!(commit.signoff);
            assert!(commit.all);
            assert!(!commit.retry);
        } else {
            panic!("Expected Commit command");
        }
    }

    #[test]
    fn test_parse_commit_msg_file() {
        let args = Cli::parse_from(["gcz", "commit", "--commit-msg-file", ".git/COMMIT_EDITMSG"]);
        if let Some(Commands::Commit(commit)) = args.command {
            assert_eq!(
                commit.commit_msg_file,
                Some(PathBuf::from(".git/COMMIT_EDITMSG"))
            );
        } else {
            panic!("Expected Commit command");
        }
    }

    #[test]
    fn test_parse_passthrough_args() {
        let args = Cli::parse_from(["gcz", "commit", "--", "--no-verify", "--author=A <a@b.c>"]);
        if let Some(Commands::Commit(commit)) = args.command {
            assert_eq!(commit.extra_args, vec!["--no-verify", "--author=A <a@b.c>"]);
        } else {
            panic!("Expected Commit command");
        }
    }

    #[test]
    fn test_retry_conflicts_with_no_retry() {
        let result = Cli::try_parse_from(["gcz", "commit", "--retry", "--no-retry"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_hooks() {
        let args = Cli::parse_from(["gcz", "hooks", "install", "--force"]);
        if let Some(Commands::Hooks(hooks)) = args.command {
            assert!(matches!(hooks.action, HooksAction::Install { force: true }));
        } else {
            panic!("Expected Hooks command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["gcz", "commit", "--debug", "-c", "custom.toml"]);
        assert!(args.debug);
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["gcz"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Commit(_)));
    }

    #[test]
    fn test_commit_options_from_args() {
        let args = CommitArgs {
            retry: true,
            extra_args: vec!["--no-verify".to_string()],
            ..CommitArgs::default()
        };
        let options = CommitOptions::from(args);
        assert!(options.retry);
        assert_eq!(options.extra_args, vec!["--no-verify"]);
        assert!(options.commit_msg_file.is_none());
    }
}
