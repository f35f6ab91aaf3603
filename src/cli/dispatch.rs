// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::{CommitCommand, CommitOutcome};
use crate::config::{default::example_config, GczConfig};
use crate::error::{ConfigError, GczError, Result};
use crate::hooks::{HookManager, HookStatus, PREPARE_COMMIT_MSG};
use std::path::Path;

use super::args::{Cli, CommitArgs, Commands, HooksAction, HooksArgs, InitArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        GczConfig::load_from(config_path)?
    } else {
        GczConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.effective_command() {
        Commands::Commit(args) => run_commit(&config, args),
        Commands::Hooks(args) => run_hooks(args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the commit command.
fn run_commit(config: &GczConfig, args: CommitArgs) -> Result<()> {
    tracing::debug!("Running commit command with args: {:?}", args);

    let cwd = std::env::current_dir()?;
    let outcome = CommitCommand::new(config, args.into(), &cwd)?.run()?;

    match outcome {
        CommitOutcome::Committed { message } => {
            tracing::debug!("Committed: {}", message.lines().next().unwrap_or_default());
        }
        CommitOutcome::NothingCommitted => tracing::debug!("Nothing was committed"),
        CommitOutcome::DryRun { .. } => tracing::debug!("Dry run, no commit created"),
        CommitOutcome::MessageWritten { path } => {
            tracing::debug!("Message written to {:?}", path)
        }
    }

    Ok(())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { force } => {
            manager.install(force)?;
            println!("✓ Installed {} hook", PREPARE_COMMIT_MSG);
        }
        HooksAction::Uninstall => {
            manager.uninstall()?;
            println!("✓ Uninstalled {} hook", PREPARE_COMMIT_MSG);
        }
        HooksAction::Status => {
            let status = manager.status()?;
            let icon = if status == HookStatus::Installed {
                "✓"
            } else {
                "✗"
            };
            println!("{} {}: {}", icon, PREPARE_COMMIT_MSG, status);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("gcz {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("gcz.toml");
    write_example_config(config_path, args.force)?;
    println!("✓ Created {}", config_path.display());

    Ok(())
}

fn write_example_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(GczError::Config(ConfigError::InvalidValue {
            key: path.display().to_string(),
            message: "configuration file already exists, use --force to overwrite".to_string(),
        }));
    }

    std::fs::write(path, example_config())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_example_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gcz.toml");

        write_example_config(&path, false).unwrap();
        let config = GczConfig::load_from(&path).unwrap();
        assert_eq!(config.commit.convention, crate::config::CONVENTIONAL_COMMITS);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gcz.toml");
        fs::write(&path, "[ui]\ncolor = false\n").unwrap();

        assert!(write_example_config(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[ui]\ncolor = false\n");

        write_example_config(&path, true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "[ui]\ncolor = false\n");
    }
}
