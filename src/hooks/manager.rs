// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing the gcz hook.

use crate::error::{GczError, HookError, Result};
use crate::git::Repository;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{prepare_commit_msg_script, HOOK_MARKER, PREPARE_COMMIT_MSG};

/// State of the `prepare-commit-msg` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// The gcz hook is installed.
    Installed,
    /// Some other hook occupies the slot.
    Foreign,
    /// No hook is installed.
    Missing,
}

impl fmt::Display for HookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HookStatus::Installed => "installed",
            HookStatus::Foreign => "not managed by gcz",
            HookStatus::Missing => "not installed",
        };
        write!(f, "{}", text)
    }
}

/// Manager for the gcz git hook.
#[derive(Debug)]
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a hook manager for the repository containing the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::for_repo(&cwd)
    }

    /// Create a hook manager for the repository containing `path`.
    pub fn for_repo(path: &Path) -> Result<Self> {
        let repo = Repository::open(path)?;
        let hooks_dir = repo.git_dir().join("hooks");

        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                GczError::Hook(HookError::InstallFailed {
                    hook: PREPARE_COMMIT_MSG.to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    /// Path of the managed hook.
    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(PREPARE_COMMIT_MSG)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", PREPARE_COMMIT_MSG))
    }

    /// Install the hook. A foreign hook is only replaced with `force`, and
    /// is then kept as a backup.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        if self.status()? == HookStatus::Foreign {
            if !force {
                return Err(HookError::AlreadyExists {
                    hook: PREPARE_COMMIT_MSG.to_string(),
                }
                .into());
            }
            fs::rename(&hook_path, self.backup_path())
                .map_err(|e| install_failed(format!("Failed to backup existing hook: {}", e)))?;
            tracing::debug!("Backed up existing hook to {:?}", self.backup_path());
        }

        fs::write(&hook_path, prepare_commit_msg_script())
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;
        make_executable(&hook_path)?;

        tracing::debug!("Installed hook at {:?}", hook_path);
        Ok(())
    }

    /// Remove the hook and restore a backed-up one.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::Missing => return Ok(()),
            HookStatus::Foreign => {
                return Err(HookError::RemoveFailed {
                    hook: PREPARE_COMMIT_MSG.to_string(),
                    message: "Hook was not installed by gcz".to_string(),
                }
                .into())
            }
            HookStatus::Installed => {}
        }

        fs::remove_file(&hook_path)
            .map_err(|e| remove_failed(format!("Failed to remove hook: {}", e)))?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path)
                .map_err(|e| remove_failed(format!("Failed to restore backup: {}", e)))?;
            tracing::debug!("Restored previous hook from {:?}", backup_path);
        }

        Ok(())
    }

    /// Current state of the hook.
    pub fn status(&self) -> Result<HookStatus> {
        let hook_path = self.hook_path();
        if !hook_path.exists() {
            return Ok(HookStatus::Missing);
        }

        let content = fs::read_to_string(&hook_path)?;
        if content.contains(HOOK_MARKER) {
            Ok(HookStatus::Installed)
        } else {
            Ok(HookStatus::Foreign)
        }
    }
}

fn install_failed(message: String) -> GczError {
    HookError::InstallFailed {
        hook: PREPARE_COMMIT_MSG.to_string(),
        message,
    }
    .into()
}

fn remove_failed(message: String) -> GczError {
    HookError::RemoveFailed {
        hook: PREPARE_COMMIT_MSG.to_string(),
        message,
    }
    .into()
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
