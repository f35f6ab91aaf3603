// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Single-slot recovery file for a composed but uncommitted message.

use crate::error::{GczError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persists the last message whose commit failed.
#[derive(Debug, Clone)]
pub struct BackupStore {
    path: PathBuf,
}

impl BackupStore {
    /// Store at the per-user location in the system temp directory.
    pub fn for_current_user() -> Self {
        Self::at(default_path())
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backup file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a backup is currently stored.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Replace the stored message.
    pub fn write(&self, message: &str) -> Result<()> {
        fs::write(&self.path, message)?;
        tracing::debug!("Commit message backed up to {:?}", self.path);
        Ok(())
    }

    /// Read the stored message with surrounding whitespace trimmed.
    pub fn read(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(GczError::NoCommitBackup),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the stored message. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed commit backup {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// `{temp dir}/cz.commit{user}.backup`, with an empty user when unknown.
pub fn default_path() -> PathBuf {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_default();
    std::env::temp_dir().join(format!("cz.commit{}.backup", user))
}
