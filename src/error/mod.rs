// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for gcz.
//!
//! Every failure of a guided commit is terminal to the invocation. The
//! variants map one-to-one onto the signals a caller can observe, and each
//! carries a stable process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gcz operations.
#[derive(Error, Debug)]
pub enum GczError {
    #[error("not a git project")]
    NotAGitProject,

    #[error("{0}")]
    NothingToCommit(String),

    #[error("no commit backup found")]
    NoCommitBackup,

    #[error("no answers given")]
    NoAnswers,

    // Convention validation failure, reduced to its message text
    #[error("{0}")]
    Custom(String),

    #[error("git commit failed; the message was saved, rerun with --retry to reuse it")]
    CommitFailed,

    #[error("no controlling terminal available: {message}")]
    NoTerminal { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UI error: {0}")]
    Ui(String),
}

impl From<dialoguer::Error> for GczError {
    fn from(err: dialoguer::Error) -> Self {
        GczError::Ui(err.to_string())
    }
}

impl GczError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GczError::NotAGitProject => 2,
            GczError::NoAnswers => 8,
            GczError::CommitFailed => 9,
            GczError::NoCommitBackup => 10,
            GczError::NothingToCommit(_) => 11,
            GczError::Custom(_) => 12,
            _ => 1,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to read repository status: {message}")]
    StatusFailed { message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for gcz operations.
pub type Result<T> = std::result::Result<T, GczError>;
