// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The `git commit` invocation.

use crate::error::{GczError, GitError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Phrases git prints on a zero-exit commit that recorded nothing.
///
/// Matching is best effort. Adding phrases here changes which commits clear
/// the backup, so keep the list short.
const NOTHING_COMMITTED_PHRASES: &[&str] = &["nothing added", "no changes added to commit"];

/// Captured result of a commit command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Process exit code; -1 when the process was killed by a signal.
    pub return_code: i32,
    /// Captured standard output.
    pub out: String,
    /// Captured standard error.
    pub err: String,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    pub fn is_success(&self) -> bool {
        self.return_code == 0
    }

    /// Whether the output says that no commit was recorded.
    pub fn nothing_committed(&self) -> bool {
        NOTHING_COMMITTED_PHRASES
            .iter()
            .any(|phrase| self.out.contains(phrase))
    }
}

/// Something that turns a finished message into a commit.
pub trait Committer {
    /// Commit with `message`, passing `args` through to the backend.
    fn commit(&self, message: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Commits by running `git commit -F <file>` in a working tree.
#[derive(Debug, Clone)]
pub struct GitCommitter {
    workdir: PathBuf,
}

impl GitCommitter {
    /// Create a committer for the working tree at `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Working tree the commit runs in.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl Committer for GitCommitter {
    fn commit(&self, message: &str, args: &[String]) -> Result<CommandOutput> {
        // Going through a file keeps multi-line bodies byte for byte
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(message.as_bytes())?;
        file.flush()?;

        tracing::debug!("Running git commit {:?} in {:?}", args, self.workdir);

        let output = Command::new("git")
            .arg("commit")
            .args(args)
            .arg("-F")
            .arg(file.path())
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                GczError::Git(GitError::CommandFailed {
                    command: "git commit".to_string(),
                    message: e.to_string(),
                })
            })?;

        let result = CommandOutput {
            return_code: output.status.code().unwrap_or(-1),
            out: String::from_utf8_lossy(&output.stdout).into_owned(),
            err: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!("git commit exited with {}", result.return_code);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_support::{init_repo, stage_file};

    #[test]
    fn test_nothing_committed_phrases() {
        let output = CommandOutput {
            return_code: 0,
            out: "On branch main\nnothing added to commit but untracked files present".to_string(),
            err: String::new(),
        };
        assert!(output.is_success());
        assert!(output.nothing_committed());

        let output = CommandOutput {
            return_code: 0,
            out: "no changes added to commit (use \"git add\")".to_string(),
            err: String::new(),
        };
        assert!(output.nothing_committed());

        let output = CommandOutput {
            return_code: 0,
            out: "[main 1a2b3c4] fix: bug\n 1 file changed".to_string(),
            err: String::new(),
        };
        assert!(!output.nothing_committed());
    }

    #[test]
    fn test_phrases_only_checked_on_stdout() {
        let output = CommandOutput {
            return_code: 0,
            out: String::new(),
            err: "nothing added".to_string(),
        };
        assert!(!output.nothing_committed());
    }

    #[test]
    fn test_git_commit_multiline_message() {
        let (dir, git) = init_repo();
        stage_file(&git, "a.txt", "hello");

        let committer = GitCommitter::new(dir.path());
        let message = "feat(core): add a\n\nfirst line\nsecond line";
        let output = committer.commit(message, &[]).unwrap();
        assert!(output.is_success(), "git commit failed: {}", output.err);

        let head = git.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message().unwrap().trim_end(), message);
    }

    #[test]
    fn test_git_commit_failure_is_reported() {
        let (dir, _git) = init_repo();
        let committer = GitCommitter::new(dir.path());
        let output = committer.commit("fix: nothing", &[]).unwrap();
        assert!(!output.is_success());
    }
}
