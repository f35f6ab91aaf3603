// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository state checks run before a guided commit.

use crate::error::{GczError, Result};
use std::path::Path;

use super::repo::Repository;

/// Message reported when the index holds nothing to commit.
pub const NOTHING_STAGED: &str = "No files added to staging!";

/// Verifies that a commit can be made from a directory.
///
/// Construction fails with [`GczError::NotAGitProject`] outside a repository,
/// so a guard in hand always refers to a valid working tree.
pub struct RepositoryGuard {
    repo: Repository,
}

impl RepositoryGuard {
    /// Open the repository containing `path`.
    pub fn new(path: &Path) -> Result<Self> {
        Ok(Self::from_repository(Repository::open(path)?))
    }

    /// Guard an already opened repository.
    pub fn from_repository(repo: Repository) -> Self {
        tracing::debug!("Repository found at {:?}", repo.workdir());
        Self { repo }
    }

    /// Fail with [`GczError::NothingToCommit`] when there is nothing to commit.
    ///
    /// A dry run only previews the message and may proceed with an empty
    /// index. With `include_tracked`, modified tracked files count too, since
    /// `git commit -a` will pick them up.
    pub fn ensure_committable(&self, dry_run: bool, include_tracked: bool) -> Result<()> {
        if dry_run {
            return Ok(());
        }

        let committable = self.repo.has_staged_changes()?
            || (include_tracked && self.repo.has_unstaged_tracked_changes()?);

        if committable {
            Ok(())
        } else {
            tracing::debug!("Staging area is clean");
            Err(GczError::NothingToCommit(NOTHING_STAGED.to_string()))
        }
    }

    /// Working tree root of the guarded repository.
    pub fn workdir(&self) -> &Path {
        self.repo.workdir()
    }
}

#[cfg(test)]
mod tests {
    use super::super::repo::test_support::{
        commit_index, init_repo, stage_file, stage_into_alternate_index,
    };
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_guard_outside_repository() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            RepositoryGuard::new(dir.path()),
            Err(GczError::NotAGitProject)
        ));
    }

    #[test]
    fn test_nothing_staged() {
        let (dir, _git) = init_repo();
        let guard = RepositoryGuard::new(dir.path()).unwrap();
        let err = guard.ensure_committable(false, false).unwrap_err();
        assert!(matches!(err, GczError::NothingToCommit(ref m) if m == NOTHING_STAGED));
    }

    #[test]
    fn test_dry_run_skips_staging_check() {
        let (dir, _git) = init_repo();
        let guard = RepositoryGuard::new(dir.path()).unwrap();
        assert!(guard.ensure_committable(true, false).is_ok());
    }

    #[test]
    fn test_staged_changes_are_committable() {
        let (dir, git) = init_repo();
        stage_file(&git, "a.txt", "hello");
        let guard = RepositoryGuard::new(dir.path()).unwrap();
        assert!(guard.ensure_committable(false, false).is_ok());
    }

    #[test]
    fn test_tracked_changes_count_with_all() {
        let (dir, git) = init_repo();
        stage_file(&git, "a.txt", "hello");
        commit_index(&git, "initial");
        std::fs::write(dir.path().join("a.txt"), "changed").unwrap();

        let guard = RepositoryGuard::new(dir.path()).unwrap();
        assert!(guard.ensure_committable(false, false).is_err());
        assert!(guard.ensure_committable(false, true).is_ok());
    }

    #[test]
    fn test_index_of_commit_in_progress() {
        // `git commit -a` stages into a temporary index before running hooks
        let (dir, git) = init_repo();
        stage_file(&git, "a.txt", "hello");
        commit_index(&git, "initial");
        std::fs::write(dir.path().join("a.txt"), "changed").unwrap();
        let next_index = dir.path().join(".git").join("next-index");
        stage_into_alternate_index(&git, "a.txt", &next_index);

        let default_guard =
            RepositoryGuard::from_repository(Repository::open_with_index(dir.path(), None).unwrap());
        assert!(default_guard.ensure_committable(false, false).is_err());

        let repo = Repository::open_with_index(dir.path(), Some(next_index.as_path())).unwrap();
        let guard = RepositoryGuard::from_repository(repo);
        assert!(guard.ensure_committable(false, false).is_ok());
    }
}
