// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GczError, GitError, Result};
use git2::{DiffOptions, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Environment variable git uses to name the index of the commit in progress.
pub const INDEX_FILE_ENV: &str = "GIT_INDEX_FILE";

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open the repository containing `path`, using the index named by
    /// `GIT_INDEX_FILE` when it is set.
    pub fn open(path: &Path) -> Result<Self> {
        let index_file = std::env::var_os(INDEX_FILE_ENV).map(PathBuf::from);
        Self::open_with_index(path, index_file.as_deref())
    }

    /// Open the repository containing `path` with an alternate index.
    ///
    /// Git points hooks at a temporary index for `commit -a` and
    /// `commit <paths>`; staged-change checks must read that one. A relative
    /// `index_file` is resolved against `path`.
    pub fn open_with_index(path: &Path, index_file: Option<&Path>) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GczError::NotAGitProject
            } else {
                GczError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                GczError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        if let Some(index_file) = index_file {
            let index_path = path.join(index_file);
            let mut index = git2::Index::open(&index_path).map_err(|e| {
                GczError::Git(GitError::OpenFailed {
                    message: format!("{}: {}", index_path.display(), e.message()),
                })
            })?;
            repo.set_index(&mut index).map_err(GitError::from)?;
            tracing::debug!("Using index {:?}", index_path);
        }

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Check if the index differs from HEAD.
    pub fn has_staged_changes(&self) -> Result<bool> {
        // Unborn HEAD compares against the empty tree
        let head_tree = self
            .inner
            .head()
            .ok()
            .and_then(|head| head.peel_to_tree().ok());

        let diff = self
            .inner
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .map_err(status_failed)?;

        Ok(diff.deltas().len() > 0)
    }

    /// Check if tracked files have modifications that are not staged.
    pub fn has_unstaged_tracked_changes(&self) -> Result<bool> {
        let mut opts = DiffOptions::new();
        opts.include_untracked(false);

        let diff = self
            .inner
            .diff_index_to_workdir(None, Some(&mut opts))
            .map_err(status_failed)?;

        Ok(diff.deltas().len() > 0)
    }
}

fn status_failed(e: git2::Error) -> GczError {
    GczError::Git(GitError::StatusFailed {
        message: e.message().to_string(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use git2::Repository as Git2Repo;
    use std::path::Path;
    use tempfile::TempDir;

    /// Create an empty repository with a committer identity configured.
    pub fn init_repo() -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        (dir, repo)
    }

    /// Write a file into the working tree and stage it.
    pub fn stage_file(repo: &Git2Repo, name: &str, content: &str) {
        let workdir = repo.workdir().unwrap();
        std::fs::write(workdir.join(name), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    /// Stage `name` into a separate index file at `index_path`, leaving the
    /// repository's own index matching HEAD.
    pub fn stage_into_alternate_index(repo: &Git2Repo, name: &str, index_path: &Path) {
        let git_index = repo.path().join("index");
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        std::fs::copy(&git_index, index_path).unwrap();

        let head_tree = repo.head().unwrap().peel_to_tree().unwrap();
        index.read_tree(&head_tree).unwrap();
        index.write().unwrap();
    }

    /// Commit the current index on top of HEAD.
    pub fn commit_index(repo: &Git2Repo, message: &str) {
        let sig = repo.signature().unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{commit_index, init_repo, stage_file, stage_into_alternate_index};
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_repo() {
        let (dir, _repo) = init_repo();
        let repo = Repository::open(dir.path()).unwrap();
        assert!(repo.git_dir().ends_with(".git"));
        assert!(repo.workdir().exists());
    }

    #[test]
    fn test_open_from_subdirectory() {
        let (dir, _repo) = init_repo();
        let nested = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();
        assert!(Repository::open(&nested).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(result, Err(GczError::NotAGitProject)));
    }

    #[test]
    fn test_staged_changes_on_unborn_branch() {
        let (dir, git) = init_repo();
        let repo = Repository::open(dir.path()).unwrap();
        assert!(!repo.has_staged_changes().unwrap());

        stage_file(&git, "a.txt", "hello");
        assert!(repo.has_staged_changes().unwrap());
    }

    #[test]
    fn test_staged_changes_cleared_by_commit() {
        let (dir, git) = init_repo();
        stage_file(&git, "a.txt", "hello");
        commit_index(&git, "initial");

        let repo = Repository::open(dir.path()).unwrap();
        assert!(!repo.has_staged_changes().unwrap());
        assert!(!repo.has_unstaged_tracked_changes().unwrap());

        std::fs::write(dir.path().join("a.txt"), "changed").unwrap();
        assert!(!repo.has_staged_changes().unwrap());
        assert!(repo.has_unstaged_tracked_changes().unwrap());
    }

    #[test]
    fn test_alternate_index_is_used() {
        let (dir, git) = init_repo();
        stage_file(&git, "a.txt", "hello");
        commit_index(&git, "initial");
        std::fs::write(dir.path().join("a.txt"), "changed").unwrap();
        let next_index = dir.path().join(".git").join("next-index");
        stage_into_alternate_index(&git, "a.txt", &next_index);

        let repo = Repository::open_with_index(dir.path(), None).unwrap();
        assert!(!repo.has_staged_changes().unwrap());

        let repo =
            Repository::open_with_index(dir.path(), Some(Path::new(".git/next-index"))).unwrap();
        assert!(repo.has_staged_changes().unwrap());
        assert!(!repo.has_unstaged_tracked_changes().unwrap());
    }

    #[test]
    fn test_untracked_files_are_not_changes() {
        let (dir, git) = init_repo();
        stage_file(&git, "a.txt", "hello");
        commit_index(&git, "initial");
        std::fs::write(dir.path().join("new.txt"), "untracked").unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        assert!(!repo.has_staged_changes().unwrap());
        assert!(!repo.has_unstaged_tracked_changes().unwrap());
    }
}
