// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Repository inspection goes through git2; the commit itself is made by the
//! `git` executable so that hooks, signing, and user configuration apply.

pub mod commands;
mod guard;
mod repo;

pub use commands::{CommandOutput, Committer, GitCommitter};
pub use guard::{RepositoryGuard, NOTHING_STAGED};
pub use repo::{Repository, INDEX_FILE_ENV};

#[cfg(test)]
pub(crate) use repo::test_support;
