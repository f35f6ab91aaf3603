// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The guided commit flow.

use crate::config::GczConfig;
use crate::console::Console;
use crate::conventions::{self, Convention};
use crate::error::{GczError, Result};
use crate::git::{Committer, GitCommitter, RepositoryGuard};
use crate::prompt::{DialoguerPrompter, PromptError, Prompter};

use console::Term;
use std::fs;
use std::path::{Path, PathBuf};

use super::backup::BackupStore;

/// Options of one guided commit.
#[derive(Debug, Clone, Default)]
pub struct CommitOptions {
    /// Compose and show the message, never commit.
    pub dry_run: bool,
    /// Reuse the backed-up message instead of prompting.
    pub retry: bool,
    /// Prompt even when `retry_after_failure` would reuse a backup.
    pub no_retry: bool,
    /// Prepend the message to this file instead of committing.
    pub commit_msg_file: Option<PathBuf>,
    /// Add a Signed-off-by trailer.
    pub signoff: bool,
    /// Commit modified tracked files without staging them first.
    pub all: bool,
    /// Passed through to `git commit`.
    pub extra_args: Vec<String>,
}

/// How a guided commit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created.
    Committed { message: String },
    /// Git exited cleanly without recording a commit.
    NothingCommitted,
    /// Dry run; the message was only shown.
    DryRun { message: String },
    /// The message was prepended to the hook's message file.
    MessageWritten { path: PathBuf },
}

type TerminalOpener = Box<dyn Fn() -> Result<Console>>;

/// Guided commit for one repository.
pub struct CommitCommand {
    guard: RepositoryGuard,
    options: CommitOptions,
    retry_after_failure: bool,
    convention: Box<dyn Convention>,
    backup: BackupStore,
    prompter: Box<dyn Prompter>,
    committer: Box<dyn Committer>,
    console: Console,
    open_terminal: TerminalOpener,
}

impl CommitCommand {
    /// Set up a commit in the repository containing `workdir`.
    ///
    /// Fails with [`GczError::NotAGitProject`] before anything else happens.
    pub fn new(config: &GczConfig, mut options: CommitOptions, workdir: &Path) -> Result<Self> {
        let guard = RepositoryGuard::new(workdir)?;
        let convention = conventions::from_config(config)?;
        let committer = GitCommitter::new(guard.workdir());

        options.signoff |= config.commit.signoff;
        let mut extra_args = config.commit.extra_args.clone();
        extra_args.append(&mut options.extra_args);
        options.extra_args = extra_args;

        Ok(Self {
            guard,
            options,
            retry_after_failure: config.commit.retry_after_failure,
            convention,
            backup: BackupStore::for_current_user(),
            prompter: Box::new(DialoguerPrompter::new()),
            committer: Box::new(committer),
            console: Console::stdio(),
            open_terminal: Box::new(Console::controlling_terminal),
        })
    }

    /// Use a different backup location.
    pub fn with_backup(mut self, backup: BackupStore) -> Self {
        self.backup = backup;
        self
    }

    /// Use a different prompt engine.
    pub fn with_prompter(mut self, prompter: impl Prompter + 'static) -> Self {
        self.prompter = Box::new(prompter);
        self
    }

    /// Use a different commit backend.
    pub fn with_committer(mut self, committer: impl Committer + 'static) -> Self {
        self.committer = Box::new(committer);
        self
    }

    /// Use different output streams.
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    /// Change how the terminal is opened in editor-integration mode.
    pub fn with_terminal(mut self, open: impl Fn() -> Result<Console> + 'static) -> Self {
        self.open_terminal = Box::new(open);
        self
    }

    /// Arguments passed to the commit backend.
    pub fn commit_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.options.signoff {
            args.push("-s".to_string());
        }
        if self.options.all {
            args.push("-a".to_string());
        }
        args.extend(self.options.extra_args.iter().cloned());
        args
    }

    fn should_retry(&self) -> bool {
        self.options.retry
            || (self.retry_after_failure && !self.options.no_retry && self.backup.exists())
    }

    /// Run the flow to completion.
    pub fn run(mut self) -> Result<CommitOutcome> {
        let dry_run = self.options.dry_run;

        // Held until the message is known; dropping closes the device on
        // every exit path
        let mut hook_console = match self.options.commit_msg_file {
            Some(_) => Some((self.open_terminal)()?),
            None => None,
        };

        self.guard.ensure_committable(dry_run, self.options.all)?;

        let retry = self.should_retry();
        let message = {
            let console = hook_console.as_mut().unwrap_or(&mut self.console);
            let message = if retry {
                tracing::debug!("Reusing backed-up message from {:?}", self.backup.path());
                self.backup.read()?
            } else {
                compose(
                    self.convention.as_ref(),
                    self.prompter.as_mut(),
                    console.term(),
                )?
            };
            console.info(&format!("\n{}\n", message));
            message
        };

        if dry_run {
            return Ok(CommitOutcome::DryRun { message });
        }

        if let Some(path) = self.options.commit_msg_file.take() {
            drop(hook_console);

            let original = fs::read_to_string(&path)?;
            fs::write(&path, prepend_message(&message, &original))?;
            tracing::debug!("Wrote commit message into {:?}", path);

            self.console.success("Commit message is successful!");
            return Ok(CommitOutcome::MessageWritten { path });
        }

        let output = self.committer.commit(&message, &self.commit_args())?;

        if !output.is_success() {
            self.console.error(&output.err);
            self.backup.write(&message)?;
            return Err(GczError::CommitFailed);
        }

        if output.nothing_committed() {
            tracing::warn!("git exited cleanly but recorded no commit");
            self.console.error(&output.out);
            return Ok(CommitOutcome::NothingCommitted);
        }

        self.backup.clear()?;
        self.console.write(&output.err);
        self.console.write(&output.out);
        self.console.success("Commit successful!");

        Ok(CommitOutcome::Committed { message })
    }
}

/// Ask the convention's questions and format the answers.
fn compose(convention: &dyn Convention, prompter: &mut dyn Prompter, term: &Term) -> Result<String> {
    let questions = convention.questions();
    let answers = match prompter.prompt(&questions, convention.style(), term) {
        Ok(Some(answers)) if !answers.is_empty() => answers,
        Ok(_) => return Err(GczError::NoAnswers),
        Err(PromptError::Convention(e)) => return Err(e.into()),
        Err(PromptError::Ui(e)) => return Err(e.into()),
    };

    Ok(convention.message(&answers)?)
}

/// `{message}{original}`, verbatim.
pub fn prepend_message(message: &str, original: &str) -> String {
    format!("{}{}", message, original)
}
