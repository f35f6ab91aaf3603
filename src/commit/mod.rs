// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Guided commit flow and message recovery.

mod backup;
mod command;

pub use backup::{default_path, BackupStore};
pub use command::{prepend_message, CommitCommand, CommitOptions, CommitOutcome};
