// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hooks management.
//!
//! The `prepare-commit-msg` hook runs the guided flow in editor-integration
//! mode whenever `git commit` is used without a message.

mod manager;
mod templates;

pub use manager::{HookManager, HookStatus};
pub use templates::{prepare_commit_msg_script, HOOK_MARKER, PREPARE_COMMIT_MSG};
