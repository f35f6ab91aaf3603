// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Hook gcz installs.
pub const PREPARE_COMMIT_MSG: &str = "prepare-commit-msg";

/// Line identifying scripts written by gcz.
pub const HOOK_MARKER: &str = "Generated by gcz";

/// Script for the `prepare-commit-msg` hook.
///
/// Git passes the message file as `$1` and the message source as `$2`. The
/// guided flow only runs for a plain `git commit`; messages coming from
/// `-m`, `-F`, a template, a merge, a squash or an amend are left alone.
pub fn prepare_commit_msg_script() -> String {
    format!(
        r#"#!/bin/sh
# gcz prepare-commit-msg hook
# {marker} v{version}

if [ -n "$2" ]; then
    exit 0
fi

exec gcz commit --commit-msg-file "$1"
"#,
        marker = HOOK_MARKER,
        version = crate::version::VERSION,
    )
}
