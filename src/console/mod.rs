// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal handles for one invocation.
//!
//! A [`Console`] bundles the terminal the prompt engine draws on with the
//! writers for informational and error output. Passing it explicitly means
//! the process-wide standard streams are never reassigned: a hook invocation
//! simply gets a console backed by the controlling terminal, and dropping it
//! closes that device on every exit path.

mod tty;

use crate::error::Result;
use console::{style, Term};
use std::io::{self, Write};
use std::path::Path;

pub use tty::TTY_PATH;
#[cfg(unix)]
pub use tty::TtyInput;

/// Prompt surface plus output writers.
pub struct Console {
    term: Term,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Console {
    /// Build a console from explicit handles.
    pub fn new(term: Term, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self { term, out, err }
    }

    /// The process's own streams; prompts render on stderr.
    pub fn stdio() -> Self {
        Self::new(Term::stderr(), Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// The controlling terminal device.
    ///
    /// Fails with [`crate::GczError::NoTerminal`] when there is none.
    pub fn controlling_terminal() -> Result<Self> {
        Self::open_terminal(Path::new(TTY_PATH))
    }

    /// A terminal device at an explicit path.
    pub fn open_terminal(path: &Path) -> Result<Self> {
        tty::open(path)
    }

    /// Terminal the prompt engine reads from and draws on.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Informational output.
    pub fn info(&mut self, message: &str) {
        self.line_out(&style(message).blue().to_string());
    }

    /// Success output.
    pub fn success(&mut self, message: &str) {
        self.line_out(&style(message).green().to_string());
    }

    /// Error output, written to the error stream.
    pub fn error(&mut self, message: &str) {
        let styled = style(message).red().for_stderr().to_string();
        let _ = writeln!(self.err, "{}", styled);
    }

    /// Unstyled output; empty text writes nothing.
    pub fn write(&mut self, message: &str) {
        if !message.is_empty() {
            self.line_out(message);
        }
    }

    fn line_out(&mut self, text: &str) {
        // Output failures must not mask the commit result
        let _ = writeln!(self.out, "{}", text);
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").field("term", &self.term).finish()
    }
}
