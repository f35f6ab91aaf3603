// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Controlling terminal access for hook invocations.
//!
//! Git runs `prepare-commit-msg` with standard streams that are not a
//! terminal. Prompting then needs the controlling terminal device itself.

use crate::error::{GczError, Result};
use std::path::Path;

use super::Console;

/// Controlling terminal device.
pub const TTY_PATH: &str = "/dev/tty";

#[cfg(unix)]
pub use unix::TtyInput;

#[cfg(unix)]
mod unix {
    use std::fs::File;
    use std::io::{self, Read};
    use std::os::unix::io::{AsRawFd, RawFd};

    /// Read half of the controlling terminal.
    ///
    /// Only reading and descriptor access are exposed. There is no encoding
    /// to negotiate: the prompt engine decodes every line it reads into a
    /// `String`, so input is always taken as UTF-8 whatever the device's
    /// locale says.
    #[derive(Debug)]
    pub struct TtyInput {
        inner: File,
    }

    impl TtyInput {
        /// Wrap an open terminal handle.
        pub fn new(inner: File) -> Self {
            Self { inner }
        }
    }

    impl Read for TtyInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl AsRawFd for TtyInput {
        fn as_raw_fd(&self) -> RawFd {
            self.inner.as_raw_fd()
        }
    }
}

/// Open `path` as the terminal for a whole prompt session.
#[cfg(unix)]
pub(super) fn open(path: &Path) -> Result<Console> {
    use console::Term;
    use std::fs::OpenOptions;
    use std::os::unix::fs::OpenOptionsExt;

    let no_terminal = |e: std::io::Error| GczError::NoTerminal {
        message: format!("{}: {}", path.display(), e),
    };

    // O_NOCTTY: a session without a controlling terminal must not acquire one
    let device = OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_NOCTTY)
        .open(path)
        .map_err(no_terminal)?;

    let input = TtyInput::new(device.try_clone().map_err(no_terminal)?);
    let term = Term::read_write_pair(input, device.try_clone().map_err(no_terminal)?);
    let out = device.try_clone().map_err(no_terminal)?;

    tracing::debug!("Prompting through {}", path.display());
    Ok(Console::new(term, Box::new(out), Box::new(device)))
}

#[cfg(not(unix))]
pub(super) fn open(path: &Path) -> Result<Console> {
    Err(GczError::NoTerminal {
        message: format!(
            "{} is not available on this platform; run gcz directly instead of from a hook",
            path.display()
        ),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_tty_input_reads_utf8() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all("héllo wörld".as_bytes()).unwrap();
        std::io::Seek::rewind(&mut file).unwrap();

        let mut input = TtyInput::new(file);

        let mut text = String::new();
        input.read_to_string(&mut text).unwrap();
        assert_eq!(text, "héllo wörld");
    }

    #[test]
    fn test_open_device_for_read_and_write() {
        let dir = TempDir::new().unwrap();
        let device = dir.path().join("tty");
        std::fs::write(&device, "").unwrap();

        let mut console = open(&device).unwrap();
        console.write("hello");
        drop(console);

        assert_eq!(std::fs::read_to_string(&device).unwrap(), "hello\n");
    }

    #[test]
    fn test_missing_device_is_no_terminal() {
        let dir = TempDir::new().unwrap();
        let result = open(&dir.path().join("no-such-tty"));
        assert!(matches!(result, Err(GczError::NoTerminal { .. })));
    }
}
