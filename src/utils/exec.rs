//! External command execution utilities.
//!
//! Provides a Builder-based API for running a command and capturing its
//! output, used by the shell step runner.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // Whole command line handed to a shell
//! let output = Cmd::from_slice(&["sh", "-c"]).arg("git add -A").output()?;
//! ```

use crate::debug;
use std::{
    ffi::{OsStr, OsString},
    io,
    process::{Command, Output, Stdio},
};

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
#[derive(Debug, Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
}

impl Cmd {
    /// Create from a command array (e.g., `["sh", "-c"]` or `["cmd", "/C"]`).
    pub fn from_slice<S: AsRef<OsStr>>(cmd: &[S]) -> Self {
        let mut iter = cmd.iter();
        let program = iter
            .next()
            .map(|s| s.as_ref().to_owned())
            .unwrap_or_default();
        let args: Vec<_> = iter.map(|s| s.as_ref().to_owned()).collect();
        Self { program, args }
    }

    /// Add a single argument.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_owned());
        }
        self
    }

    /// Get the program name for messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Run to completion, capturing stdout and stderr.
    ///
    /// A non-zero exit is not an error here; callers inspect `status`.
    /// Stdin is inherited so credential prompts still reach the terminal.
    pub fn output(self) -> io::Result<Output> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        debug!("exec"; "{} exited with {}", self.program_name(), output.status);
        Ok(output)
    }
}

// ============================================================================
// Tests
// ============================================================================
