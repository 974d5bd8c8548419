//! External command execution
//!
//! The three collaborators (package finder, file search, bundler) are invoked
//! through the [`CommandRunner`] trait so tests can substitute a mock without
//! spawning real subprocesses.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{BenchbundleError, Result};

/// Captured result of one external command invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output
    pub stdout: Vec<u8>,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Whether the process exited with status zero
    pub success: bool,
}

impl CommandOutput {
    /// Human-readable label for the exit status ("exit status 1",
    /// "terminated by signal")
    pub fn status_label(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }

    /// Captured stdout as text, with invalid UTF-8 replaced
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Blocking external command invocation
pub trait CommandRunner {
    /// Run `program` with `args`, capturing stdout and waiting for exit.
    ///
    /// Standard error is passed through to the caller's stderr so
    /// collaborator diagnostics stay visible. Returns an error only when the
    /// process cannot be spawned; a non-zero exit is reported in the output.
    fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| BenchbundleError::CommandSpawnFailed {
                command: program.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            stdout: output.stdout,
            code: output.status.code(),
            success: output.status.success(),
        })
    }
}
