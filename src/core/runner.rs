//! External process execution.
//!
//! [`CommandRunner`] is the seam between the client facade and the operating
//! system: [`SystemRunner`] spawns the real `nordvpn` binary, tests swap in a
//! runner that returns canned output.

use std::process::Command;

use crate::error::{Error, Result};

/// Runs an argument vector and returns the text it produced.
pub trait CommandRunner: Send + Sync {
    /// Runs `argv[0]` with the remaining elements as discrete arguments.
    ///
    /// A non-zero exit is not an error: whatever the program printed is
    /// returned so callers can match on message content.
    ///
    /// # Errors
    ///
    /// Returns an error if `argv` is empty or the program cannot be spawned.
    fn run(&self, argv: &[String]) -> Result<String>;
}

/// Runs commands with [`std::process::Command`]; no shell is involved.
///
/// There is no timeout: a hung client blocks the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<String> {
        let (program, args) = argv.split_first().ok_or(Error::EmptyCommand)?;

        tracing::debug!(command = %argv.join(" "), "running external client");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| Error::Launch {
                program: program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if output.status.success() {
            return Ok(stdout);
        }

        tracing::warn!(
            command = %argv.join(" "),
            code = ?output.status.code(),
            "external client exited with failure"
        );

        // The client prints its own errors on stdout; fall back to stderr.
        if stdout.is_empty() {
            Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
        } else {
            Ok(stdout)
        }
    }
}
