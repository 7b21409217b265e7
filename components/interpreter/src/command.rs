//! The command execution boundary.
//!
//! Command statements hand fully interpolated command lines to a
//! [`CommandProvider`]; it is the only I/O side effect the evaluator
//! depends on. Hosts supply their own provider (the CLI uses
//! [`ShellCommandProvider`], tests record the lines they receive).

use std::process::Command;

use core_types::{ScriptError, ScriptResult};
use tracing::{debug, warn};

/// Executes one resolved command line.
pub trait CommandProvider {
    /// Run a command line to completion.
    ///
    /// An `Err` aborts the whole script; a command that merely exits
    /// nonzero should not be an `Err`.
    fn execute(&mut self, command: &str) -> ScriptResult<()>;
}

/// Runs command lines through the system shell and waits for each.
#[derive(Debug, Default)]
pub struct ShellCommandProvider;

impl ShellCommandProvider {
    /// Create a shell provider.
    pub fn new() -> Self {
        ShellCommandProvider
    }
}

impl CommandProvider for ShellCommandProvider {
    fn execute(&mut self, command: &str) -> ScriptResult<()> {
        debug!(command, "executing command line");

        match Command::new("sh").arg("-c").arg(command).status() {
            Ok(status) => {
                if !status.success() {
                    warn!(command, code = status.code(), "command exited with failure");
                }
                Ok(())
            }
            Err(err) => Err(ScriptError::command_error(format!(
                "could not run '{}': {}",
                command, err
            ))),
        }
    }
}
