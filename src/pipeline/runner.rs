//! Command runners executing a step's command line.

use super::{DeployError, StepResult};
use crate::core::{StepGuard, is_shutdown};
use crate::utils::exec::Cmd;

/// Runs one command line to completion.
///
/// A non-zero exit is a failed `StepResult`, never an `Err`. Errors are
/// reserved for faults that abort the whole deployment.
pub trait CommandRunner {
    fn run(&mut self, command: &str) -> Result<StepResult, DeployError>;
}

/// Runs commands through a shell such as `sh -c` or `cmd /C`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: Vec<String>,
    /// Checked before spawning and after the child exits.
    interrupted: fn() -> bool,
}

impl ShellRunner {
    pub fn new(shell: Vec<String>) -> Self {
        Self {
            shell,
            interrupted: is_shutdown,
        }
    }

    #[cfg(test)]
    fn with_interrupt_check(shell: Vec<String>, interrupted: fn() -> bool) -> Self {
        Self { shell, interrupted }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<StepResult, DeployError> {
        if (self.interrupted)() {
            return Err(DeployError::Interrupted);
        }

        let output = {
            let _running = StepGuard::enter();
            Cmd::from_slice(&self.shell).arg(command).output()
        }
        .map_err(|source| DeployError::Spawn {
            command: command.to_owned(),
            source,
        })?;

        if (self.interrupted)() {
            return Err(DeployError::Interrupted);
        }

        let decode = |bytes: Vec<u8>| {
            String::from_utf8(bytes).map_err(|source| DeployError::Encoding {
                command: command.to_owned(),
                source,
            })
        };

        Ok(StepResult {
            success: output.status.success(),
            stdout: decode(output.stdout)?,
            stderr: decode(output.stderr)?,
        })
    }
}
