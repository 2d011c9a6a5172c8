#![allow(clippy::result_large_err)]

use crate::core::entities::{CommandLine, ExecutionResult};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::process::{Command, ExitStatus, Stdio};

/// Runs a composed command and captures its outcome.
///
/// Implementations block until the child exits. A non-zero exit code is
/// returned as data; `Err` is reserved for failing to run the command at all.
pub trait ProcessExecutor: Send + Sync {
    fn execute(&self, command: &CommandLine) -> Result<ExecutionResult, AppError>;
}

/// Executor backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        SystemExecutor
    }
}

impl ProcessExecutor for SystemExecutor {
    fn execute(&self, command: &CommandLine) -> Result<ExecutionResult, AppError> {
        tracing::debug!(command = %command, "executing tool");

        let start_time = std::time::Instant::now();
        let output = Command::new(&command.program)
            .args(&command.args)
            .envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                AppError::new(
                    ErrorCategory::ToolExecutionError,
                    format!(
                        "Failed to execute {}: {}",
                        command.program.to_string_lossy(),
                        e
                    ),
                )
                .with_code("EXEC-001")
                .with_recovery("Check that the configured interpreter (faprotax.python) is installed")
            })?;

        let exit_code = exit_code(&output.status);
        tracing::info!(
            exit_code,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "tool finished"
        );

        Ok(ExecutionResult::new(
            exit_code,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }
}

/// Exit code of the child, `-<signal>` when killed by a signal, else -1.
fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
