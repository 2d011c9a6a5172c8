use crate::core::entities::{CommandLine, ExecutionResult};
use crate::core::error::AppError;
use std::path::{Path, PathBuf};

/// Human-facing interpretation of an [`ExecutionResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Created {
        output_table: PathBuf,
        /// Tool stdout, present only when non-empty.
        stdout: Option<String>,
    },
    Failed {
        exit_code: i32,
        stderr: String,
    },
}

pub struct ResultsProcessor;

impl ResultsProcessor {
    pub fn feedback(result: &ExecutionResult, output_table: &Path) -> Feedback {
        if result.exit_code == 0 {
            Feedback::Created {
                output_table: output_table.to_path_buf(),
                stdout: Some(result.stdout.clone()).filter(|s| !s.is_empty()),
            }
        } else {
            Feedback::Failed {
                exit_code: result.exit_code,
                stderr: result.stderr.clone(),
            }
        }
    }

    /// Lines printed for a piece of feedback, in order.
    pub fn render(feedback: &Feedback) -> Vec<String> {
        match feedback {
            Feedback::Created {
                output_table,
                stdout,
            } => {
                let mut lines = vec![format!("✓ Success: Created {}", output_table.display())];
                if let Some(stdout) = stdout {
                    lines.push(stdout.clone());
                }
                lines
            }
            Feedback::Failed { exit_code, stderr } => vec![
                format!("✗ Error occurred (exit code {}):", exit_code),
                stderr.clone(),
            ],
        }
    }
}

/// Sink for the messages a runner shows while it works.
///
/// Reporting is observational: implementations must not fail or alter results.
pub trait ResultReporter: Send + Sync {
    fn report_command(&self, command: &CommandLine);
    fn report_feedback(&self, feedback: &Feedback);
    fn report_error(&self, error: &AppError);
}

/// Prints to the terminal: success on stdout, failures on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ResultReporter for ConsoleReporter {
    fn report_command(&self, command: &CommandLine) {
        println!("Running: {}", command);
    }

    fn report_feedback(&self, feedback: &Feedback) {
        let lines = ResultsProcessor::render(feedback);
        match feedback {
            Feedback::Created { .. } => lines.iter().for_each(|line| println!("{}", line)),
            Feedback::Failed { .. } => lines.iter().for_each(|line| eprintln!("{}", line)),
        }
    }

    fn report_error(&self, error: &AppError) {
        println!("Error: {}", error.message);
        for suggestion in &error.recovery_suggestions {
            println!("  - {}", suggestion);
        }
    }
}

/// Discards everything; used for `--format json` and by library callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ResultReporter for SilentReporter {
    fn report_command(&self, _command: &CommandLine) {}
    fn report_feedback(&self, _feedback: &Feedback) {}
    fn report_error(&self, _error: &AppError) {}
}
