#![allow(clippy::result_large_err)]

use crate::core::command_builder::CommandBuilder;
use crate::core::config::RunnerConfig;
use crate::core::entities::{CollapseRequest, CommandLine, ExecutionResult, ToolInstallation};
use crate::core::error::AppError;
use crate::core::installation::InstallationResolver;
use crate::core::results_processor::{ConsoleReporter, ResultReporter, ResultsProcessor};
use crate::core::tool_executor::{ProcessExecutor, SystemExecutor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Runs FAPROTAX `collapse_table.py` against one resolved installation.
///
/// The installation is resolved once in [`FaprotaxRunner::new`] and reused
/// read-only by every request.
#[derive(Clone)]
pub struct FaprotaxRunner {
    installation: ToolInstallation,
    builder: CommandBuilder,
    executor: Arc<dyn ProcessExecutor>,
    reporter: Arc<dyn ResultReporter>,
}

impl FaprotaxRunner {
    /// Resolve the installation from `faprotax_dir`, falling back to `config`.
    pub fn new(faprotax_dir: Option<&Path>, config: &RunnerConfig) -> Result<Self, AppError> {
        let installation =
            InstallationResolver::resolve(faprotax_dir, config.faprotax.dir.as_deref())?;

        Ok(FaprotaxRunner {
            installation,
            builder: CommandBuilder::new(&config.faprotax.python),
            executor: Arc::new(SystemExecutor::new()),
            reporter: Arc::new(ConsoleReporter),
        })
    }

    pub fn with_executor(mut self, executor: Arc<dyn ProcessExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ResultReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn installation(&self) -> &ToolInstallation {
        &self.installation
    }

    /// Command line that [`collapse_table`](Self::collapse_table) would execute.
    pub fn build_command(&self, request: &CollapseRequest) -> CommandLine {
        self.builder.build(&self.installation, request)
    }

    /// Convert an OTU table to functional groups.
    ///
    /// Blocks until the tool exits. A non-zero exit code is reported and
    /// returned in the result; only failing to start the tool is an `Err`.
    pub fn collapse_table(&self, request: &CollapseRequest) -> Result<ExecutionResult, AppError> {
        let command = self.build_command(request);
        self.reporter.report_command(&command);

        let result = self.executor.execute(&command)?;

        let feedback = ResultsProcessor::feedback(&result, &request.output_table);
        self.reporter.report_feedback(&feedback);

        Ok(result)
    }
}

impl std::fmt::Debug for FaprotaxRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaprotaxRunner")
            .field("installation", &self.installation)
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

/// Run FAPROTAX with the simplest interface.
///
/// Returns `true` only when the tool exits with code 0. Every error, including
/// an unconfigured installation, is printed and turned into `false`; callers
/// that need to tell errors apart should use [`FaprotaxRunner`] directly.
pub fn run_simple(
    config: &RunnerConfig,
    input_file: impl Into<PathBuf>,
    output_file: impl Into<PathBuf>,
    report_file: Option<PathBuf>,
) -> bool {
    run_simple_with(
        config,
        input_file,
        output_file,
        report_file,
        Arc::new(SystemExecutor::new()),
        Arc::new(ConsoleReporter),
    )
}

/// [`run_simple`] with an injected executor and reporter.
pub fn run_simple_with(
    config: &RunnerConfig,
    input_file: impl Into<PathBuf>,
    output_file: impl Into<PathBuf>,
    report_file: Option<PathBuf>,
    executor: Arc<dyn ProcessExecutor>,
    reporter: Arc<dyn ResultReporter>,
) -> bool {
    let mut request = CollapseRequest::new(input_file, output_file);
    request.output_report = report_file;

    let outcome = FaprotaxRunner::new(None, config).and_then(|runner| {
        runner
            .with_executor(executor)
            .with_reporter(reporter.clone())
            .collapse_table(&request)
    });

    match outcome {
        Ok(result) => result.exit_code == 0,
        Err(error) => {
            tracing::debug!(code = %error.code, "simple run failed");
            reporter.report_error(&error);
            false
        }
    }
}
