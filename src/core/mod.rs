pub mod command_builder;
pub mod config;
pub mod entities;
pub mod error;
pub mod installation;
pub mod results_processor;
pub mod runner;
pub mod tool_executor;
pub mod types;

pub use command_builder::CommandBuilder;
pub use config::{ConfigLoader, ConfigValidator, RunnerConfig};
pub use entities::{
    CollapseRequest, CommandLine, ExecutionResult, PassthroughArgs, ToolInstallation,
};
pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use installation::InstallationResolver;
pub use results_processor::{
    ConsoleReporter, Feedback, ResultReporter, ResultsProcessor, SilentReporter,
};
pub use runner::{run_simple, run_simple_with, FaprotaxRunner};
pub use tool_executor::{ProcessExecutor, SystemExecutor};
pub use types::*;
