pub mod args;
pub mod commands;

pub use args::{CheckArgs, CollapseArgs, InitArgs, OutputFormat, QuickArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "faprotax-runner")]
#[command(version = crate::VERSION)]
#[command(about = "Run FAPROTAX collapse_table.py with UTF-8 safe process handling")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: init a config, set faprotax.dir, check the installation, then collapse tables."
)]
pub struct Args {
    /// Config file (default: $FAPROTAX_CONFIG or ./faprotax.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "Convert an OTU table to functional groups",
        long_about = "Collapse runs collapse_table.py once with the given options and exits with its exit code.",
        after_help = "Example:\n    faprotax-runner collapse -i otu.tsv -o functional.tsv -r report.txt -- --row_names_are_in_column taxonomy"
    )]
    Collapse(CollapseArgs),
    #[command(
        about = "Collapse with defaults and report only success or failure",
        after_help = "Example:\n    faprotax-runner quick otu.tsv functional.tsv report.txt"
    )]
    Quick(QuickArgs),
    #[command(
        about = "Resolve the FAPROTAX installation and print its paths",
        after_help = "Example:\n    faprotax-runner check --faprotax-dir /opt/FAPROTAX_1.2.12"
    )]
    Check(CheckArgs),
    #[command(
        about = "Write a config file from the bundled template",
        after_help = "Example:\n    faprotax-runner init"
    )]
    Init(InitArgs),
}

/// Run the parsed command and return the process exit code.
pub fn run(args: Args) -> crate::Result<i32> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(crate::core::ConfigLoader::default_path);
    match args.command {
        Command::Collapse(collapse_args) => commands::collapse(&config_path, collapse_args),
        Command::Quick(quick_args) => commands::quick(&config_path, quick_args),
        Command::Check(check_args) => commands::check(&config_path, check_args),
        Command::Init(init_args) => commands::init(&config_path, init_args),
    }
}
