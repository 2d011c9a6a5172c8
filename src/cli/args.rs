use crate::core::types::{ColumnNamesLocation, NormalizationMode};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CollapseArgs {
    /// Input OTU table (.tsv, .csv, .biom, ...)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input_table: PathBuf,

    /// Functional table to write
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_table: PathBuf,

    /// Human-readable report to write
    #[arg(short = 'r', long, value_name = "FILE")]
    pub output_report: Option<PathBuf>,

    /// Group definition file (default: FAPROTAX.txt of the installation)
    #[arg(short = 'g', long, value_name = "FILE")]
    pub groups_file: Option<PathBuf>,

    /// Group name for records that match no group
    #[arg(long, default_value = "other", value_name = "NAME")]
    pub group_leftovers_as: String,

    /// Normalization applied to the collapsed table
    #[arg(long, default_value_t = NormalizationMode::default(), value_name = "MODE")]
    pub normalize_collapsed: NormalizationMode,

    /// Where the input table keeps its column names
    #[arg(long, default_value_t = ColumnNamesLocation::default(), value_name = "MODE")]
    pub column_names_are_in: ColumnNamesLocation,

    /// Do not pass -v to collapse_table.py
    #[arg(long, help_heading = "Output Options")]
    pub quiet: bool,

    /// Emit the execution result as text or JSON
    #[arg(long, default_value = "text", value_name = "FORMAT", help_heading = "Output Options")]
    pub format: OutputFormat,

    /// Print the composed command without running it
    #[arg(long, help_heading = "Output Options")]
    pub dry_run: bool,

    /// FAPROTAX installation directory (overrides faprotax.dir)
    #[arg(long, value_name = "DIR", help_heading = "Configuration")]
    pub faprotax_dir: Option<PathBuf>,

    /// Extra arguments forwarded verbatim to collapse_table.py
    #[arg(last = true, value_name = "ARGS", allow_hyphen_values = true)]
    pub additional_args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct QuickArgs {
    /// Input OTU table
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Functional table to write
    #[arg(value_name = "OUTPUT")]
    pub output_file: PathBuf,

    /// Report file to write
    #[arg(value_name = "REPORT")]
    pub report_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// FAPROTAX installation directory (overrides faprotax.dir)
    #[arg(long, value_name = "DIR")]
    pub faprotax_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the config file (default: faprotax.toml)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Progress and tool output for humans
    Text,
    /// ExecutionResult as a JSON document on stdout
    Json,
}
