use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

pub use crate::core::types::{ColumnNamesLocation, NormalizationMode};

/// Group name assigned to records that match no FAPROTAX group.
pub const DEFAULT_LEFTOVERS_GROUP: &str = "other";

/// Parameters of a single `collapse_table.py` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseRequest {
    pub input_table: PathBuf,
    pub output_table: PathBuf,
    pub output_report: Option<PathBuf>,
    /// Overrides the installation's bundled `FAPROTAX.txt`.
    pub groups_file: Option<PathBuf>,
    pub group_leftovers_as: String,
    pub normalize: NormalizationMode,
    pub column_names_in: ColumnNamesLocation,
    pub verbose: bool,
    /// Forwarded verbatim after every fixed option.
    pub additional_args: Vec<String>,
}

impl CollapseRequest {
    pub fn new(input_table: impl Into<PathBuf>, output_table: impl Into<PathBuf>) -> Self {
        CollapseRequest {
            input_table: input_table.into(),
            output_table: output_table.into(),
            output_report: None,
            groups_file: None,
            group_leftovers_as: DEFAULT_LEFTOVERS_GROUP.to_string(),
            normalize: NormalizationMode::default(),
            column_names_in: ColumnNamesLocation::default(),
            verbose: true,
            additional_args: Vec::new(),
        }
    }

    pub fn with_report(mut self, report: impl Into<PathBuf>) -> Self {
        self.output_report = Some(report.into());
        self
    }

    pub fn with_groups_file(mut self, groups_file: impl Into<PathBuf>) -> Self {
        self.groups_file = Some(groups_file.into());
        self
    }

    pub fn with_group_leftovers_as(mut self, group: impl Into<String>) -> Self {
        self.group_leftovers_as = group.into();
        self
    }

    pub fn with_normalize(mut self, mode: NormalizationMode) -> Self {
        self.normalize = mode;
        self
    }

    pub fn with_column_names_in(mut self, location: ColumnNamesLocation) -> Self {
        self.column_names_in = location;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_additional_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Builds passthrough tokens for the `collapse_table.py` flags callers commonly add.
///
/// Nothing here is validated; the tokens are appended exactly as produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassthroughArgs {
    tokens: Vec<String>,
}

impl PassthroughArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_names_are_in_column(self, column: impl Into<String>) -> Self {
        self.flag_with_value("--row_names_are_in_column", column)
    }

    pub fn omit_columns(self, columns: impl Into<String>) -> Self {
        self.flag_with_value("--omit_columns", columns)
    }

    pub fn group_members_defined_as(self, mode: impl Into<String>) -> Self {
        self.flag_with_value("--group_members_defined_as", mode)
    }

    pub fn case_sensitive(self) -> Self {
        self.raw("--case_sensitive")
    }

    pub fn raw(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }

    fn flag_with_value(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.tokens.push(flag.to_string());
        self.tokens.push(value.into());
        self
    }
}

impl IntoIterator for PassthroughArgs {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// A fully composed child-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// Variables added on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl CommandLine {
    pub fn new(program: impl Into<OsString>) -> Self {
        CommandLine {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(&mut self, arg: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn env(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Program followed by every argument, lossily converted for display and assertions.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|token| token.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

/// Captured outcome of one child-process execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl ExecutionResult {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        ExecutionResult {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: exit_code == 0,
        }
    }
}

/// Resolved location of a FAPROTAX installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInstallation {
    base_dir: PathBuf,
    entry_script: PathBuf,
    database_file: PathBuf,
}

impl ToolInstallation {
    pub(crate) fn from_parts(
        base_dir: PathBuf,
        entry_script: PathBuf,
        database_file: PathBuf,
    ) -> Self {
        ToolInstallation {
            base_dir,
            entry_script,
            database_file,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn entry_script(&self) -> &Path {
        &self.entry_script
    }

    pub fn database_file(&self) -> &Path {
        &self.database_file
    }
}
