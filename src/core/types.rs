use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ConfigurationError,
    MissingDependencyError,
    ToolExecutionError,
    ValidationError,
    IoError,
    InternalError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Fatal,
    Error,
}

/// Raised when a mode string does not match any value the tool accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {option} '{value}'; supported values are {supported}")]
pub struct ModeParseError {
    pub option: &'static str,
    pub value: String,
    pub supported: &'static str,
}

/// How collapsed tables are normalized (`--normalize_collapsed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    None,
    ColumnsBeforeCollapsing,
    #[default]
    ColumnsAfterCollapsing,
    ColumnsBeforeCollapsingExcludingUnassigned,
}

impl NormalizationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationMode::None => "none",
            NormalizationMode::ColumnsBeforeCollapsing => "columns_before_collapsing",
            NormalizationMode::ColumnsAfterCollapsing => "columns_after_collapsing",
            NormalizationMode::ColumnsBeforeCollapsingExcludingUnassigned => {
                "columns_before_collapsing_excluding_unassigned"
            }
        }
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationMode {
    type Err = ModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "none" => Ok(NormalizationMode::None),
            "columns_before_collapsing" => Ok(NormalizationMode::ColumnsBeforeCollapsing),
            "columns_after_collapsing" => Ok(NormalizationMode::ColumnsAfterCollapsing),
            "columns_before_collapsing_excluding_unassigned" => {
                Ok(NormalizationMode::ColumnsBeforeCollapsingExcludingUnassigned)
            }
            _ => Err(ModeParseError {
                option: "normalize_collapsed",
                value: value.to_string(),
                supported: "none, columns_before_collapsing, columns_after_collapsing, \
                            columns_before_collapsing_excluding_unassigned",
            }),
        }
    }
}

/// Where the input table keeps its column names (`--column_names_are_in`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnNamesLocation {
    None,
    LastCommentLine,
    #[default]
    FirstDataLine,
}

impl ColumnNamesLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnNamesLocation::None => "none",
            ColumnNamesLocation::LastCommentLine => "last_comment_line",
            ColumnNamesLocation::FirstDataLine => "first_data_line",
        }
    }
}

impl fmt::Display for ColumnNamesLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnNamesLocation {
    type Err = ModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "none" => Ok(ColumnNamesLocation::None),
            "last_comment_line" => Ok(ColumnNamesLocation::LastCommentLine),
            "first_data_line" => Ok(ColumnNamesLocation::FirstDataLine),
            _ => Err(ModeParseError {
                option: "column_names_are_in",
                value: value.to_string(),
                supported: "none, last_comment_line, first_data_line",
            }),
        }
    }
}
