#![allow(clippy::result_large_err)]

use super::{ConfigValidator, RunnerConfig};
use crate::core::error::{AppError, DefaultErrorReporter, ErrorReporter};
use crate::core::types::ErrorCategory;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "faprotax.toml";

/// Versioned template users copy to create their config file.
pub const TEMPLATE_FILE: &str = "faprotax.example.toml";

/// Contents of the versioned template, written by `faprotax-runner init`.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../faprotax.example.toml");

pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the config file: `FAPROTAX_CONFIG` when set, else ./faprotax.toml
    pub fn default_path() -> PathBuf {
        env::var("FAPROTAX_CONFIG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load config, warning on stderr when the file does not exist.
    pub fn load(path: &Path) -> Result<RunnerConfig, AppError> {
        Self::load_with_reporter(path, &DefaultErrorReporter::new())
    }

    /// Load config from `path`, apply environment overrides and validate.
    ///
    /// A missing file is not an error: the reporter receives a warning pointing
    /// at the template and the defaults (no installation directory) are used.
    pub fn load_with_reporter(
        path: &Path,
        reporter: &dyn ErrorReporter,
    ) -> Result<RunnerConfig, AppError> {
        let mut config = match Self::load_from_file(path)? {
            Some(config) => config,
            None => {
                tracing::debug!(path = %path.display(), "config file not found");
                reporter.report_warning(
                    &format!("{} not found.", path.display()),
                    Some(format!(
                        "Copy {} to {} and set faprotax.dir, or run `faprotax-runner init`.",
                        TEMPLATE_FILE,
                        path.display()
                    )),
                );
                RunnerConfig::default()
            }
        };

        Self::apply_env_overrides(&mut config);
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<RunnerConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: RunnerConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    /// Write the bundled template to `path`. Never overwrites an existing file.
    pub fn write_template(path: &Path) -> Result<(), AppError> {
        if path.exists() {
            return Err(AppError::new(
                ErrorCategory::IoError,
                format!("{} already exists; edit it or remove it first", path.display()),
            )
            .with_code("CFG-002"));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, CONFIG_TEMPLATE)?;
        Ok(())
    }

    /// Environment variables take precedence over config file values
    fn apply_env_overrides(config: &mut RunnerConfig) {
        if let Some(dir) = non_empty_var("FAPROTAX_DIR") {
            config.faprotax.dir = Some(PathBuf::from(dir));
        }

        if let Some(python) = non_empty_var("FAPROTAX_PYTHON") {
            config.faprotax.python = python;
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "FAPROTAX_CONFIG - Path of the config file (default: ./faprotax.toml)",
            "FAPROTAX_DIR - Override the FAPROTAX installation directory",
            "FAPROTAX_PYTHON - Override the interpreter used to run collapse_table.py",
            "FAPROTAX_LOG_LEVEL - Override the default logging level (default: warn)",
        ]
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
