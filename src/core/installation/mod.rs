#![allow(clippy::result_large_err)]

use crate::core::entities::ToolInstallation;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::path::{Path, PathBuf};

/// Script FAPROTAX ships as its command-line entry point.
pub const ENTRY_SCRIPT: &str = "collapse_table.py";

/// Group definition database bundled with every FAPROTAX release.
pub const DATABASE_FILE: &str = "FAPROTAX.txt";

pub struct InstallationResolver;

impl InstallationResolver {
    /// Resolve a FAPROTAX installation.
    ///
    /// `explicit` wins over `configured`. Fails with `ConfigurationError` when
    /// neither is given and with `MissingDependencyError` when the entry script
    /// is not present under the chosen directory.
    pub fn resolve(
        explicit: Option<&Path>,
        configured: Option<&Path>,
    ) -> Result<ToolInstallation, AppError> {
        let base_dir = explicit.or(configured).ok_or_else(|| {
            AppError::new(ErrorCategory::ConfigurationError, "FAPROTAX_DIR is not configured")
                .with_code("CFG-001")
                .with_recovery(
                    "Pass the installation directory explicitly (--faprotax-dir <DIR> or FaprotaxRunner::new(Some(dir), ..))",
                )
                .with_recovery(
                    "Set faprotax.dir in faprotax.toml (copy faprotax.example.toml) or export FAPROTAX_DIR",
                )
        })?;

        let base_dir = PathBuf::from(base_dir);
        let entry_script = base_dir.join(ENTRY_SCRIPT);
        let database_file = base_dir.join(DATABASE_FILE);

        if !entry_script.is_file() {
            return Err(AppError::new(
                ErrorCategory::MissingDependencyError,
                format!("{} not found: {}", ENTRY_SCRIPT, entry_script.display()),
            )
            .with_code("DEP-001")
            .with_context("probed_path", entry_script.display().to_string())
            .with_recovery("Check that the directory is an unpacked FAPROTAX release"));
        }

        tracing::debug!(
            base_dir = %base_dir.display(),
            entry_script = %entry_script.display(),
            "resolved FAPROTAX installation"
        );

        Ok(ToolInstallation::from_parts(
            base_dir,
            entry_script,
            database_file,
        ))
    }
}
