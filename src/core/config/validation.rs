#![allow(clippy::result_large_err)]

use super::RunnerConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &RunnerConfig) -> Result<(), AppError> {
        if config.faprotax.python.trim().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "faprotax.python cannot be empty",
            ));
        }

        if let Some(dir) = &config.faprotax.dir {
            if dir.as_os_str().is_empty() {
                return Err(AppError::new(
                    ErrorCategory::ValidationError,
                    "faprotax.dir cannot be empty; remove the key to leave it unset",
                ));
            }
        }

        Ok(())
    }
}
