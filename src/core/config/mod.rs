use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runner configuration loaded from faprotax.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// FAPROTAX installation configuration
    #[serde(default)]
    pub faprotax: FaprotaxConfig,
}

/// FAPROTAX installation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaprotaxConfig {
    /// Directory containing collapse_table.py and FAPROTAX.txt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Interpreter used to run collapse_table.py
    #[serde(default = "default_python")]
    pub python: String,
}

fn default_python() -> String {
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

impl Default for FaprotaxConfig {
    fn default() -> Self {
        FaprotaxConfig {
            dir: None,
            python: default_python(),
        }
    }
}

impl RunnerConfig {
    /// Configuration pointing at an explicit installation directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        RunnerConfig {
            faprotax: FaprotaxConfig {
                dir: Some(dir.into()),
                ..Default::default()
            },
        }
    }
}

pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;
