//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

use crate::dotenv::{CommentHandling, DEFAULT_FILE_NAME, DEFAULT_MARKER};
use serde::{Deserialize, Serialize};

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

/// Prefix for environment variables that override config file values.
pub const ENV_PREFIX: &str = "SITE_EXTRAS_";

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File that marks the project root.
    pub marker: String,
    /// Dotenv file name, relative to the project root.
    pub env_file: String,
    pub comment_handling: CommentHandling,
    /// Component prepended to site paths, e.g. when deploying under a subdirectory.
    pub path_prefix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            env_file: DEFAULT_FILE_NAME.to_string(),
            comment_handling: CommentHandling::default(),
            path_prefix: None,
        }
    }
}
