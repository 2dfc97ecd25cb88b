//! Shared CLI utilities.

use anyhow::Result;
use site_extras::config::{load_config, merge_cli_with_config, CliOverrides, Config};
use std::path::{Path, PathBuf};

/// Where the command runs and which config file it was pointed at.
pub struct Context {
    pub start: PathBuf,
    pub config_path: Option<PathBuf>,
}

impl Context {
    pub fn new(start: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self { start, config_path }
    }

    pub fn start(&self) -> &Path {
        &self.start
    }

    /// Load the config for `start` and apply command-line overrides.
    pub fn config(&self, overrides: CliOverrides) -> Result<Config> {
        let config = load_config(&self.start, self.config_path.as_deref())?;
        Ok(merge_cli_with_config(config, overrides))
    }
}
