//! CLI overrides on top of loaded configuration

use super::Config;
use crate::dotenv::CommentHandling;

/// Values given on the command line. `None` leaves the config value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub marker: Option<String>,
    pub env_file: Option<String>,
    pub skip_comments: bool,
    pub path_prefix: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, overrides: CliOverrides) -> Config {
    if let Some(marker) = overrides.marker {
        config.marker = marker;
    }
    if let Some(env_file) = overrides.env_file {
        config.env_file = env_file;
    }
    // The flag can only turn skipping on; there is no CLI way to force the stop behavior.
    if overrides.skip_comments {
        config.comment_handling = CommentHandling::SkipLine;
    }
    if let Some(prefix) = overrides.path_prefix {
        config.path_prefix = Some(prefix);
    }
    config
}
