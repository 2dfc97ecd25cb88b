//! Config file loading

use super::{Config, ENV_PREFIX};
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Load configuration for the project containing `start`.
///
/// Layers, lowest to highest: defaults, the config file (explicit
/// `config_path`, or the nearest one found in `start` or its ancestors),
/// then `SITE_EXTRAS_*`
/// environment variables. A discovered file that fails to load is logged
/// and skipped; an explicit one is an error.
pub fn load_config(start: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(start),
    };

    let Some(config_file) = discovered else {
        return extract(base_figment());
    };

    if config_path_provided && !config_file.exists() {
        anyhow::bail!("Config file not found: {}", config_file.display());
    }

    let with_file = match file_figment(&config_file) {
        Ok(figment) => extract(figment)
            .with_context(|| format!("Invalid config file: {}", config_file.display())),
        Err(e) => Err(e),
    };

    match with_file {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(config)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to defaults plus environment
            tracing::warn!("Ignoring auto-discovered config {}: {:#}", config_file.display(), e);
            extract(base_figment())
        }
    }
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn file_figment(config_file: &Path) -> Result<Figment> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let figment = match ext.as_str() {
        "toml" => base_figment().merge(Toml::file(config_file)),
        "yaml" | "yml" => base_figment().merge(Yaml::file(config_file)),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };
    Ok(figment)
}

fn extract(figment: Figment) -> Result<Config> {
    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Failed to resolve configuration")
}

const CONFIG_CANDIDATES: [&str; 6] = [
    "site-extras.toml",
    ".site-extras.toml",
    "site-extras.yaml",
    "site-extras.yml",
    ".site-extras.yaml",
    ".site-extras.yml",
];

/// The first candidate in the closest directory, walking up from `start`.
fn discover_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_CANDIDATES.iter().map(|candidate| dir.join(candidate)).find(|path| path.is_file())
    })
}
