//! Dotenv command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;
use site_extras::config::{CliOverrides, Config};
use site_extras::dotenv::DotenvLoader;
use site_extras::env::MemoryEnvironment;
use std::path::Path;

use super::utils::Context;

/// Options shared by every command that reads the dotenv file.
#[derive(Args)]
pub struct DotenvOptions {
    /// Env file name, relative to the project root
    #[arg(short, long, value_name = "NAME")]
    pub file: Option<String>,

    /// File that marks the project root
    #[arg(long, value_name = "NAME")]
    pub marker: Option<String>,

    /// Skip blank and comment lines instead of stopping at the first one
    #[arg(long)]
    pub skip_comments: bool,
}

impl DotenvOptions {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            marker: self.marker.clone(),
            env_file: self.file.clone(),
            skip_comments: self.skip_comments,
            path_prefix: None,
        }
    }
}

pub fn loader(start: &Path, config: &Config) -> DotenvLoader {
    DotenvLoader::new(start)
        .file_name(config.env_file.as_str())
        .marker(config.marker.as_str())
        .comment_handling(config.comment_handling)
}

#[derive(Args)]
pub struct DotenvArgs {
    #[command(flatten)]
    pub options: DotenvOptions,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DotenvArgs, ctx: &Context) -> Result<()> {
    let config = ctx.config(args.options.overrides())?;

    // Parse into memory only; this command never touches the process environment.
    let mut store = MemoryEnvironment::new();
    let summary = loader(ctx.start(), &config).load_into(&mut store)?;

    if args.json {
        let report = json!({
            "path": summary.path.display().to_string(),
            "keys": summary.keys,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Loaded {} variables from {}", summary.keys.len(), summary.path.display());
    for key in &summary.keys {
        println!("  {}", key);
    }

    Ok(())
}
