//! Command-line interface for site-extras
//!
//! Provides `dotenv`, `env`, `path`, `script` and `gtm` subcommands.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod dotenv;
mod env;
mod gtm;
mod path;
mod script;
mod utils;

use utils::Context;

/// Dotenv loading, typed environment access, site paths and script tags
#[derive(Parser)]
#[command(name = "site-extras")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory to start the project root search from (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Use this config file instead of discovering one
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the variables a dotenv file would set, without printing values
    Dotenv(dotenv::DotenvArgs),

    /// Print an environment variable as a typed value
    Env(env::EnvArgs),

    /// Prefix a site path
    Path(path::PathArgs),

    /// Render a <script> tag
    Script(script::ScriptArgs),

    /// Render Google Tag Manager snippets from GTM_* environment variables
    Gtm(gtm::GtmArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let start = match cli.dir {
        Some(dir) => dir
            .canonicalize()
            .with_context(|| format!("Directory does not exist: {}", dir.display()))?,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    let ctx = Context::new(start, cli.config);

    match cli.command {
        Commands::Dotenv(args) => dotenv::run(args, &ctx),
        Commands::Env(args) => env::run(args, &ctx),
        Commands::Path(args) => path::run(args, &ctx),
        Commands::Script(args) => script::run(args, &ctx),
        Commands::Gtm(args) => gtm::run(args, &ctx),
    }
}
