//! GTM command implementation

use anyhow::{Context as _, Result};
use clap::Args;
use site_extras::env::ProcessEnvironment;
use site_extras::html::{gtm_body_snippet, GtmConfiguration, Script};

use super::dotenv::{loader, DotenvOptions};
use super::utils::Context;

#[derive(Args)]
pub struct GtmArgs {
    /// Load the project's dotenv file into the environment first
    #[arg(long)]
    pub dotenv: bool,

    #[command(flatten)]
    pub options: DotenvOptions,
}

pub fn run(args: GtmArgs, ctx: &Context) -> Result<()> {
    if args.dotenv {
        let config = ctx.config(args.options.overrides())?;
        loader(ctx.start(), &config).load()?;
    }

    let configuration = GtmConfiguration::from_environment(&ProcessEnvironment)
        .context("Google Tag Manager is not configured")?;

    println!("{}", Script::gtm(&configuration));
    println!("{}", gtm_body_snippet(&configuration));
    Ok(())
}
