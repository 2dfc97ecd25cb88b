//! Env command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use site_extras::env::{EnvironmentProviderExt, EnvironmentVariable, ProcessEnvironment};
use url::Url;

use super::dotenv::{loader, DotenvOptions};
use super::utils::Context;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ValueKind {
    #[value(name = "string")]
    Text,
    Bool,
    Int,
    Url,
}

#[derive(Args)]
pub struct EnvArgs {
    /// Variable name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Type to read the value as
    #[arg(short, long, value_enum, default_value_t = ValueKind::Text)]
    pub kind: ValueKind,

    /// Load the project's dotenv file into the environment first
    #[arg(long)]
    pub dotenv: bool,

    #[command(flatten)]
    pub options: DotenvOptions,
}

pub fn run(args: EnvArgs, ctx: &Context) -> Result<()> {
    if args.dotenv {
        let config = ctx.config(args.options.overrides())?;
        let summary = loader(ctx.start(), &config).load()?;
        tracing::debug!("Loaded {} variables from {}", summary.keys.len(), summary.path.display());
    }

    let env = ProcessEnvironment;
    let rendered = match args.kind {
        ValueKind::Text => env.value(&EnvironmentVariable::<String>::named(&args.name))?,
        ValueKind::Bool => env.value(&EnvironmentVariable::<bool>::named(&args.name))?.to_string(),
        ValueKind::Int => env.value(&EnvironmentVariable::<i64>::named(&args.name))?.to_string(),
        ValueKind::Url => env.value(&EnvironmentVariable::<Url>::named(&args.name))?.to_string(),
    };
    println!("{}", rendered);

    Ok(())
}
