//! Path command implementation

use anyhow::Result;
use clap::Args;
use site_extras::config::CliOverrides;
use site_extras::SitePath;

use super::utils::Context;

#[derive(Args)]
pub struct PathArgs {
    /// Site path to transform
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Component to prepend (defaults to the configured path_prefix)
    #[arg(short, long, value_name = "COMPONENT")]
    pub prefix: Option<String>,

    /// Print the path rooted at `/`
    #[arg(long)]
    pub absolute: bool,
}

pub fn run(args: PathArgs, ctx: &Context) -> Result<()> {
    let config = ctx.config(CliOverrides { path_prefix: args.prefix, ..CliOverrides::default() })?;

    let mut path = SitePath::new(args.path);
    if let Some(prefix) = &config.path_prefix {
        path.prepend_component(prefix);
    }

    if args.absolute {
        println!("{}", path.absolute_string());
    } else {
        println!("{}", path);
    }

    Ok(())
}
