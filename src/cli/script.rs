//! Script command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use site_extras::config::CliOverrides;
use site_extras::html::{Script, ScriptType};

use super::utils::Context;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Loading {
    Async,
    Defer,
}

#[derive(Args)]
pub struct ScriptArgs {
    /// Script path, or the script's code with --inline
    #[arg(value_name = "SRC")]
    pub src: String,

    /// Treat SRC as inline code
    #[arg(long)]
    pub inline: bool,

    /// How an external script is loaded
    #[arg(short, long, value_enum, conflicts_with = "inline")]
    pub loading: Option<Loading>,

    /// Script type: module, importmap, classic, or a MIME type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub script_type: Option<String>,

    /// Component to prepend to the script path (defaults to the configured path_prefix)
    #[arg(short, long, value_name = "COMPONENT")]
    pub prefix: Option<String>,
}

fn parse_script_type(value: &str) -> ScriptType {
    match value {
        "module" => ScriptType::Module,
        "importmap" => ScriptType::ImportMap,
        "classic" | "" => ScriptType::Classic(None),
        mime => ScriptType::Classic(Some(mime.to_string())),
    }
}

pub fn run(args: ScriptArgs, ctx: &Context) -> Result<()> {
    let config = ctx.config(CliOverrides { path_prefix: args.prefix, ..CliOverrides::default() })?;
    let script_type = args.script_type.as_deref().map(parse_script_type);

    let mut script = if args.inline {
        Script::inline(args.src, script_type)
    } else {
        match args.loading {
            Some(Loading::Async) => Script::asynchronous(args.src, script_type),
            Some(Loading::Defer) => Script::deferred(args.src, script_type),
            None => Script::immediate(args.src, script_type),
        }
    };

    if let Some(prefix) = &config.path_prefix {
        script = script.prefixed(prefix);
    }

    println!("{}", script);
    Ok(())
}
