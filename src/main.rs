//! site-extras: utilities for static site projects
//!
//! Loads dotenv files, reads typed environment variables, prefixes site
//! paths and renders script tags from the command line.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
