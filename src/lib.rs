//! site-extras: conveniences for static site generators
//!
//! - [`dotenv`]: load `.env` files found next to the project root marker
//! - [`env`]: typed access to environment variables
//! - [`path`]: site-relative paths with prefixing
//! - [`html`]: attributes, `<script>` tags and Google Tag Manager snippets
//! - [`config`]: layered tool configuration

pub mod config;
pub mod dotenv;
pub mod env;
pub mod html;
pub mod path;

pub use dotenv::{CommentHandling, DotenvError, DotenvLoader};
pub use env::{EnvironmentProvider, EnvironmentProviderExt, EnvironmentStore, EnvironmentVariable};
pub use path::SitePath;
