//! Environment access
//!
//! Providers expose variables for reading; stores can also be written to.
//! Typed lookups go through [`EnvironmentVariable`].

pub mod store;
pub mod variable;

pub use store::{EnvironmentProvider, EnvironmentStore, MemoryEnvironment, ProcessEnvironment};
pub use variable::{EnvironmentError, EnvironmentProviderExt, EnvironmentVariable, FromEnvValue};
