//! Dotenv file loading
//!
//! Finds a `.env`-style file next to the nearest project root marker,
//! parses its `KEY=VALUE` lines and installs them into an
//! [`EnvironmentStore`](crate::env::EnvironmentStore).
//!
//! Parsing ends at the first blank or `#` comment line unless
//! [`CommentHandling::SkipLine`] is selected.

use crate::env::{EnvironmentStore, ProcessEnvironment};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub mod parser;
pub mod root;

pub use parser::{parse, Assignments, CommentHandling, EnvironmentAssignment};
pub use root::find_root;

pub const DEFAULT_FILE_NAME: &str = ".env";
pub const DEFAULT_MARKER: &str = "Cargo.toml";

/// Errors that can occur while loading a dotenv file.
///
/// None of the variants carry raw line contents, so secrets from the file
/// never end up in logs or terminal output.
#[derive(Error, Debug)]
pub enum DotenvError {
    #[error("No directory containing {marker} found above {}", .start.display())]
    RootNotFound { start: PathBuf, marker: String },

    #[error("Unable to locate the env file at {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("The env file has an invalid format at line {line}")]
    InvalidFormat { line: usize },

    #[error("Failed to read env file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a successful load did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// The file that was read.
    pub path: PathBuf,
    /// Keys that were set, in file order.
    pub keys: Vec<String>,
}

/// Builder for a single dotenv load.
///
/// ```no_run
/// use site_extras::dotenv::{CommentHandling, DotenvLoader};
///
/// let summary = DotenvLoader::new(env!("CARGO_MANIFEST_DIR"))
///     .file_name(".env.local")
///     .comment_handling(CommentHandling::SkipLine)
///     .load()?;
/// println!("loaded {} variables", summary.keys.len());
/// # Ok::<(), site_extras::dotenv::DotenvError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DotenvLoader {
    start: PathBuf,
    file_name: String,
    marker: String,
    comment_handling: CommentHandling,
}

impl DotenvLoader {
    /// Create a loader that searches for the project root from `start`.
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            comment_handling: CommentHandling::default(),
        }
    }

    /// Set the env file name, relative to the project root.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set the file whose presence marks the project root.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn comment_handling(mut self, handling: CommentHandling) -> Self {
        self.comment_handling = handling;
        self
    }

    /// Resolve the env file path without reading it.
    pub fn resolve(&self) -> Result<PathBuf, DotenvError> {
        let root = find_root(&self.start, &self.marker).ok_or_else(|| DotenvError::RootNotFound {
            start: self.start.clone(),
            marker: self.marker.clone(),
        })?;
        tracing::debug!("Resolved project root {} (marker {})", root.display(), self.marker);

        let path = root.join(&self.file_name);
        if !path.is_file() {
            return Err(DotenvError::FileNotFound { path });
        }
        Ok(path)
    }

    /// Load into the given store.
    ///
    /// Assignments are applied as they are parsed. If a later line is
    /// malformed, values from earlier lines stay set.
    pub fn load_into<S>(&self, store: &mut S) -> Result<LoadSummary, DotenvError>
    where
        S: EnvironmentStore + ?Sized,
    {
        let path = self.resolve()?;
        let content = fs::read_to_string(&path)
            .map_err(|source| DotenvError::Io { path: path.clone(), source })?;

        let mut keys = Vec::new();
        for assignment in Assignments::new(&content, self.comment_handling) {
            let assignment = assignment?;
            tracing::debug!("Setting {} from line {}", assignment.key, assignment.line);
            store.set_var(&assignment.key, &assignment.value);
            keys.push(assignment.key);
        }

        tracing::debug!("Loaded {} variables from {}", keys.len(), path.display());
        Ok(LoadSummary { path, keys })
    }

    /// Load into the process environment.
    pub fn load(&self) -> Result<LoadSummary, DotenvError> {
        self.load_into(&mut ProcessEnvironment)
    }
}

/// Load a dotenv file from the calling crate's root into the process
/// environment.
///
/// The search starts at the caller's `CARGO_MANIFEST_DIR` and uses
/// `Cargo.toml` as the root marker.
///
/// ```no_run
/// site_extras::load_dotenv!()?;
/// site_extras::load_dotenv!(".env.production")?;
/// # Ok::<(), site_extras::dotenv::DotenvError>(())
/// ```
#[macro_export]
macro_rules! load_dotenv {
    () => {
        $crate::load_dotenv!($crate::dotenv::DEFAULT_FILE_NAME)
    };
    ($file_name:expr) => {
        $crate::dotenv::DotenvLoader::new(env!("CARGO_MANIFEST_DIR")).file_name($file_name).load()
    };
}
