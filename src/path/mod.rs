//! Site-relative paths

use serde::{Deserialize, Serialize};
use std::fmt;

/// A path to a resource within a site, such as `posts/first` or `/styles.css`.
///
/// Full URLs (`https://...`) may also be stored; prefixing leaves them alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SitePath(String);

impl SitePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prepend a path component in place.
    ///
    /// Does nothing when `component` is empty or the path is an `http://`
    /// or `https://` URL. Leading slashes are dropped from both sides and a
    /// single `/` joins them unless `component` already ends in one.
    pub fn prepend_component(&mut self, component: &str) {
        if let Some(joined) = self.joined_with(component) {
            self.0 = joined;
        }
    }

    /// Return a copy with `component` prepended. See [`SitePath::prepend_component`].
    pub fn prepending_component(&self, component: &str) -> SitePath {
        match self.joined_with(component) {
            Some(joined) => SitePath(joined),
            None => self.clone(),
        }
    }

    fn joined_with(&self, component: &str) -> Option<String> {
        if component.is_empty() || self.is_remote() {
            return None;
        }

        let component = component.trim_start_matches('/');
        let current = self.0.trim_start_matches('/');
        let separator = if component.ends_with('/') { "" } else { "/" };
        Some(format!("{component}{separator}{current}"))
    }

    fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// The path as it should appear in an `href` or `src`: unchanged when it
    /// is already absolute or carries a scheme, otherwise rooted at `/`.
    pub fn absolute_string(&self) -> String {
        if self.0.starts_with('/') || self.0.contains("://") {
            self.0.clone()
        } else {
            format!("/{}", self.0)
        }
    }
}

impl fmt::Display for SitePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SitePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SitePath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for SitePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl PartialEq<&str> for SitePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
