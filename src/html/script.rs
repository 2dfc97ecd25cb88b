//! Context-independent `<script>` elements

use super::attribute::{Attribute, AttributeConvertible, AttributeSet};
use crate::path::SitePath;
use std::fmt;

/// Where a script's code comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Code embedded in the element.
    Inline(String),
    /// Code loaded from a path or URL.
    External(SitePath),
}

/// How an external script is downloaded and executed.
///
/// Without a loading behavior the script blocks parsing until it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingBehavior {
    /// Downloaded in parallel with parsing, executed as soon as it arrives.
    Async,
    /// Downloaded in parallel with parsing, executed after parsing finishes.
    Deferred,
}

/// The script element's `type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptType {
    /// A classic script. With no MIME type the attribute is omitted, which is
    /// the preferred form for JavaScript.
    Classic(Option<String>),
    /// The element body is a JSON import map.
    ImportMap,
    /// The code is a JavaScript module.
    Module,
}

impl AttributeConvertible for ScriptType {
    const ATTRIBUTE_NAME: &'static str = "type";

    fn value(&self) -> String {
        match self {
            ScriptType::Classic(mime) => mime.clone().unwrap_or_default(),
            ScriptType::ImportMap => "importmap".to_string(),
            ScriptType::Module => "module".to_string(),
        }
    }
}

/// A `<script>` element and its attributes.
///
/// ```
/// use site_extras::html::{Script, ScriptType};
///
/// let script = Script::deferred("js/app.js", Some(ScriptType::Module));
/// assert_eq!(
///     script.to_html(),
///     r#"<script type="module" src="/js/app.js" defer></script>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub source: Source,
    pub loading_behavior: Option<LoadingBehavior>,
    pub script_type: Option<ScriptType>,
}

impl Script {
    fn with(
        source: Source,
        loading_behavior: Option<LoadingBehavior>,
        script_type: Option<ScriptType>,
    ) -> Self {
        Self { source, loading_behavior, script_type }
    }

    /// An external script loaded in `async` mode.
    pub fn asynchronous(path: impl Into<SitePath>, script_type: Option<ScriptType>) -> Self {
        Self::with(Source::External(path.into()), Some(LoadingBehavior::Async), script_type)
    }

    /// An external script loaded in `defer` mode.
    pub fn deferred(path: impl Into<SitePath>, script_type: Option<ScriptType>) -> Self {
        Self::with(Source::External(path.into()), Some(LoadingBehavior::Deferred), script_type)
    }

    /// An external script that blocks parsing.
    pub fn immediate(path: impl Into<SitePath>, script_type: Option<ScriptType>) -> Self {
        Self::with(Source::External(path.into()), None, script_type)
    }

    pub fn inline(javascript: impl Into<String>, script_type: Option<ScriptType>) -> Self {
        Self::with(Source::Inline(javascript.into()), None, script_type)
    }

    /// Return a copy whose external path has `component` prepended.
    /// Inline scripts are returned unchanged.
    pub fn prefixed(&self, component: &str) -> Self {
        let mut script = self.clone();
        if let Source::External(path) = &mut script.source {
            path.prepend_component(component);
        }
        script
    }

    /// The element's attributes in render order: `type`, `src`, then the
    /// loading flag.
    pub fn attributes(&self) -> AttributeSet {
        let mut attributes = AttributeSet::new();

        if let Some(script_type) = &self.script_type {
            attributes = attributes.attribute(script_type);
        }

        if let Source::External(path) = &self.source {
            attributes = attributes.set(Attribute::new("src", path.absolute_string()));
            attributes = match self.loading_behavior {
                Some(LoadingBehavior::Async) => attributes.set(Attribute::flag("async")),
                Some(LoadingBehavior::Deferred) => attributes.set(Attribute::flag("defer")),
                None => attributes,
            };
        }

        attributes
    }

    /// Render the element. Inline code is written as-is.
    pub fn to_html(&self) -> String {
        let body = match &self.source {
            Source::Inline(code) => code.as_str(),
            Source::External(_) => "",
        };
        format!("<script{}>{}</script>", self.attributes().render(), body)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
