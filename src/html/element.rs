//! Container elements and image assets

use super::attribute::{Attribute, AttributeSet};
use crate::path::SitePath;
use std::fmt;

/// Body-level container tags with no dedicated builder elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerTag {
    /// `<address>`
    Address,
    /// `<hgroup>`
    HeaderGroup,
    /// `<i>`
    Idiomatic,
    /// `<main>`
    Main,
    /// `<search>`
    Search,
}

impl ContainerTag {
    pub fn name(self) -> &'static str {
        match self {
            ContainerTag::Address => "address",
            ContainerTag::HeaderGroup => "hgroup",
            ContainerTag::Idiomatic => "i",
            ContainerTag::Main => "main",
            ContainerTag::Search => "search",
        }
    }
}

/// A container element wrapping already-rendered children.
///
/// ```
/// use site_extras::html::{AttributeSet, ContainerTag, Element};
///
/// let main = Element::new(ContainerTag::Main)
///     .attributes(AttributeSet::new().class("content"))
///     .child("<p>Hello</p>");
/// assert_eq!(main.to_html(), r#"<main class="content"><p>Hello</p></main>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: ContainerTag,
    attributes: AttributeSet,
    children: Vec<String>,
}

impl Element {
    pub fn new(tag: ContainerTag) -> Self {
        Self { tag, attributes: AttributeSet::new(), children: Vec::new() }
    }

    pub fn attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }

    /// Append a child. The HTML is inserted as-is.
    pub fn child(mut self, html: impl Into<String>) -> Self {
        self.children.push(html.into());
        self
    }

    pub fn to_html(&self) -> String {
        let name = self.tag.name();
        format!("<{name}{}>{}</{name}>", self.attributes.render(), self.children.concat())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// An image defined apart from the page that shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub url: SitePath,
    /// Alternative text. Missing text renders as `alt=""`.
    pub description: Option<String>,
}

impl ImageAsset {
    pub fn new(url: impl Into<SitePath>, description: Option<String>) -> Self {
        Self { url: url.into(), description }
    }

    pub fn to_html(&self) -> String {
        let attributes = AttributeSet::new()
            .set(Attribute::new("src", self.url.absolute_string()))
            .set(Attribute::new("alt", self.description.clone().unwrap_or_default()).keep_empty());
        format!("<img{}/>", attributes.render())
    }
}
