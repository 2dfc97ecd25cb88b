//! Element attributes and attribute builders

use super::forms::{Autocomplete, InputPattern};

/// A single HTML attribute.
///
/// Attributes without a value (`async`, `muted`) render as a bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
    /// Drop the attribute entirely when its value is empty.
    pub ignore_if_value_is_empty: bool,
}

impl Attribute {
    /// An attribute with a value. Empty values are not rendered.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: Some(value.into()), ignore_if_value_is_empty: true }
    }

    /// A boolean attribute with no value.
    pub fn flag(name: impl Into<String>) -> Self {
        Self { name: name.into(), value: None, ignore_if_value_is_empty: false }
    }

    /// Render the attribute even if its value is empty (`alt=""`).
    pub fn keep_empty(mut self) -> Self {
        self.ignore_if_value_is_empty = false;
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.ignore_if_value_is_empty && self.value.as_deref().is_some_and(str::is_empty)
    }

    /// Render with a leading space, ready to be placed inside a start tag.
    pub fn render(&self) -> String {
        if self.is_ignored() {
            return String::new();
        }
        match &self.value {
            Some(value) => format!(" {}=\"{}\"", self.name, escape_attribute(value)),
            None => format!(" {}", self.name),
        }
    }
}

/// Types that stand for one attribute with a restricted set of values.
pub trait AttributeConvertible {
    /// The attribute's name.
    const ATTRIBUTE_NAME: &'static str;

    /// The attribute's value.
    fn value(&self) -> String;

    fn attribute(&self) -> Attribute {
        Attribute::new(Self::ATTRIBUTE_NAME, self.value())
    }
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// An ordered list of attributes for one element.
///
/// Setting an attribute that already exists replaces its value, except for
/// `class`, where values accumulate separated by spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Add `attribute`, replacing any attribute with the same name.
    pub fn set(mut self, attribute: Attribute) -> Self {
        self.insert(attribute, true);
        self
    }

    /// Add `attribute`, appending its value to any existing one.
    pub fn append(mut self, attribute: Attribute) -> Self {
        self.insert(attribute, false);
        self
    }

    fn insert(&mut self, attribute: Attribute, replace_existing: bool) {
        let Some(existing) = self.attributes.iter_mut().find(|a| a.name == attribute.name) else {
            self.attributes.push(attribute);
            return;
        };

        if replace_existing {
            *existing = attribute;
            return;
        }

        existing.value = match (existing.value.take(), attribute.value) {
            (Some(old), Some(new)) if !old.is_empty() && !new.is_empty() => Some(format!("{old} {new}")),
            (Some(old), Some(new)) if new.is_empty() => Some(old),
            (_, new) => new,
        };
    }

    /// Add an attribute from its typed representation.
    pub fn attribute<R: AttributeConvertible>(self, representation: &R) -> Self {
        self.set(representation.attribute())
    }

    /// `aria-controls`: the id of the element this one controls.
    pub fn aria_controls(self, child: &str) -> Self {
        self.set(Attribute::new("aria-controls", child))
    }

    pub fn aria_expanded(self, is_expanded: bool) -> Self {
        self.set(Attribute::new("aria-expanded", bool_value(is_expanded)))
    }

    /// `aria-hidden`: removes the element from the accessibility tree.
    pub fn aria_hidden(self, is_hidden: bool) -> Self {
        self.set(Attribute::new("aria-hidden", bool_value(is_hidden)))
    }

    pub fn aria_label(self, label: &str) -> Self {
        self.set(Attribute::new("aria-label", label))
    }

    pub fn aria_modal(self, is_modal: bool) -> Self {
        self.set(Attribute::new("aria-modal", bool_value(is_modal)))
    }

    pub fn autocomplete(self, autocomplete: &Autocomplete) -> Self {
        self.attribute(autocomplete)
    }

    /// Add one or more space-separated class names.
    pub fn class(self, class_name: impl AsRef<str>) -> Self {
        self.append(Attribute::new("class", class_name.as_ref()))
    }

    /// Replace the class list.
    pub fn replace_class(self, class_name: impl AsRef<str>) -> Self {
        self.set(Attribute::new("class", class_name.as_ref()))
    }

    pub fn height(self, size: u32) -> Self {
        self.set(Attribute::new("height", size.to_string()))
    }

    pub fn name(self, name: &str) -> Self {
        self.set(Attribute::new("name", name))
    }

    pub fn onchange(self, javascript: &str) -> Self {
        self.set(Attribute::new("onchange", javascript))
    }

    pub fn onclick(self, javascript: &str) -> Self {
        self.set(Attribute::new("onclick", javascript))
    }

    pub fn onsubmit(self, javascript: &str) -> Self {
        self.set(Attribute::new("onsubmit", javascript))
    }

    pub fn pattern(self, pattern: &InputPattern) -> Self {
        self.attribute(pattern)
    }

    pub fn role(self, role: &str) -> Self {
        self.set(Attribute::new("role", role))
    }

    pub fn width(self, size: u32) -> Self {
        self.set(Attribute::new("width", size.to_string()))
    }

    /// `media` on a `<source>`: the media query it applies to.
    pub fn media(self, query: &str) -> Self {
        self.set(Attribute::new("media", query))
    }

    /// `type` on an `<object>`: the MIME type of the resource.
    pub fn mime_type(self, mime: &str) -> Self {
        self.set(Attribute::new("type", mime))
    }

    pub fn autoplay(self, enable: bool) -> Self {
        self.media_flag("autoplay", enable)
    }

    pub fn loop_media(self, enable: bool) -> Self {
        self.media_flag("loop", enable)
    }

    pub fn muted(self, enable: bool) -> Self {
        self.media_flag("muted", enable)
    }

    pub fn playsinline(self, enable: bool) -> Self {
        self.media_flag("playsinline", enable)
    }

    /// `poster` on a `<video>`: image shown until playback starts.
    pub fn poster(self, url: &str) -> Self {
        self.set(Attribute::new("poster", url))
    }

    fn media_flag(self, name: &str, enable: bool) -> Self {
        if enable {
            self.set(Attribute::flag(name))
        } else {
            self
        }
    }

    /// Render every attribute, each with a leading space.
    pub fn render(&self) -> String {
        self.attributes.iter().map(Attribute::render).collect()
    }
}

fn bool_value(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_values_and_flags() {
        assert_eq!(Attribute::new("role", "button").render(), " role=\"button\"");
        assert_eq!(Attribute::flag("defer").render(), " defer");
    }

    #[test]
    fn empty_values_are_dropped_unless_kept() {
        assert_eq!(Attribute::new("type", "").render(), "");
        assert_eq!(Attribute::new("alt", "").keep_empty().render(), " alt=\"\"");
    }

    #[test]
    fn escapes_attribute_values() {
        let rendered = Attribute::new("onclick", "say(\"a < b & c\")").render();
        assert_eq!(rendered, " onclick=\"say(&quot;a &lt; b &amp; c&quot;)\"");
    }

    #[test]
    fn classes_accumulate() {
        let attrs = AttributeSet::new().class("card").class("card--wide");
        assert_eq!(attrs.render(), " class=\"card card--wide\"");
    }

    #[test]
    fn replace_class_discards_previous() {
        let attrs = AttributeSet::new().class("card").replace_class("hero");
        assert_eq!(attrs.render(), " class=\"hero\"");
    }

    #[test]
    fn other_attributes_replace_in_place() {
        let attrs = AttributeSet::new().name("first").role("dialog").name("second");
        assert_eq!(attrs.render(), " name=\"second\" role=\"dialog\"");
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn aria_helpers_render_booleans() {
        let attrs = AttributeSet::new()
            .aria_controls("menu")
            .aria_expanded(false)
            .aria_hidden(true)
            .aria_modal(true)
            .aria_label("Main menu");
        assert_eq!(
            attrs.render(),
            " aria-controls=\"menu\" aria-expanded=\"false\" aria-hidden=\"true\" aria-modal=\"true\" aria-label=\"Main menu\""
        );
    }

    #[test]
    fn media_flags_only_render_when_enabled() {
        let attrs = AttributeSet::new()
            .autoplay(true)
            .loop_media(false)
            .muted(true)
            .playsinline(false)
            .poster("/poster.jpg");
        assert_eq!(attrs.render(), " autoplay muted poster=\"/poster.jpg\"");
    }

    #[test]
    fn sizes_and_handlers() {
        let attrs = AttributeSet::new().width(640).height(360).onchange("update()");
        assert_eq!(attrs.get("width").and_then(|a| a.value.as_deref()), Some("640"));
        assert_eq!(attrs.get("height").and_then(|a| a.value.as_deref()), Some("360"));
        assert!(attrs.get("onchange").is_some());
    }

    #[test]
    fn form_values_use_their_attribute_names() {
        let attrs = AttributeSet::new()
            .autocomplete(&Autocomplete::EMAIL)
            .pattern(&InputPattern::EMAIL);
        assert_eq!(attrs.get("autocomplete").and_then(|a| a.value.as_deref()), Some("email"));
        assert!(attrs.get("pattern").is_some());
    }
}
