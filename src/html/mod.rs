//! Small HTML fragments: attributes, form values, containers, images,
//! scripts and GTM snippets
//!
//! These render standalone strings. Building full documents is left to the
//! site generator.

pub mod attribute;
pub mod element;
pub mod forms;
pub mod gtm;
pub mod script;

pub use attribute::{escape_attribute, Attribute, AttributeConvertible, AttributeSet};
pub use element::{ContainerTag, Element, ImageAsset};
pub use forms::{Autocomplete, InputPattern};
pub use gtm::{gtm_body_snippet, GtmConfiguration};
pub use script::{LoadingBehavior, Script, ScriptType, Source};
