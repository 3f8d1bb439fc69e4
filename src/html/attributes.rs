//! Attribute storage and serialization.
//!
//! # Responsibilities
//! - Hold the class list, inline style, event handlers, boolean flags,
//!   `data-*`/`aria-*` pairs and named value attributes of one element
//! - Reject attribute names outside the recognized tables when they are set
//! - Serialize in a fixed group order
//!
//! # Design Decisions
//! - Group order is class, style, events, booleans, data, aria, values
//! - Insertion order is preserved inside every group
//! - Values are escaped for double-quoted attribute syntax

use indexmap::IndexMap;
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

use crate::html::events::Event;
use crate::html::style::StyleMap;

/// Errors raised while configuring element attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The name is not in any of the recognized attribute tables.
    #[error("Unknown attribute '{0}'")]
    UnknownAttribute(String),
}

/// Named attributes that carry a value (`name="value"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AttributeName {
    Id,
    Name,
    Title,
    Lang,
    Dir,
    Translate,
    Href,
    Src,
    Srcset,
    Sizes,
    Poster,
    Action,
    Formaction,
    Width,
    Height,
    Size,
    Value,
    Placeholder,
    Pattern,
    Min,
    Max,
    Step,
    Maxlength,
    Minlength,
    Charset,
    Content,
    #[strum(to_string = "http-equiv", serialize = "http_equiv")]
    HttpEquiv,
    Property,
    Colspan,
    Rowspan,
    Headers,
    Scope,
    Start,
    List,
    Form,
    Srcdoc,
    Sandbox,
    Allow,
    Preload,
    Crossorigin,
    Usemap,
    Accept,
    Integrity,
    Nonce,
    Accesskey,
    Tabindex,
    Inputmode,
    Enterkeyhint,
    Referrerpolicy,
    Align,
    Bgcolor,
    Border,
    Cellpadding,
    Cellspacing,
    Frame,
    Rules,
    Summary,
    Valign,
    Type,
    Alt,
    For,
    Target,
    Rel,
    Media,
    Method,
    Enctype,
    Autocomplete,
    Role,
    Rows,
    Cols,
    Wrap,
    Loading,
    Decoding,
    #[strum(to_string = "as", serialize = "as_")]
    As,
}

/// Attributes whose presence alone means `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BooleanAttribute {
    Hidden,
    Inert,
    Required,
    Disabled,
    Readonly,
    Checked,
    Selected,
    Multiple,
    Autofocus,
    Formnovalidate,
    Controls,
    Autoplay,
    Loop,
    Muted,
    Playsinline,
    Ismap,
    Reversed,
    Open,
    Contenteditable,
    Draggable,
    Spellcheck,
    Allowfullscreen,
    #[strum(to_string = "async", serialize = "async_")]
    Async,
    Defer,
    Popover,
    Nowrap,
}

impl AttributeName {
    /// Parse a recognized attribute name.
    pub fn parse(name: &str) -> Result<Self, AttributeError> {
        name.parse()
            .map_err(|_| AttributeError::UnknownAttribute(name.to_string()))
    }
}

impl BooleanAttribute {
    /// Parse a recognized boolean attribute name.
    pub fn parse(name: &str) -> Result<Self, AttributeError> {
        name.parse()
            .map_err(|_| AttributeError::UnknownAttribute(name.to_string()))
    }
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn normalize_key(key: &str) -> String {
    key.replace('_', "-")
}

/// Validate a `data-*`/`aria-*` suffix: non-empty, lowercase ASCII
/// alphanumerics, `-` and `_`.
fn custom_key(prefix: &str, key: &str) -> Result<String, AttributeError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        return Err(AttributeError::UnknownAttribute(format!("{prefix}-{key}")));
    }
    Ok(normalize_key(key))
}

/// The full attribute set of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    classes: Vec<String>,
    style: StyleMap,
    events: IndexMap<Event, String>,
    flags: Vec<BooleanAttribute>,
    data: IndexMap<String, String>,
    aria: IndexMap<String, String>,
    values: IndexMap<AttributeName, String>,
}

impl Attributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyword-style setter.
    ///
    /// Routes `class`, `style`, `data_*`, `aria_*`, `on*`, boolean names and
    /// value names to their group. Boolean names ignore `value`.
    pub fn set_any(&mut self, key: &str, value: &str) -> Result<&mut Self, AttributeError> {
        if key == "class" || key == "class_" {
            for class in value.split_whitespace() {
                self.add_class(class);
            }
        } else if key == "style" {
            self.style.extend_from_str(value);
        } else if let Some(rest) = key.strip_prefix("data_").or_else(|| key.strip_prefix("data-")) {
            self.add_data(rest, value)?;
        } else if let Some(rest) = key.strip_prefix("aria_").or_else(|| key.strip_prefix("aria-")) {
            self.add_aria(rest, value)?;
        } else if key.starts_with("on") {
            self.add_event(key, value)?;
        } else if let Ok(flag) = BooleanAttribute::parse(key) {
            self.set_flag(flag);
        } else {
            self.set(AttributeName::parse(key)?, value);
        }
        Ok(self)
    }

    // ----- classes -----

    /// Add a class if it is not already present.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        self.classes.retain(|c| c != class);
        self
    }

    /// Replace `old` with `new` in place, or prepend `new` when `old` is absent.
    pub fn replace_class(&mut self, old: &str, new: &str) -> &mut Self {
        self.classes.retain(|c| c != new);
        match self.classes.iter().position(|c| c == old) {
            Some(index) => self.classes[index] = new.to_string(),
            None => self.classes.insert(0, new.to_string()),
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    // ----- inline style -----

    /// Inline `style` attribute.
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut StyleMap {
        &mut self.style
    }

    // ----- events -----

    /// Attach an inline event handler. The name must be a recognized event.
    pub fn add_event(&mut self, name: &str, handler: &str) -> Result<&mut Self, AttributeError> {
        let event: Event = name
            .parse()
            .map_err(|_| AttributeError::UnknownAttribute(name.to_string()))?;
        self.events.insert(event, handler.to_string());
        Ok(self)
    }

    pub fn remove_event(&mut self, event: Event) -> &mut Self {
        self.events.shift_remove(&event);
        self
    }

    // ----- boolean flags -----

    pub fn set_flag(&mut self, flag: BooleanAttribute) -> &mut Self {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self
    }

    pub fn remove_flag(&mut self, flag: BooleanAttribute) -> &mut Self {
        self.flags.retain(|f| *f != flag);
        self
    }

    pub fn has_flag(&self, flag: BooleanAttribute) -> bool {
        self.flags.contains(&flag)
    }

    // ----- data-* / aria-* -----

    /// Set a `data-*` attribute. `user_id` is written as `data-user-id`.
    pub fn add_data(&mut self, key: &str, value: &str) -> Result<&mut Self, AttributeError> {
        let key = custom_key("data", key)?;
        self.data.insert(key, value.to_string());
        Ok(self)
    }

    pub fn remove_data(&mut self, key: &str) -> &mut Self {
        self.data.shift_remove(&normalize_key(key));
        self
    }

    /// Set an `aria-*` attribute.
    pub fn add_aria(&mut self, key: &str, value: &str) -> Result<&mut Self, AttributeError> {
        let key = custom_key("aria", key)?;
        self.aria.insert(key, value.to_string());
        Ok(self)
    }

    pub fn remove_aria(&mut self, key: &str) -> &mut Self {
        self.aria.shift_remove(&normalize_key(key));
        self
    }

    // ----- named values -----

    pub fn set(&mut self, name: AttributeName, value: impl Into<String>) -> &mut Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn get(&self, name: AttributeName) -> Option<&str> {
        self.values.get(&name).map(String::as_str)
    }

    pub fn remove(&mut self, name: AttributeName) -> &mut Self {
        self.values.shift_remove(&name);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.style.is_empty()
            && self.events.is_empty()
            && self.flags.is_empty()
            && self.data.is_empty()
            && self.aria.is_empty()
            && self.values.is_empty()
    }

    /// Serialize to the text that goes between the tag name and `>`.
    pub fn to_attribute_string(&self) -> String {
        let mut attrs: Vec<String> = Vec::new();

        if !self.classes.is_empty() {
            attrs.push(format!("class=\"{}\"", escape_attribute(&self.classes.join(" "))));
        }
        if !self.style.is_empty() {
            attrs.push(format!("style=\"{}\"", escape_attribute(&self.style.to_inline())));
        }
        for (event, handler) in &self.events {
            attrs.push(format!("{}=\"{}\"", event, escape_attribute(handler)));
        }
        for flag in &self.flags {
            attrs.push(flag.to_string());
        }
        for (key, value) in &self.data {
            attrs.push(format!("data-{}=\"{}\"", key, escape_attribute(value)));
        }
        for (key, value) in &self.aria {
            attrs.push(format!("aria-{}=\"{}\"", key, escape_attribute(value)));
        }
        for (name, value) in &self.values {
            attrs.push(format!("{}=\"{}\"", name, escape_attribute(value)));
        }

        attrs.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_group_order() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeName::Id, "main");
        attrs.add_aria("label", "Main block").unwrap();
        attrs.add_data("user_id", "42").unwrap();
        attrs.set_flag(BooleanAttribute::Hidden);
        attrs.add_event("onclick", "go()").unwrap();
        attrs.style_mut().set("color", "red");
        attrs.add_class("card");

        assert_eq!(
            attrs.to_attribute_string(),
            "class=\"card\" style=\"color:red;\" onclick=\"go()\" hidden \
             data-user-id=\"42\" aria-label=\"Main block\" id=\"main\""
        );
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let mut attrs = Attributes::new();
        let err = attrs.set_any("frobnicate", "1").unwrap_err();
        assert_eq!(err, AttributeError::UnknownAttribute("frobnicate".into()));
        assert_eq!(err.to_string(), "Unknown attribute 'frobnicate'");

        assert!(attrs.set_any("onexplode", "x()").is_err());
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_custom_keys_validated() {
        let mut attrs = Attributes::new();
        assert_eq!(
            attrs.set_any("data_x\" onmouseover=\"alert(1)", "v").unwrap_err(),
            AttributeError::UnknownAttribute("data-x\" onmouseover=\"alert(1)".into())
        );
        assert_eq!(
            attrs.set_any("aria_", "e").unwrap_err(),
            AttributeError::UnknownAttribute("aria-".into())
        );
        assert!(attrs.add_data("has space", "1").is_err());
        assert!(attrs.add_data("a>b", "1").is_err());
        assert!(attrs.add_aria("Label", "1").is_err());
        assert!(attrs.add_aria("x=y", "1").is_err());
        assert!(attrs.is_empty());

        attrs.add_data("row-2_id", "7").unwrap();
        assert_eq!(attrs.to_attribute_string(), "data-row-2-id=\"7\"");
    }

    #[test]
    fn test_set_any_routes_keys() {
        let mut attrs = Attributes::new();
        attrs.set_any("class", "btn primary").unwrap();
        attrs.set_any("style", "margin: 0; padding: 4px").unwrap();
        attrs.set_any("data_test", "v").unwrap();
        attrs.set_any("aria-hidden", "true").unwrap();
        attrs.set_any("onchange", "update()").unwrap();
        attrs.set_any("disabled", "").unwrap();
        attrs.set_any("http_equiv", "refresh").unwrap();

        assert_eq!(attrs.classes(), &["btn".to_string(), "primary".to_string()]);
        assert_eq!(attrs.style().get("padding"), Some("4px"));
        assert!(attrs.has_flag(BooleanAttribute::Disabled));
        assert_eq!(attrs.get(AttributeName::HttpEquiv), Some("refresh"));
        assert!(attrs.to_attribute_string().contains("http-equiv=\"refresh\""));
        assert!(attrs.to_attribute_string().contains("data-test=\"v\""));
        assert!(attrs.to_attribute_string().contains("aria-hidden=\"true\""));
    }

    #[test]
    fn test_add_then_remove_leaves_no_trace() {
        let mut attrs = Attributes::new();
        attrs.add_class("a");
        attrs.set(AttributeName::Title, "kept");
        let before = attrs.to_attribute_string();

        attrs.add_class("b");
        attrs.add_data("x", "1").unwrap();
        attrs.add_aria("y", "2").unwrap();
        attrs.add_event("onclick", "f()").unwrap();
        attrs.set_flag(BooleanAttribute::Checked);
        attrs.set(AttributeName::Href, "/gone");
        attrs.style_mut().set("width", "1px");

        attrs.remove_class("b");
        attrs.remove_data("x");
        attrs.remove_aria("y");
        attrs.remove_event(Event::OnClick);
        attrs.remove_flag(BooleanAttribute::Checked);
        attrs.remove(AttributeName::Href);
        attrs.style_mut().remove("width");

        let after = attrs.to_attribute_string();
        assert_eq!(after, before);
        assert_eq!(after, "class=\"a\" title=\"kept\"");
    }

    #[test]
    fn test_replace_class() {
        let mut attrs = Attributes::new();
        attrs.add_class("ParagraphElement").add_class("lead");
        attrs.replace_class("ParagraphElement", "Intro");
        assert_eq!(attrs.classes(), &["Intro".to_string(), "lead".to_string()]);

        attrs.replace_class("missing", "Other");
        assert_eq!(attrs.classes()[0], "Other");
    }

    #[test]
    fn test_values_escaped() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeName::Href, "/search?q=a&b=\"c\"");
        assert_eq!(
            attrs.to_attribute_string(),
            "href=\"/search?q=a&amp;b=&quot;c&quot;\""
        );
    }

    #[test]
    fn test_keyword_spellings() {
        assert_eq!(AttributeName::parse("as").unwrap(), AttributeName::As);
        assert_eq!(AttributeName::As.to_string(), "as");
        assert_eq!(BooleanAttribute::parse("async").unwrap(), BooleanAttribute::Async);
        assert_eq!(BooleanAttribute::Async.to_string(), "async");
    }
}
