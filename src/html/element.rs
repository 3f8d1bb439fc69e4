//! Generic HTML element.
//!
//! # Responsibilities
//! - Own a tag, attributes, a style map for the generated sheet, and children
//! - Assign the object name (and its class) at construction
//! - Render itself and collect its styles without mutating anything

use crate::html::attributes::{AttributeError, AttributeName, Attributes, BooleanAttribute};
use crate::html::node::{impl_into_child, render_children, Child, Renderable};
use crate::html::style::StyleMap;
use crate::html::stylesheet::{Selector, StyleSheet};

/// Tags rendered without a closing tag.
pub const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag.to_ascii_lowercase().as_str())
}

/// One HTML tag with attributes and children.
#[derive(Debug)]
pub struct Element {
    tag: String,
    object_type: &'static str,
    object_name: String,
    self_closing: bool,
    attributes: Attributes,
    styles: StyleMap,
    children: Vec<Child>,
}

impl Element {
    /// Create an element of any tag. Void tags are detected automatically.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::typed(tag, "Element")
    }

    /// Create an element with a specific object type, which is also its
    /// default object name and first class.
    pub fn typed(tag: impl Into<String>, object_type: &'static str) -> Self {
        let tag = tag.into();
        let self_closing = is_void_tag(&tag);
        let mut attributes = Attributes::new();
        attributes.add_class(object_type);
        Self {
            tag,
            object_type,
            object_name: object_type.to_string(),
            self_closing,
            attributes,
            styles: StyleMap::new(),
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::typed("div", "DivElement")
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::typed("p", "ParagraphElement").with_text(text)
    }

    /// `<h1>`..`<h6>`; levels outside 1..=6 are clamped.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        let level = level.clamp(1, 6);
        Self::typed(format!("h{level}"), "HeadingElement").with_text(text)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::typed("button", "ButtonElement").with_text(text)
    }

    /// `<a>` with `target="_self"`.
    pub fn anchor(href: impl Into<String>, text: impl Into<String>) -> Self {
        let mut el = Self::typed("a", "AnchorElement").with_text(text);
        el.attributes
            .set(AttributeName::Href, href)
            .set(AttributeName::Target, "_self");
        el
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        let mut el = Self::typed("img", "ImageElement");
        el.attributes
            .set(AttributeName::Src, src)
            .set(AttributeName::Alt, alt);
        el
    }

    /// `<label>`, optionally bound to a control id.
    pub fn label(for_id: Option<&str>, text: impl Into<String>) -> Self {
        let mut el = Self::typed("label", "LabelElement").with_text(text);
        if let Some(id) = for_id {
            el.attributes.set(AttributeName::For, id);
        }
        el
    }

    /// `<form>` container.
    pub fn form(action: impl Into<String>, method: impl Into<String>) -> Self {
        let mut el = Self::typed("form", "FormElement");
        el.attributes
            .set(AttributeName::Action, action)
            .set(AttributeName::Method, method);
        el
    }

    pub fn section() -> Self {
        Self::typed("section", "SectionElement")
    }

    pub fn article() -> Self {
        Self::typed("article", "ArticleElement")
    }

    pub fn aside() -> Self {
        Self::typed("aside", "AsideElement")
    }

    pub fn header() -> Self {
        Self::typed("header", "HeaderElement")
    }

    pub fn footer() -> Self {
        Self::typed("footer", "FooterElement")
    }

    pub fn nav() -> Self {
        Self::typed("nav", "NavElement")
    }

    // ----- builder -----

    /// Set the object name. The previous name's class is replaced.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.rename(name);
        self
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.attributes.replace_class(&self.object_name, &name);
        self.object_name = name;
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Child::Text(text));
        }
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.attributes.add_class(class);
        self
    }

    /// Keyword-style attribute; see [`Attributes::set_any`].
    pub fn with_attr(mut self, key: &str, value: &str) -> Result<Self, AttributeError> {
        self.attributes.set_any(key, value)?;
        Ok(self)
    }

    pub fn with_flag(mut self, flag: BooleanAttribute) -> Self {
        self.attributes.set_flag(flag);
        self
    }

    /// Inline `style` attribute declarations.
    pub fn with_inline_style(mut self, declarations: &str) -> Self {
        self.attributes.style_mut().extend_from_str(declarations);
        self
    }

    /// Declarations for this element's rule in the generated style sheet.
    pub fn with_styles(mut self, declarations: &str) -> Self {
        self.styles.extend_from_str(declarations);
        self
    }

    // ----- accessors -----

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn object_type(&self) -> &'static str {
        self.object_type
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Style sheet properties (not the inline `style` attribute).
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleMap {
        &mut self.styles
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn add_child(&mut self, child: impl Into<Child>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn insert_child(&mut self, index: usize, child: impl Into<Child>) -> &mut Self {
        let index = index.min(self.children.len());
        self.children.insert(index, child.into());
        self
    }

    /// Remove the child at `index`, if it exists.
    pub fn remove_child(&mut self, index: usize) -> Option<Child> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn clear_children(&mut self) -> &mut Self {
        self.children.clear();
        self
    }

    pub(crate) fn open_tag(&self) -> String {
        let attrs = self.attributes.to_attribute_string();
        if attrs.is_empty() {
            format!("<{}>", self.tag)
        } else {
            format!("<{} {}>", self.tag, attrs)
        }
    }

    pub(crate) fn close_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

impl Renderable for Element {
    fn render_at(&self, depth: usize) -> String {
        let open = self.open_tag();
        if self.self_closing {
            return open;
        }
        render_children(&open, &self.close_tag(), &self.children, depth)
    }

    fn collect_styles_into(&self, sheet: &mut StyleSheet) {
        if !self.styles.is_empty() {
            sheet.merge(Selector::class(&self.object_name), &self.styles);
        }
        for child in &self.children {
            child.collect_styles_into(sheet);
        }
    }

    fn object_name(&self) -> &str {
        &self.object_name
    }
}

impl_into_child!(Element);
