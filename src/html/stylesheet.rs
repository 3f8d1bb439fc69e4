//! Style sheets collected from element trees.
//!
//! A sheet maps selectors to property maps. Merging the same selector twice
//! keeps the first position and lets later properties overwrite earlier ones.

use std::fmt;

use indexmap::IndexMap;

use crate::html::style::StyleMap;

/// How a selector name is qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    Class,
    Id,
    Tag,
}

impl SelectorKind {
    fn prefix(self) -> &'static str {
        match self {
            SelectorKind::Class => ".",
            SelectorKind::Id => "#",
            SelectorKind::Tag => "",
        }
    }
}

/// A simple CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    pub kind: SelectorKind,
    pub name: String,
}

impl Selector {
    pub fn class(name: impl Into<String>) -> Self {
        Self { kind: SelectorKind::Class, name: name.into() }
    }

    pub fn id(name: impl Into<String>) -> Self {
        Self { kind: SelectorKind::Id, name: name.into() }
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self { kind: SelectorKind::Tag, name: name.into() }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.name)
    }
}

/// Selector → properties, plus nested `@media` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: IndexMap<Selector, StyleMap>,
    media: IndexMap<String, StyleSheet>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `styles` into the rule for `selector`.
    pub fn merge(&mut self, selector: Selector, styles: &StyleMap) -> &mut Self {
        self.rules.entry(selector).or_default().merge(styles);
        self
    }

    /// Merge `styles` into `selector` inside `@media {query}`.
    pub fn merge_media(&mut self, query: &str, selector: Selector, styles: &StyleMap) -> &mut Self {
        self.media
            .entry(query.to_string())
            .or_default()
            .merge(selector, styles);
        self
    }

    /// Merge every rule of `other` into this sheet.
    pub fn extend(&mut self, other: &StyleSheet) -> &mut Self {
        for (selector, styles) in &other.rules {
            self.merge(selector.clone(), styles);
        }
        for (query, sheet) in &other.media {
            self.media.entry(query.clone()).or_default().extend(sheet);
        }
        self
    }

    pub fn get(&self, selector: &Selector) -> Option<&StyleMap> {
        self.rules.get(selector)
    }

    pub fn media(&self, query: &str) -> Option<&StyleSheet> {
        self.media.get(query)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.rules.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.media.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Render as CSS text: one `selector {\n\tprop:value;\n}\n` block per rule.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (selector, styles) in &self.rules {
            css.push_str(&format!("{} {{\n{}}}\n", selector, styles.to_block()));
        }
        for (query, sheet) in &self.media {
            css.push_str(&format!("@media {} {{\n{}}}\n", query, sheet.to_css()));
        }
        css
    }

    /// Wrap [`Self::to_css`] in a `<style>` element.
    pub fn to_style_tag(&self) -> String {
        format!("<style>\n{}</style>", self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_prefixes() {
        assert_eq!(Selector::class("card").to_string(), ".card");
        assert_eq!(Selector::id("main").to_string(), "#main");
        assert_eq!(Selector::tag("body").to_string(), "body");
    }

    #[test]
    fn test_merge_same_selector() {
        let mut sheet = StyleSheet::new();
        sheet.merge(Selector::class("a"), &StyleMap::parse("color: red; margin: 0"));
        sheet.merge(Selector::class("b"), &StyleMap::parse("color: green"));
        sheet.merge(Selector::class("a"), &StyleMap::parse("color: blue"));

        assert_eq!(sheet.len(), 2);
        assert_eq!(
            sheet.to_css(),
            ".a {\n\tcolor:blue;\n\tmargin:0;\n}\n.b {\n\tcolor:green;\n}\n"
        );
    }

    #[test]
    fn test_media_blocks_render_last() {
        let mut sheet = StyleSheet::new();
        sheet.merge_media(
            "(max-width: 768px)",
            Selector::class("row"),
            &StyleMap::parse("flex-direction: column"),
        );
        sheet.merge(Selector::class("row"), &StyleMap::parse("display: flex"));

        assert_eq!(
            sheet.to_css(),
            ".row {\n\tdisplay:flex;\n}\n\
             @media (max-width: 768px) {\n.row {\n\tflex-direction:column;\n}\n}\n"
        );
    }

    #[test]
    fn test_extend() {
        let mut a = StyleSheet::new();
        a.merge(Selector::tag("body"), &StyleMap::parse("margin: 0"));
        let mut b = StyleSheet::new();
        b.merge(Selector::tag("body"), &StyleMap::parse("padding: 0"));
        a.extend(&b);
        assert_eq!(
            a.get(&Selector::tag("body")).unwrap().to_inline(),
            "margin:0; padding:0;"
        );
    }
}
