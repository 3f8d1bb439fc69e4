//! The `<head>` section.
//!
//! # Render order
//! title, meta tags, links (with `<base>` in insertion order), inline
//! `<style>` blocks, scripts. Each item sits on its own line, indented one
//! level under `<head>`.

use crate::document::script::Script;
use crate::html::attributes::{escape_attribute, AttributeError, AttributeName, Attributes};
use crate::html::node::{Renderable, INDENT};
use crate::html::stylesheet::StyleSheet;

/// A `<meta>` tag: validated attribute/value pairs in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta(Vec<(AttributeName, String)>);

impl Meta {
    pub fn new(pairs: &[(&str, &str)]) -> Result<Self, AttributeError> {
        let pairs = pairs
            .iter()
            .map(|(k, v)| Ok((AttributeName::parse(k)?, (*v).to_string())))
            .collect::<Result<Vec<_>, AttributeError>>()?;
        Ok(Self(pairs))
    }

    pub fn get(&self, name: AttributeName) -> Option<&str> {
        self.0.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    fn render(&self) -> String {
        let attrs: Vec<String> = self
            .0
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_attribute(v)))
            .collect();
        format!("<meta {}>", attrs.join(" "))
    }
}

/// Entry in the link list. `<base>` lives here so it keeps its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadLink {
    Link {
        rel: String,
        href: String,
        extra: Vec<(AttributeName, String)>,
    },
    Base {
        href: String,
        target: String,
    },
}

impl HeadLink {
    fn render(&self) -> String {
        match self {
            HeadLink::Link { rel, href, extra } => {
                let mut out = format!(
                    "<link rel=\"{}\" href=\"{}\"",
                    escape_attribute(rel),
                    escape_attribute(href)
                );
                for (k, v) in extra {
                    out.push_str(&format!(" {}=\"{}\"", k, escape_attribute(v)));
                }
                out.push('>');
                out
            }
            HeadLink::Base { href, target } => format!(
                "<base href=\"{}\" target=\"{}\">",
                escape_attribute(href),
                escape_attribute(target)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    title: String,
    metas: Vec<Meta>,
    links: Vec<HeadLink>,
    styles: Vec<String>,
    scripts: Vec<Script>,
    attributes: Attributes,
}

impl Head {
    /// Head with a title plus the default charset and viewport metas.
    pub fn new(title: impl Into<String>) -> Self {
        let metas = vec![
            Meta(vec![(AttributeName::Charset, "UTF-8".to_string())]),
            Meta(vec![
                (AttributeName::Name, "viewport".to_string()),
                (
                    AttributeName::Content,
                    "width=device-width, initial-scale=1.0".to_string(),
                ),
            ]),
        ];
        Self {
            title: title.into(),
            metas,
            links: Vec::new(),
            styles: Vec::new(),
            scripts: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Add a meta tag, e.g. `&[("name", "description"), ("content", "…")]`.
    pub fn add_meta(&mut self, pairs: &[(&str, &str)]) -> Result<&mut Self, AttributeError> {
        self.metas.push(Meta::new(pairs)?);
        Ok(self)
    }

    pub fn metas(&self) -> &[Meta] {
        &self.metas
    }

    /// Add a `<link>` with extra validated attributes.
    pub fn add_link(
        &mut self,
        rel: &str,
        href: &str,
        extra: &[(&str, &str)],
    ) -> Result<&mut Self, AttributeError> {
        let extra = extra
            .iter()
            .map(|(k, v)| Ok((AttributeName::parse(k)?, (*v).to_string())))
            .collect::<Result<Vec<_>, AttributeError>>()?;
        self.links.push(HeadLink::Link {
            rel: rel.to_string(),
            href: href.to_string(),
            extra,
        });
        Ok(self)
    }

    fn push_link(&mut self, rel: &str, href: &str, extra: Vec<(AttributeName, String)>) -> &mut Self {
        self.links.push(HeadLink::Link {
            rel: rel.to_string(),
            href: href.to_string(),
            extra,
        });
        self
    }

    /// Stylesheet link with `media="all"`.
    pub fn add_stylesheet(&mut self, href: &str) -> &mut Self {
        self.push_link("stylesheet", href, vec![(AttributeName::Media, "all".to_string())])
    }

    pub fn add_icon(&mut self, href: &str, mime: &str) -> &mut Self {
        self.push_link("icon", href, vec![(AttributeName::Type, mime.to_string())])
    }

    pub fn add_preconnect(&mut self, url: &str) -> &mut Self {
        self.push_link("preconnect", url, Vec::new())
    }

    pub fn add_preload(&mut self, href: &str, as_type: &str) -> &mut Self {
        self.push_link("preload", href, vec![(AttributeName::As, as_type.to_string())])
    }

    /// Add a `<base>` tag. It renders among the links in insertion order.
    pub fn set_base(&mut self, href: &str, target: &str) -> &mut Self {
        self.links.push(HeadLink::Base {
            href: href.to_string(),
            target: target.to_string(),
        });
        self
    }

    pub fn links(&self) -> &[HeadLink] {
        &self.links
    }

    /// Whether a stylesheet link to `href` is present.
    pub fn has_stylesheet(&self, href: &str) -> bool {
        self.links.iter().any(|link| {
            matches!(link, HeadLink::Link { rel, href: h, .. } if rel == "stylesheet" && h == href)
        })
    }

    /// Inline CSS, rendered inside its own `<style>` block.
    pub fn add_style_css(&mut self, css: impl Into<String>) -> &mut Self {
        self.styles.push(css.into());
        self
    }

    /// Inline a collected style sheet.
    pub fn add_style_sheet(&mut self, sheet: &StyleSheet) -> &mut Self {
        if !sheet.is_empty() {
            self.styles.push(sheet.to_css());
        }
        self
    }

    pub fn add_script(&mut self, script: Script) -> &mut Self {
        self.scripts.push(script);
        self
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn items(&self) -> Vec<String> {
        let mut items = Vec::new();
        if !self.title.is_empty() {
            items.push(format!("<title>{}</title>", self.title));
        }
        items.extend(self.metas.iter().map(Meta::render));
        items.extend(self.links.iter().map(HeadLink::render));
        for css in &self.styles {
            items.push(format!("<style>\n{}\n</style>", css.trim_end_matches('\n')));
        }
        items.extend(self.scripts.iter().map(Script::render));
        items
    }
}

impl Default for Head {
    fn default() -> Self {
        Self::new("")
    }
}

impl Renderable for Head {
    fn render_at(&self, _depth: usize) -> String {
        let attrs = self.attributes.to_attribute_string();
        let mut out = if attrs.is_empty() {
            "<head>".to_string()
        } else {
            format!("<head {attrs}>")
        };
        for item in self.items() {
            out.push('\n');
            out.push_str(INDENT);
            out.push_str(&item);
        }
        out.push_str("\n</head>");
        out
    }

    fn collect_styles_into(&self, _sheet: &mut StyleSheet) {}

    fn object_name(&self) -> &str {
        "Head"
    }
}
