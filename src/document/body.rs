//! The `<body>` section.

use crate::document::script::Script;
use crate::html::attributes::Attributes;
use crate::html::node::{Child, Renderable, INDENT};
use crate::html::style::StyleMap;
use crate::html::stylesheet::{Selector, StyleSheet};

#[derive(Debug, Default)]
pub struct Body {
    children: Vec<Child>,
    scripts: Vec<Script>,
    attributes: Attributes,
    styles: StyleMap,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn add_element(&mut self, child: impl Into<Child>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Append markup verbatim.
    pub fn add_raw_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.children.push(Child::Text(html.into()));
        self
    }

    /// Script placed after the content, before `</body>`.
    pub fn add_script(&mut self, script: Script) -> &mut Self {
        self.scripts.push(script);
        self
    }

    /// Inline background color and/or cover image.
    pub fn set_background(&mut self, color: Option<&str>, image: Option<&str>) -> &mut Self {
        let style = self.attributes.style_mut();
        if let Some(color) = color {
            style.set_background_color(color);
        }
        if let Some(image) = image {
            style
                .set_background_image(format!("url(\"{image}\")"))
                .set("background-size", "cover")
                .set("background-position", "center");
        }
        self
    }

    /// Properties collected under the `body` selector.
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleMap {
        &mut self.styles
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.scripts.is_empty()
    }
}

impl Renderable for Body {
    fn render_at(&self, _depth: usize) -> String {
        let attrs = self.attributes.to_attribute_string();
        let mut out = if attrs.is_empty() {
            "<body>".to_string()
        } else {
            format!("<body {attrs}>")
        };
        if self.is_empty() {
            out.push_str("</body>");
            return out;
        }
        for child in &self.children {
            out.push('\n');
            out.push_str(INDENT);
            out.push_str(&child.render_at(1));
        }
        for script in &self.scripts {
            out.push('\n');
            out.push_str(INDENT);
            out.push_str(&script.render());
        }
        out.push_str("\n</body>");
        out
    }

    fn collect_styles_into(&self, sheet: &mut StyleSheet) {
        if !self.styles.is_empty() {
            sheet.merge(Selector::tag("body"), &self.styles);
        }
        for child in &self.children {
            child.collect_styles_into(sheet);
        }
    }

    fn object_name(&self) -> &str {
        "Body"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::element::Element;

    #[test]
    fn test_empty_body() {
        assert_eq!(Body::new().render(), "<body></body>");
    }

    #[test]
    fn test_children_then_scripts() {
        let mut body = Body::new().with_element(Element::paragraph("Hi"));
        body.add_raw_html("<hr>").add_script(Script::src("/app.js"));
        assert_eq!(
            body.render(),
            "<body>\n\
             \x20   <p class=\"ParagraphElement\">Hi</p>\n\
             \x20   <hr>\n\
             \x20   <script src=\"/app.js\"></script>\n\
             </body>"
        );
    }

    #[test]
    fn test_background_is_inline() {
        let mut body = Body::new();
        body.set_background(Some("#eee"), None);
        assert_eq!(body.render(), "<body style=\"background-color:#eee;\"></body>");
    }

    #[test]
    fn test_body_styles_use_tag_selector() {
        let mut body = Body::new().with_element(Element::div().named("Box").with_styles("margin: 0"));
        body.styles_mut().set_margin("0").set_font_family("sans-serif");
        let sheet = body.collect_styles();
        assert_eq!(
            sheet.to_css(),
            "body {\n\tmargin:0;\n\tfont-family:sans-serif;\n}\n.Box {\n\tmargin:0;\n}\n"
        );
    }
}
