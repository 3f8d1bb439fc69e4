//! Complete HTML documents.

use std::fmt;
use std::path::Path;

use strum_macros::{AsRefStr, EnumString};

use crate::document::body::Body;
use crate::document::head::Head;
use crate::html::attributes::{AttributeName, Attributes};
use crate::html::node::{Child, Renderable};
use crate::html::stylesheet::StyleSheet;

/// Document type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Doctype {
    #[default]
    Html,
    Html5,
    Xhtml,
    Strict,
    Transitional,
}

impl Doctype {
    pub fn declaration(self) -> &'static str {
        match self {
            Doctype::Html | Doctype::Html5 => "<!DOCTYPE html>",
            Doctype::Xhtml => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
                 \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">"
            }
            Doctype::Strict => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
                 \"http://www.w3.org/TR/html4/strict.dtd\">"
            }
            Doctype::Transitional => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \
                 \"http://www.w3.org/TR/html4/loose.dtd\">"
            }
        }
    }
}

/// One head, one body, and the `<html>` wrapper around them.
#[derive(Debug)]
pub struct Page {
    object_name: String,
    doctype: Doctype,
    head: Head,
    body: Body,
    attributes: Attributes,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            object_name: "Page".to_string(),
            doctype: Doctype::default(),
            head: Head::new(title),
            body: Body::new(),
            attributes: Attributes::new(),
            prefix: None,
            suffix: None,
        }
    }

    /// Name used for the generated stylesheet file.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.object_name = name.into();
        self
    }

    pub fn with_doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = doctype;
        self
    }

    pub fn with_language(mut self, lang: &str) -> Self {
        self.set_language(lang);
        self
    }

    pub fn set_language(&mut self, lang: &str) -> &mut Self {
        self.attributes.set(AttributeName::Lang, lang);
        self
    }

    pub fn with_element(mut self, child: impl Into<Child>) -> Self {
        self.body.add_element(child);
        self
    }

    pub fn add_element(&mut self, child: impl Into<Child>) -> &mut Self {
        self.body.add_element(child);
        self
    }

    /// Markup written before the doctype, e.g. a comment.
    pub fn set_prefix(&mut self, html: impl Into<String>) -> &mut Self {
        self.prefix = Some(html.into());
        self
    }

    /// Markup written after `</html>`.
    pub fn set_suffix(&mut self, html: impl Into<String>) -> &mut Self {
        self.suffix = Some(html.into());
        self
    }

    pub fn doctype(&self) -> Doctype {
        self.doctype
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Head {
        &mut self.head
    }

    pub fn set_head(&mut self, head: Head) -> &mut Self {
        self.head = head;
        self
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn set_body(&mut self, body: Body) -> &mut Self {
        self.body = body;
        self
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Write the rendered document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render())?;
        tracing::info!(path = %path.display(), page = %self.object_name, "Page saved");
        Ok(())
    }
}

impl Renderable for Page {
    fn render_at(&self, _depth: usize) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(7);
        if let Some(prefix) = &self.prefix {
            parts.push(prefix.clone());
        }
        parts.push(self.doctype.declaration().to_string());

        let attrs = self.attributes.to_attribute_string();
        if attrs.is_empty() {
            parts.push("<html>".to_string());
        } else {
            parts.push(format!("<html {attrs}>"));
        }
        parts.push(self.head.render());
        parts.push(self.body.render());
        parts.push("</html>".to_string());

        if let Some(suffix) = &self.suffix {
            parts.push(suffix.clone());
        }
        parts.join("\n")
    }

    fn collect_styles_into(&self, sheet: &mut StyleSheet) {
        self.head.collect_styles_into(sheet);
        self.body.collect_styles_into(sheet);
    }

    fn object_name(&self) -> &str {
        &self.object_name
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
