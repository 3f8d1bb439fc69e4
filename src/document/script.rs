//! `<script>` tags for the head and the end of the body.

use crate::html::attributes::{AttributeError, AttributeName, Attributes, BooleanAttribute};

/// An external or inline script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    attributes: Attributes,
    content: Option<String>,
}

impl Script {
    /// External script loaded from `src`.
    pub fn src(src: impl Into<String>) -> Self {
        let mut script = Self::default();
        script.attributes.set(AttributeName::Src, src);
        script
    }

    /// Inline script body.
    pub fn inline(content: impl Into<String>) -> Self {
        Self {
            attributes: Attributes::new(),
            content: Some(content.into()),
        }
    }

    pub fn defer(mut self) -> Self {
        self.attributes.set_flag(BooleanAttribute::Defer);
        self
    }

    pub fn async_load(mut self) -> Self {
        self.attributes.set_flag(BooleanAttribute::Async);
        self
    }

    /// Mark as an ES module (`type="module"`).
    pub fn module(mut self) -> Self {
        self.attributes.set(AttributeName::Type, "module");
        self
    }

    /// Any other whitelisted attribute, e.g. `integrity` or `nonce`.
    pub fn with_attr(mut self, key: &str, value: &str) -> Result<Self, AttributeError> {
        self.attributes.set_any(key, value)?;
        Ok(self)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn render(&self) -> String {
        let attrs = self.attributes.to_attribute_string();
        let open = if attrs.is_empty() {
            "<script>".to_string()
        } else {
            format!("<script {attrs}>")
        };
        match &self.content {
            Some(content) => format!("{open}\n{content}\n</script>"),
            None => format!("{open}</script>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_deferred() {
        let script = Script::src("/app.js").defer();
        assert_eq!(script.render(), "<script defer src=\"/app.js\"></script>");
    }

    #[test]
    fn test_inline_module_renders_twice_the_same() {
        let script = Script::inline("console.log(1);").module();
        let expected = "<script type=\"module\">\nconsole.log(1);\n</script>";
        assert_eq!(script.render(), expected);
        assert_eq!(script.render(), expected);
        assert_eq!(script.content(), Some("console.log(1);"));
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        assert!(Script::src("/a.js").with_attr("sauce", "x").is_err());
        assert!(Script::src("/a.js").with_attr("nonce", "abc").is_ok());
    }
}
