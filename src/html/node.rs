//! The render interface shared by every node type.

use std::fmt;

use crate::html::stylesheet::StyleSheet;

/// Indentation unit for nested output.
pub const INDENT: &str = "    ";

pub(crate) fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// A node that can be turned into HTML and contributes styles.
///
/// Rendering is a pure function of the node: calling [`render`](Self::render)
/// twice without mutation yields identical strings.
pub trait Renderable: fmt::Debug + Send + Sync {
    /// Render this node whose opening tag starts at nesting level `depth`.
    ///
    /// The caller writes the indentation before the first line; the node
    /// indents its own nested lines and its closing tag.
    fn render_at(&self, depth: usize) -> String;

    fn render(&self) -> String {
        self.render_at(0)
    }

    /// Add this node's styles (and those of its descendants) to `sheet`.
    fn collect_styles_into(&self, sheet: &mut StyleSheet);

    fn collect_styles(&self) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        self.collect_styles_into(&mut sheet);
        sheet
    }

    /// Name used as the node's class and style selector.
    fn object_name(&self) -> &str;
}

/// Content of a container: literal text or a nested node.
#[derive(Debug)]
pub enum Child {
    /// Emitted verbatim; may contain raw HTML.
    Text(String),
    Node(Box<dyn Renderable>),
}

impl Child {
    pub fn text(text: impl Into<String>) -> Self {
        Child::Text(text.into())
    }

    pub fn node(node: impl Renderable + 'static) -> Self {
        Child::Node(Box::new(node))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Child::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text),
            Child::Node(_) => None,
        }
    }

    pub fn render_at(&self, depth: usize) -> String {
        match self {
            Child::Text(text) => text.clone(),
            Child::Node(node) => node.render_at(depth),
        }
    }

    pub fn collect_styles_into(&self, sheet: &mut StyleSheet) {
        if let Child::Node(node) = self {
            node.collect_styles_into(sheet);
        }
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<Box<dyn Renderable>> for Child {
    fn from(node: Box<dyn Renderable>) -> Self {
        Child::Node(node)
    }
}

/// Implement `From<$ty> for Child` for concrete node types.
macro_rules! impl_into_child {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $crate::html::node::Child {
                fn from(node: $ty) -> Self {
                    $crate::html::node::Child::Node(Box::new(node))
                }
            }
        )*
    };
}

pub(crate) use impl_into_child;

/// Render `children` of a container whose tag sits at `depth`.
///
/// All-text content stays on the tag's line. Anything else puts each child
/// on its own line one level deeper and the closing tag on a new line.
pub(crate) fn render_children(open: &str, close: &str, children: &[Child], depth: usize) -> String {
    if children.iter().all(Child::is_text) {
        let text: String = children.iter().filter_map(Child::as_text).collect();
        return format!("{open}{text}{close}");
    }

    let mut out = String::from(open);
    for child in children {
        out.push('\n');
        out.push_str(&indent(depth + 1));
        out.push_str(&child.render_at(depth + 1));
    }
    out.push('\n');
    out.push_str(&indent(depth));
    out.push_str(close);
    out
}
