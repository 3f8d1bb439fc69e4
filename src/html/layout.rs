//! Flexbox layout containers.
//!
//! A [`Layout`] is a `<div>` with flex defaults written into its style-sheet
//! rule. Horizontal and vertical layouts differ only in `flex-direction`.
//! A responsive layout adds a `@media (max-width: …)` rule that switches the
//! direction below a breakpoint.

use strum_macros::{AsRefStr, Display};

use crate::html::attributes::Attributes;
use crate::html::element::Element;
use crate::html::node::{impl_into_child, Child, Renderable};
use crate::html::style::StyleMap;
use crate::html::stylesheet::{Selector, StyleSheet};

/// Main axis of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    fn reversed(self) -> &'static str {
        match self {
            Direction::Row => "row-reverse",
            Direction::Column => "column-reverse",
        }
    }
}

/// Breakpoint used when directions are set on a layout without one.
pub const DEFAULT_BREAKPOINT: &str = "768px";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Breakpoint {
    max_width: String,
    direction: Direction,
}

/// Flex container.
#[derive(Debug)]
pub struct Layout {
    element: Element,
    direction: Direction,
    breakpoint: Option<Breakpoint>,
}

impl Layout {
    fn with_direction(object_type: &'static str, direction: Direction) -> Self {
        let mut element = Element::typed("div", object_type);
        element
            .styles_mut()
            .set_background("transparent")
            .set_display("flex")
            .set_flex_direction(direction.as_ref())
            .set_flex_wrap("nowrap")
            .set_justify_content("center")
            .set_align_items("center");
        Self { element, direction, breakpoint: None }
    }

    /// Row layout without a fixed axis name.
    pub fn new() -> Self {
        Self::with_direction("Layout", Direction::Row)
    }

    pub fn horizontal() -> Self {
        Self::with_direction("HorizontalLayout", Direction::Row)
    }

    pub fn vertical() -> Self {
        let mut layout = Self::with_direction("VerticalLayout", Direction::Column);
        layout.element.styles_mut().set_box_sizing("border-box");
        layout
    }

    /// Row layout that switches to `mobile` below `max_width`.
    pub fn responsive(max_width: &str, mobile: Direction) -> Self {
        let mut layout = Self::with_direction("ResponsiveLayout", Direction::Row);
        layout.breakpoint = Some(Breakpoint {
            max_width: max_width.to_string(),
            direction: mobile,
        });
        layout
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move the breakpoint. A layout without one switches to a column below it.
    pub fn set_breakpoint(&mut self, max_width: &str) -> &mut Self {
        match &mut self.breakpoint {
            Some(bp) => bp.max_width = max_width.to_string(),
            None => {
                self.breakpoint = Some(Breakpoint {
                    max_width: max_width.to_string(),
                    direction: Direction::Column,
                })
            }
        }
        self
    }

    pub fn breakpoint(&self) -> Option<&str> {
        self.breakpoint.as_ref().map(|bp| bp.max_width.as_str())
    }

    /// Direction above and below the breakpoint.
    pub fn set_directions(&mut self, desktop: Direction, mobile: Direction) -> &mut Self {
        self.direction = desktop;
        self.element.styles_mut().set_flex_direction(desktop.as_ref());
        match &mut self.breakpoint {
            Some(bp) => bp.direction = mobile,
            None => {
                self.breakpoint = Some(Breakpoint {
                    max_width: DEFAULT_BREAKPOINT.to_string(),
                    direction: mobile,
                })
            }
        }
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.element.rename(name);
        self
    }

    pub fn with_element(mut self, child: impl Into<Child>) -> Self {
        self.element.add_child(child);
        self
    }

    pub fn with_styles(mut self, declarations: &str) -> Self {
        self.element.styles_mut().extend_from_str(declarations);
        self
    }

    /// Fill the viewport, or the parent when `fullscreen` is false.
    pub fn stretch(&mut self, fullscreen: bool) -> &mut Self {
        let (width, height) = if fullscreen { ("100vw", "100vh") } else { ("100%", "auto") };
        self.element.styles_mut().set_width(width).set_height(height);
        self
    }

    /// Reset width and height to `auto`, overriding any earlier size.
    pub fn unstretch(&mut self) -> &mut Self {
        self.element.styles_mut().set_width("auto").set_height("auto");
        self
    }

    pub fn set_size(&mut self, width: &str, height: &str) -> &mut Self {
        self.element.styles_mut().set_width(width).set_height(height);
        self
    }

    /// Reverse the main axis, or restore it.
    pub fn set_reverse(&mut self, reverse: bool) -> &mut Self {
        let value = if reverse { self.direction.reversed() } else { self.direction.as_ref() };
        self.element.styles_mut().set_flex_direction(value);
        self
    }

    pub fn set_gap(&mut self, gap: &str) -> &mut Self {
        self.element.styles_mut().set_gap(gap);
        self
    }

    pub fn add_element(&mut self, child: impl Into<Child>) -> &mut Self {
        self.element.add_child(child);
        self
    }

    pub fn add_elements<I, C>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        for child in children {
            self.element.add_child(child);
        }
        self
    }

    /// Insert at `index`, clamped to the end.
    pub fn insert_element(&mut self, index: usize, child: impl Into<Child>) -> &mut Self {
        self.element.insert_child(index, child);
        self
    }

    pub fn remove_element(&mut self, index: usize) -> Option<Child> {
        self.element.remove_child(index)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.element.clear_children();
        self
    }

    pub fn len(&self) -> usize {
        self.element.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.element.children().is_empty()
    }

    pub fn styles(&self) -> &StyleMap {
        self.element.styles()
    }

    pub fn styles_mut(&mut self) -> &mut StyleMap {
        self.element.styles_mut()
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        self.element.attributes_mut()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Layout {
    fn render_at(&self, depth: usize) -> String {
        self.element.render_at(depth)
    }

    fn collect_styles_into(&self, sheet: &mut StyleSheet) {
        self.element.collect_styles_into(sheet);
        if let Some(bp) = &self.breakpoint {
            let mut mobile = StyleMap::new();
            mobile.set_flex_direction(bp.direction.as_ref());
            sheet.merge_media(
                &format!("(max-width: {})", bp.max_width),
                Selector::class(self.element.object_name()),
                &mobile,
            );
        }
    }

    fn object_name(&self) -> &str {
        self.element.object_name()
    }
}

impl_into_child!(Layout);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_defaults() {
        let layout = Layout::vertical();
        assert_eq!(
            layout.styles().to_inline(),
            "background:transparent; display:flex; flex-direction:column; flex-wrap:nowrap; \
             justify-content:center; align-items:center; box-sizing:border-box;"
        );
        assert_eq!(layout.render(), "<div class=\"VerticalLayout\"></div>");
    }

    #[test]
    fn test_stretch_and_unstretch() {
        let mut layout = Layout::horizontal();
        layout.stretch(true);
        assert_eq!(layout.styles().get("width"), Some("100vw"));
        assert_eq!(layout.styles().get("height"), Some("100vh"));
        layout.stretch(false);
        assert_eq!(layout.styles().get("height"), Some("auto"));
        layout.set_size("300px", "200px");
        layout.unstretch();
        assert_eq!(layout.styles().get("width"), Some("auto"));
        assert_eq!(layout.styles().get("height"), Some("auto"));
    }

    #[test]
    fn test_reverse_toggles_direction() {
        let mut layout = Layout::horizontal();
        layout.set_reverse(true);
        assert_eq!(layout.styles().get("flex-direction"), Some("row-reverse"));
        layout.set_reverse(false);
        assert_eq!(layout.styles().get("flex-direction"), Some("row"));
    }

    #[test]
    fn test_children_management() {
        let mut layout = Layout::horizontal();
        layout
            .add_elements([Element::paragraph("a"), Element::paragraph("c")])
            .insert_element(1, Element::paragraph("b"));
        assert_eq!(layout.len(), 3);
        assert!(layout.remove_element(7).is_none());
        assert!(layout.remove_element(0).is_some());
        assert_eq!(
            layout.render(),
            "<div class=\"HorizontalLayout\">\n\
             \x20   <p class=\"ParagraphElement\">b</p>\n\
             \x20   <p class=\"ParagraphElement\">c</p>\n\
             </div>"
        );
        layout.clear();
        assert!(layout.is_empty());
    }

    #[test]
    fn test_responsive_adds_media_rule() {
        let layout = Layout::responsive("600px", Direction::Column).named("Toolbar");
        let sheet = layout.collect_styles();
        let media = sheet.media("(max-width: 600px)").unwrap();
        assert_eq!(
            media.get(&Selector::class("Toolbar")).unwrap().get("flex-direction"),
            Some("column")
        );
    }

    #[test]
    fn test_breakpoint_and_directions_changed_after_construction() {
        let mut layout = Layout::responsive("600px", Direction::Column).named("Bar");
        layout.set_breakpoint("900px").set_directions(Direction::Column, Direction::Row);

        assert_eq!(layout.breakpoint(), Some("900px"));
        assert_eq!(layout.direction(), Direction::Column);
        assert_eq!(layout.styles().get("flex-direction"), Some("column"));

        let sheet = layout.collect_styles();
        assert!(sheet.media("(max-width: 600px)").is_none());
        let media = sheet.media("(max-width: 900px)").unwrap();
        assert_eq!(
            media.get(&Selector::class("Bar")).unwrap().get("flex-direction"),
            Some("row")
        );
    }

    #[test]
    fn test_set_directions_without_breakpoint_uses_default() {
        let mut layout = Layout::horizontal().named("Plain");
        assert_eq!(layout.breakpoint(), None);
        layout.set_directions(Direction::Row, Direction::Column);
        assert_eq!(layout.breakpoint(), Some(DEFAULT_BREAKPOINT));
        assert!(layout.collect_styles().media("(max-width: 768px)").is_some());
    }
}
