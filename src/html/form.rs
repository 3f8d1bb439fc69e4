//! Form controls.

use strum_macros::{AsRefStr, Display, EnumString};

use crate::html::attributes::{
    escape_attribute, AttributeError, AttributeName, Attributes, BooleanAttribute,
};
use crate::html::element::Element;
use crate::html::node::{impl_into_child, indent, Renderable};
use crate::html::style::StyleMap;
use crate::html::stylesheet::StyleSheet;

/// Value of the `type` attribute of an `<input>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Tel,
    Url,
    Search,
    Date,
    Time,
    #[strum(to_string = "datetime-local")]
    DatetimeLocal,
    Month,
    Week,
    Color,
    Range,
    Checkbox,
    Radio,
    File,
    Hidden,
    Submit,
    Reset,
    Button,
    Image,
}

/// `<input>` element.
#[derive(Debug)]
pub struct Input {
    element: Element,
    input_type: InputType,
}

impl Input {
    pub fn new(input_type: InputType, name: &str) -> Self {
        let mut element = Element::typed("input", "InputElement");
        element
            .attributes_mut()
            .set(AttributeName::Type, input_type.as_ref())
            .set(AttributeName::Name, name);
        Self { element, input_type }
    }

    pub fn text(name: &str) -> Self {
        Self::new(InputType::Text, name)
    }

    pub fn password(name: &str) -> Self {
        Self::new(InputType::Password, name)
    }

    pub fn email(name: &str) -> Self {
        Self::new(InputType::Email, name)
    }

    /// Submit button; `label` becomes its value.
    pub fn submit(label: &str) -> Self {
        let mut input = Self::new(InputType::Submit, "submit");
        input.element.attributes_mut().set(AttributeName::Value, label);
        input
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.element.rename(name);
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.element.attributes_mut().set(AttributeName::Id, id);
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.element.attributes_mut().set(AttributeName::Value, value);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.element
            .attributes_mut()
            .set(AttributeName::Placeholder, placeholder);
        self
    }

    pub fn required(mut self) -> Self {
        self.element.attributes_mut().set_flag(BooleanAttribute::Required);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.element.attributes_mut().set_flag(BooleanAttribute::Disabled);
        self
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Result<Self, AttributeError> {
        self.element.attributes_mut().set_any(key, value)?;
        Ok(self)
    }

    pub fn with_styles(mut self, declarations: &str) -> Self {
        self.element.styles_mut().extend_from_str(declarations);
        self
    }

    pub fn attributes(&self) -> &Attributes {
        self.element.attributes()
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        self.element.attributes_mut()
    }
}

impl Renderable for Input {
    fn render_at(&self, depth: usize) -> String {
        self.element.render_at(depth)
    }

    fn collect_styles_into(&self, sheet: &mut StyleSheet) {
        self.element.collect_styles_into(sheet);
    }

    fn object_name(&self) -> &str {
        self.element.object_name()
    }
}

/// `<textarea>`; its content is the initial value.
#[derive(Debug)]
pub struct TextArea {
    element: Element,
}

impl TextArea {
    pub fn new(name: &str) -> Self {
        let mut element = Element::typed("textarea", "TextAreaElement");
        element.attributes_mut().set(AttributeName::Name, name);
        Self { element }
    }

    pub fn with_size(mut self, rows: u32, cols: u32) -> Self {
        self.element
            .attributes_mut()
            .set(AttributeName::Rows, rows.to_string())
            .set(AttributeName::Cols, cols.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.element = self.element.with_text(text);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.element
            .attributes_mut()
            .set(AttributeName::Placeholder, placeholder);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.element.rename(name);
        self
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        self.element.attributes_mut()
    }
}

impl Renderable for TextArea {
    fn render_at(&self, depth: usize) -> String {
        self.element.render_at(depth)
    }

    fn collect_styles_into(&self, sheet: &mut StyleSheet) {
        self.element.collect_styles_into(sheet);
    }

    fn object_name(&self) -> &str {
        self.element.object_name()
    }
}

/// One `<option>` of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

/// `<select>` with options and an optional selected value.
#[derive(Debug)]
pub struct Select {
    element: Element,
    options: Vec<SelectOption>,
    selected: Option<String>,
}

impl Select {
    pub fn new(name: &str) -> Self {
        let mut element = Element::typed("select", "SelectElement");
        element.attributes_mut().set(AttributeName::Name, name);
        Self { element, options: Vec::new(), selected: None }
    }

    pub fn with_option(mut self, value: &str, text: &str) -> Self {
        self.add_option(value, text);
        self
    }

    pub fn add_option(&mut self, value: &str, text: &str) -> &mut Self {
        self.options.push(SelectOption {
            value: value.to_string(),
            text: text.to_string(),
        });
        self
    }

    /// Remove every option with `value`. Clears the selection if it pointed there.
    pub fn remove_option(&mut self, value: &str) -> &mut Self {
        self.options.retain(|o| o.value != value);
        if self.selected.as_deref() == Some(value) {
            self.selected = None;
        }
        self
    }

    pub fn select(mut self, value: &str) -> Self {
        self.set_selected(value);
        self
    }

    pub fn set_selected(&mut self, value: &str) -> &mut Self {
        self.selected = Some(value.to_string());
        self
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.element.rename(name);
        self
    }

    pub fn styles_mut(&mut self) -> &mut StyleMap {
        self.element.styles_mut()
    }

    fn render_option(&self, option: &SelectOption) -> String {
        let selected = if self.selected.as_deref() == Some(option.value.as_str()) {
            " selected"
        } else {
            ""
        };
        format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_attribute(&option.value),
            selected,
            option.text
        )
    }
}

impl Renderable for Select {
    fn render_at(&self, depth: usize) -> String {
        let mut out = self.element.open_tag();
        if self.options.is_empty() {
            out.push_str(&self.element.close_tag());
            return out;
        }
        for option in &self.options {
            out.push('\n');
            out.push_str(&indent(depth + 1));
            out.push_str(&self.render_option(option));
        }
        out.push('\n');
        out.push_str(&indent(depth));
        out.push_str(&self.element.close_tag());
        out
    }

    fn collect_styles_into(&self, sheet: &mut StyleSheet) {
        self.element.collect_styles_into(sheet);
    }

    fn object_name(&self) -> &str {
        self.element.object_name()
    }
}

impl_into_child!(Input, TextArea, Select);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_spelling() {
        assert_eq!(InputType::DatetimeLocal.as_ref(), "datetime-local");
        assert_eq!("email".parse::<InputType>().unwrap(), InputType::Email);
        assert!("bogus".parse::<InputType>().is_err());
    }

    #[test]
    fn test_input_renders_void() {
        let input = Input::email("mail").with_placeholder("you@example.com").required();
        assert_eq!(
            input.render(),
            "<input class=\"InputElement\" required type=\"email\" name=\"mail\" \
             placeholder=\"you@example.com\">"
        );
    }

    #[test]
    fn test_select_marks_selected_option() {
        let select = Select::new("color")
            .with_option("r", "Red")
            .with_option("g", "Green")
            .select("g");

        assert_eq!(
            select.render(),
            "<select class=\"SelectElement\" name=\"color\">\n\
             \x20   <option value=\"r\">Red</option>\n\
             \x20   <option value=\"g\" selected>Green</option>\n\
             </select>"
        );
    }

    #[test]
    fn test_remove_selected_option_clears_selection() {
        let mut select = Select::new("s").with_option("a", "A").select("a");
        select.remove_option("a");
        assert!(select.options().is_empty());
        assert_eq!(select.selected(), None);
        assert_eq!(select.render(), "<select class=\"SelectElement\" name=\"s\"></select>");
    }

    #[test]
    fn test_textarea_keeps_text_inline() {
        let area = TextArea::new("msg").with_size(4, 40).with_text("hi");
        assert_eq!(
            area.render(),
            "<textarea class=\"TextAreaElement\" name=\"msg\" rows=\"4\" cols=\"40\">hi</textarea>"
        );
    }
}
