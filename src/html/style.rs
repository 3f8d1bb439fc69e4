//! Ordered CSS property maps.

use indexmap::IndexMap;

/// Generate chainable setters for common CSS properties.
macro_rules! style_setters {
    ($($method:ident => $property:literal),* $(,)?) => {
        $(
            #[doc = concat!("Set `", $property, "`.")]
            pub fn $method(&mut self, value: impl Into<String>) -> &mut Self {
                self.set($property, value)
            }
        )*
    };
}

/// CSS properties in insertion order.
///
/// Setting an existing property keeps its position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    properties: IndexMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse declarations such as `"margin: 0; color: red"`.
    ///
    /// Items without a colon are skipped.
    pub fn parse(declarations: &str) -> Self {
        let mut map = Self::new();
        map.extend_from_str(declarations);
        map
    }

    /// Merge parsed declarations into this map.
    pub fn extend_from_str(&mut self, declarations: &str) -> &mut Self {
        for item in declarations.split(';') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            if let Some((key, value)) = item.split_once(':') {
                self.set(key.trim(), value.trim());
            }
        }
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn remove(&mut self, property: &str) -> &mut Self {
        self.properties.shift_remove(property);
        self
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.properties.clear();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every property of `other` into this map; `other` wins on conflicts.
    pub fn merge(&mut self, other: &StyleMap) -> &mut Self {
        for (key, value) in &other.properties {
            self.properties.insert(key.clone(), value.clone());
        }
        self
    }

    /// Inline form used by the `style` attribute: `width:10px; color:red;`.
    pub fn to_inline(&self) -> String {
        self.properties
            .iter()
            .map(|(k, v)| format!("{k}:{v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Block form used inside a rule: one tab-indented declaration per line.
    pub fn to_block(&self) -> String {
        self.properties
            .iter()
            .map(|(k, v)| format!("\t{k}:{v};\n"))
            .collect()
    }

    /// Set a custom property; `--` is added when missing.
    pub fn set_css_variable(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let name = format!("--{}", name.trim_start_matches('-'));
        self.set(name, value)
    }

    style_setters! {
        // Box model
        set_width => "width",
        set_height => "height",
        set_min_width => "min-width",
        set_min_height => "min-height",
        set_max_width => "max-width",
        set_max_height => "max-height",
        set_margin => "margin",
        set_padding => "padding",
        set_box_sizing => "box-sizing",
        set_display => "display",
        set_visibility => "visibility",
        set_overflow => "overflow",

        // Positioning
        set_position => "position",
        set_top => "top",
        set_right => "right",
        set_bottom => "bottom",
        set_left => "left",
        set_z_index => "z-index",

        // Flexbox and grid
        set_flex_direction => "flex-direction",
        set_flex_wrap => "flex-wrap",
        set_flex => "flex",
        set_justify_content => "justify-content",
        set_align_items => "align-items",
        set_gap => "gap",
        set_grid_template_columns => "grid-template-columns",
        set_grid_template_rows => "grid-template-rows",

        // Background and borders
        set_background => "background",
        set_background_color => "background-color",
        set_background_image => "background-image",
        set_border => "border",
        set_border_radius => "border-radius",
        set_box_shadow => "box-shadow",

        // Text
        set_color => "color",
        set_font_family => "font-family",
        set_font_size => "font-size",
        set_font_weight => "font-weight",
        set_line_height => "line-height",
        set_text_align => "text-align",
        set_text_decoration => "text-decoration",

        // Interaction
        set_cursor => "cursor",
        set_opacity => "opacity",
        set_transition => "transition",
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_malformed_items() {
        let map = StyleMap::parse(" margin: 0 ; broken; color:red;;");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("margin"), Some("0"));
        assert_eq!(map.get("color"), Some("red"));
    }

    #[test]
    fn test_set_keeps_position() {
        let mut map = StyleMap::new();
        map.set_width("10px").set_color("red").set_width("20px");
        assert_eq!(map.to_inline(), "width:20px; color:red;");
    }

    #[test]
    fn test_block_form() {
        let map: StyleMap = [("display", "flex"), ("gap", "4px")].into_iter().collect();
        assert_eq!(map.to_block(), "\tdisplay:flex;\n\tgap:4px;\n");
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut base = StyleMap::parse("color: red; margin: 0");
        let other = StyleMap::parse("color: blue; padding: 1px");
        base.merge(&other);
        assert_eq!(base.to_inline(), "color:blue; margin:0; padding:1px;");
    }

    #[test]
    fn test_css_variable() {
        let mut map = StyleMap::new();
        map.set_css_variable("main-color", "#fff");
        map.set_css_variable("--accent", "#000");
        assert_eq!(map.get("--main-color"), Some("#fff"));
        assert_eq!(map.get("--accent"), Some("#000"));
    }
}
