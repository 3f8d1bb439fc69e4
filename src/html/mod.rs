//! Element tree and renderer.
//!
//! # Data Flow
//! ```text
//! Construction:
//!     Element::paragraph("Hello")
//!     → object name + first class assigned here
//!     → attributes validated against the static tables (attributes.rs, events.rs)
//!
//! Render (pure, repeatable):
//!     Renderable::render()
//!     → open tag + attribute string (fixed group order)
//!     → children inline (all text) or one per indented line
//!
//! Style collection:
//!     Renderable::collect_styles()
//!     → `.{object_name}` rule per styled node (stylesheet.rs)
//!     → media rules from responsive layouts
//! ```
//!
//! # Design Decisions
//! - Unknown attribute names fail when set, not when rendered
//! - Children are a tagged union of text and boxed nodes
//! - Text children are written verbatim; attribute values are escaped

pub mod attributes;
pub mod element;
pub mod events;
pub mod form;
pub mod layout;
pub mod node;
pub mod style;
pub mod stylesheet;

pub use attributes::{AttributeError, AttributeName, Attributes, BooleanAttribute};
pub use element::Element;
pub use events::Event;
pub use form::{Input, InputType, Select, TextArea};
pub use layout::{Direction, Layout};
pub use node::{Child, Renderable};
pub use style::StyleMap;
pub use stylesheet::{Selector, SelectorKind, StyleSheet};
