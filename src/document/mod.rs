//! Documents: head, body and the page that owns them.
//!
//! # Data Flow
//! ```text
//! Page::render()
//!     → [prefix] + doctype + <html attrs>
//!     → Head::render()  (title, metas, links, styles, scripts)
//!     → Body::render()  (children at depth 1, footer scripts)
//!     → </html> + [suffix], joined with "\n"
//! ```

pub mod body;
pub mod head;
pub mod page;
pub mod script;

pub use body::Body;
pub use head::{Head, HeadLink, Meta};
pub use page::{Doctype, Page};
pub use script::Script;
