//! LayoutML: build HTML pages as typed element trees and serve them.
//!
//! # Architecture Overview
//!
//! ```text
//!   html        Element / Layout / Input / Select ── Renderable ──▶ HTML string
//!      │                                         └─ collect_styles ─▶ StyleSheet
//!      ▼
//!   document    Head + Body ─▶ Page (doctype, <html>, head, body)
//!      ▼
//!   routing     Router<Page>: "/user/<id>" → handler(params) → Page
//!      ▼
//!   http        App: route → static file → error page → 404
//!               HttpServer: axum fallback + request-id / trace / timeout layers
//!
//!   config, observability, lifecycle: TOML settings, tracing + metrics,
//!   ordered startup (stylesheets before listening) and graceful shutdown
//! ```

pub mod config;
pub mod document;
pub mod html;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use document::{Body, Head, Page};
pub use html::{Element, Layout, Renderable};
pub use http::{App, HttpServer};
pub use lifecycle::Shutdown;
pub use routing::Router;
