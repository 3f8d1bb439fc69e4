//! The application: routes, static files, error page and generated CSS.
//!
//! # Responsibilities
//! - Own the page router and the static file root
//! - Generate one stylesheet per literal route during startup
//! - Answer a request path: page, static file, error page or 404
//!
//! # Data Flow
//! ```text
//! path
//!     → router match?  → run handler → add stylesheet link → render → 200
//!     → static ext?    → read file  → 200 | 404
//!     → error page?    → 200 with its HTML
//!     → 404 Not Found
//! ```
//!
//! # Design Decisions
//! - Stylesheets are written before serving starts; no runtime flag
//! - Handler panics are caught and answered with 500
//! - Handlers run per request, so pages may be mutated freely before render

use std::collections::{HashMap, HashSet};
use std::io;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};

use futures_util::FutureExt;
use thiserror::Error;

use crate::config::AppConfig;
use crate::document::Page;
use crate::html::Renderable;
use crate::http::response::AppResponse;
use crate::http::static_files::{is_static_path, StaticFiles};
use crate::observability::metrics;
use crate::routing::{Handler, PathParams, RouteInfo, Router, RoutingError};

#[derive(Debug, Error)]
pub enum StylesheetError {
    #[error("Failed to create styles directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write stylesheet {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Run a handler, converting a panic into `None`.
async fn invoke(handler: &Handler<Page>, params: PathParams) -> Option<Page> {
    let dispatched = std::panic::catch_unwind(AssertUnwindSafe(|| handler.call(params))).ok()?;
    AssertUnwindSafe(dispatched.resolve()).catch_unwind().await.ok()
}

/// `name`, or `name1`, `name2`, … if already taken.
fn unique_name(name: &str, taken: &mut HashSet<String>) -> String {
    let base = if name.is_empty() { "Page" } else { name };
    let mut candidate = base.to_string();
    let mut n = 1;
    while taken.contains(&candidate) {
        candidate = format!("{base}{n}");
        n += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

pub struct App {
    router: Router<Page>,
    error_page: Option<String>,
    static_files: StaticFiles,
    styles_dir: String,
    stylesheet_links: HashMap<String, String>,
}

impl App {
    /// `static_root` is where static paths resolve; stylesheets are written
    /// to `static_root/styles_dir`.
    pub fn new(static_root: impl Into<PathBuf>, styles_dir: &str) -> Self {
        Self {
            router: Router::new(),
            error_page: None,
            static_files: StaticFiles::new(static_root),
            styles_dir: styles_dir.trim_matches('/').to_string(),
            stylesheet_links: HashMap::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.static_files.root, &config.styles.dir)
    }

    pub fn route<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(PathParams) -> Page + Send + Sync + 'static,
    {
        self.router.route(path, handler);
        self
    }

    pub fn route_async<F, Fut>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(PathParams) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Page> + Send + 'static,
    {
        self.router.route_async(path, handler);
        self
    }

    pub fn include_router(
        &mut self,
        router: &Router<Page>,
        prefix: &str,
    ) -> Result<&mut Self, RoutingError> {
        self.router.include(router, prefix)?;
        Ok(self)
    }

    pub fn router(&self) -> &Router<Page> {
        &self.router
    }

    pub fn route_table(&self) -> Vec<RouteInfo> {
        self.router.route_table()
    }

    /// Page served for unmatched non-static paths. Rendered once, here.
    pub fn set_error_page(&mut self, page: &Page) -> &mut Self {
        self.error_page = Some(page.render());
        self
    }

    pub fn styles_path(&self) -> PathBuf {
        self.static_files.root().join(&self.styles_dir)
    }

    /// Stylesheet href recorded for a route path.
    pub fn stylesheet_link(&self, route_path: &str) -> Option<&str> {
        self.stylesheet_links.get(route_path).map(String::as_str)
    }

    /// Write one CSS file per literal route and remember its link.
    ///
    /// Parameterized routes are skipped since they need arguments. A handler
    /// that panics is logged and gets no stylesheet.
    pub async fn generate_stylesheets(&mut self) -> Result<usize, StylesheetError> {
        let dir = self.styles_path();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| StylesheetError::CreateDir {
                path: dir.display().to_string(),
                source,
            })?;

        let mut taken = HashSet::new();
        let mut written = 0;
        for route in self.router.routes() {
            let path = route.path();
            if route.is_parameterized() {
                tracing::debug!(path = %path, "Skipping stylesheet for parameterized route");
                continue;
            }
            let Some(page) = invoke(route.handler(), PathParams::new()).await else {
                tracing::warn!(path = %path, "Handler panicked; no stylesheet generated");
                continue;
            };

            let name = unique_name(page.object_name(), &mut taken);
            let file = dir.join(format!("{name}.css"));
            write_stylesheet(&file, &page.collect_styles().to_css()).await?;

            let href = format!("/{}/{}.css", self.styles_dir, name);
            tracing::info!(path = %path, href = %href, "Stylesheet generated");
            metrics::record_stylesheet_written();
            self.stylesheet_links.insert(path, href);
            written += 1;
        }
        Ok(written)
    }

    /// Produce the response for a request path.
    pub async fn handle(&self, path: &str) -> AppResponse {
        if let Some(matched) = self.router.match_route(path) {
            let route_path = matched.route.path();
            return match invoke(matched.route.handler(), matched.params).await {
                Some(mut page) => {
                    if let Some(href) = self.stylesheet_links.get(&route_path) {
                        if !page.head().has_stylesheet(href) {
                            page.head_mut().add_stylesheet(href);
                        }
                    }
                    AppResponse::page(page.render())
                }
                None => {
                    tracing::error!(path = %path, route = %route_path, "Handler panicked");
                    AppResponse::internal_error()
                }
            };
        }

        if is_static_path(path) {
            return match self.static_files.load(path).await {
                Ok(file) => AppResponse::static_file(file),
                Err(e) => {
                    tracing::debug!(path = %path, error = %e, "Static file not served");
                    AppResponse::not_found()
                }
            };
        }

        match &self.error_page {
            Some(html) => AppResponse::error_page(html),
            None => AppResponse::not_found(),
        }
    }
}

async fn write_stylesheet(file: &Path, css: &str) -> Result<(), StylesheetError> {
    tokio::fs::write(file, css)
        .await
        .map_err(|source| StylesheetError::Write {
            path: file.display().to_string(),
            source,
        })
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("router", &self.router)
            .field("static_root", &self.static_files.root())
            .field("styles_dir", &self.styles_dir)
            .field("error_page", &self.error_page.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Element;
    use crate::http::response::ResponseKind;
    use axum::http::StatusCode;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("layoutml-app-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_unique_name() {
        let mut taken = HashSet::new();
        assert_eq!(unique_name("Page", &mut taken), "Page");
        assert_eq!(unique_name("Page", &mut taken), "Page1");
        assert_eq!(unique_name("Page", &mut taken), "Page2");
        assert_eq!(unique_name("Home", &mut taken), "Home");
        assert_eq!(unique_name("", &mut taken), "Page3");
    }

    #[tokio::test]
    async fn test_handle_page_and_404() {
        let mut app = App::new(temp_root(), "styles");
        app.route("/", |_| Page::new("Home").with_element(Element::paragraph("Hi")));

        let ok = app.handle("/").await;
        assert_eq!(ok.status, StatusCode::OK);
        assert_eq!(ok.kind, ResponseKind::Page);
        assert!(ok.text().contains("<p class=\"ParagraphElement\">Hi</p>"));

        let missing = app.handle("/nope").await;
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.text(), "404 Not Found");
    }

    #[tokio::test]
    async fn test_error_page_is_200_but_missing_static_is_404() {
        let mut app = App::new(temp_root(), "styles");
        app.set_error_page(&Page::new("Oops").with_element(Element::paragraph("Lost")));

        let error = app.handle("/nowhere").await;
        assert_eq!(error.status, StatusCode::OK);
        assert_eq!(error.kind, ResponseKind::ErrorPage);
        assert!(error.text().contains("<title>Oops</title>"));

        let css = app.handle("/styles/missing.css").await;
        assert_eq!(css.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_panicking_handler_is_500() {
        let mut app = App::new(temp_root(), "styles");
        app.route("/boom", |_| panic!("handler failure"));
        let response = app.handle("/boom").await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.kind, ResponseKind::InternalError);
    }

    #[tokio::test]
    async fn test_generate_stylesheets_links_pages() {
        let root = temp_root();
        let mut app = App::new(&root, "styles");
        app.route("/", |_| {
            Page::new("Home").with_element(Element::div().named("Hero").with_styles("color: red"))
        })
        .route("/about", |_| Page::new("About"))
        .route("/contact", |_| Page::new("Contact").named("Contact"))
        .route("/user/<id>", |_| Page::new("User"));

        let written = app.generate_stylesheets().await.unwrap();
        assert_eq!(written, 3);
        assert_eq!(app.stylesheet_link("/"), Some("/styles/Page.css"));
        assert_eq!(app.stylesheet_link("/about"), Some("/styles/Page1.css"));
        assert_eq!(app.stylesheet_link("/contact"), Some("/styles/Contact.css"));
        assert_eq!(app.stylesheet_link("/user/<id>"), None);

        let css = tokio::fs::read_to_string(root.join("styles/Page.css")).await.unwrap();
        assert_eq!(css, ".Hero {\n\tcolor:red;\n}\n");

        let html = app.handle("/").await.text();
        assert_eq!(
            html.matches("<link rel=\"stylesheet\" href=\"/styles/Page.css\" media=\"all\">").count(),
            1
        );
        let served = app.handle("/styles/Page.css").await;
        assert_eq!(served.content_type, "text/css");
        assert_eq!(served.text(), css);

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
