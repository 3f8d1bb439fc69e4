//! Responses produced by the application.
//!
//! # Responsibilities
//! - Carry status, content type and body independent of axum
//! - Tag each response with the branch that produced it (metrics label)
//! - Convert into an axum response at the edge

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use strum_macros::AsRefStr;

use crate::http::static_files::StaticFile;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Which branch of request handling produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ResponseKind {
    Page,
    Static,
    ErrorPage,
    NotFound,
    InternalError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub kind: ResponseKind,
}

impl AppResponse {
    pub fn page(html: String) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: HTML_CONTENT_TYPE,
            body: html.into_bytes(),
            kind: ResponseKind::Page,
        }
    }

    /// The configured error page, served with 200.
    pub fn error_page(html: &str) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: HTML_CONTENT_TYPE,
            body: html.as_bytes().to_vec(),
            kind: ResponseKind::ErrorPage,
        }
    }

    pub fn static_file(file: StaticFile) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: file.content_type,
            body: file.body,
            kind: ResponseKind::Static,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            content_type: TEXT_CONTENT_TYPE,
            body: b"404 Not Found".to_vec(),
            kind: ResponseKind::NotFound,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            content_type: TEXT_CONTENT_TYPE,
            body: b"500 Internal Server Error".to_vec(),
            kind: ResponseKind::InternalError,
        }
    }

    /// Body as UTF-8 text, lossy.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl IntoResponse for AppResponse {
    fn into_response(self) -> Response {
        (self.status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(ResponseKind::ErrorPage.as_ref(), "error_page");
        assert_eq!(ResponseKind::NotFound.as_ref(), "not_found");
    }

    #[test]
    fn test_into_response_sets_content_type() {
        let response = AppResponse::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            TEXT_CONTENT_TYPE
        );
    }
}
