//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace, timeout)
//!     → app.rs (RECEIVE → MATCH-ROUTE → RENDER | STATIC | 404)
//!     → static_files.rs (extension table, file read)
//!     → response.rs (status, content type, body)
//!     → Send to client
//! ```

pub mod app;
pub mod request;
pub mod response;
pub mod server;
pub mod static_files;

pub use app::{App, StylesheetError};
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::{AppResponse, ResponseKind};
pub use server::HttpServer;
pub use static_files::{StaticFileError, StaticFiles};
