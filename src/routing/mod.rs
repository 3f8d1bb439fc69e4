//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Setup (before serving):
//!     router.route("/user/<id>", handler)
//!     → pattern.rs (tokenize into segments)
//!     → router.rs (store under canonical path)
//!     parent.include(&child, "/api")
//!     → copy child routes, child prefix swapped for "/api"
//!
//! Per request:
//!     path
//!     → exact literal lookup
//!     → else first matching parameterized pattern
//!     → handler.rs: Dispatched::Ready(T) | Dispatched::Pending(future)
//!     → or RoutingError::RouteNotFound
//! ```
//!
//! # Design Decisions
//! - Route table is immutable once serving starts
//! - Segment comparison, no regex
//! - Deterministic: same path always resolves to the same route

pub mod error;
pub mod handler;
pub mod pattern;
pub mod router;

pub use error::RoutingError;
pub use handler::{Dispatched, Handler};
pub use pattern::{PathParams, PathPattern, Segment};
pub use router::{Route, RouteInfo, RouteMatch, Router, RouterId};
