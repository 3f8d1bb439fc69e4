//! Routing errors.

use thiserror::Error;

use crate::routing::router::RouterId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// The router (or a router it already includes) was included into itself.
    #[error("Router {0} cannot be included into itself")]
    SelfInclusion(RouterId),
}
