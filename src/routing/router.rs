//! Route table, inclusion and dispatch.
//!
//! # Responsibilities
//! - Register sync and async handlers under path patterns
//! - Copy other routers' routes in under a prefix
//! - Resolve a request path to a handler and its parameters
//!
//! # Design Decisions
//! - Literal routes win over parameterized ones
//! - Parameterized routes are tried in registration order; first match wins
//! - Inclusion copies a snapshot; later changes to the child are not seen
//! - A router id is shared by clones and used to reject self-inclusion

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use serde::Serialize;

use crate::routing::error::RoutingError;
use crate::routing::handler::{Dispatched, Handler};
use crate::routing::pattern::{normalize_path, split_path, PathParams, PathPattern};

static ROUTER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a router, shared by its clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RouterId(u64);

impl RouterId {
    fn next() -> Self {
        Self(ROUTER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RouterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "router-{}", self.0)
    }
}

/// A pattern bound to a handler.
pub struct Route<T> {
    pattern: PathPattern,
    handler: Handler<T>,
}

impl<T> Route<T> {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler<T> {
        &self.handler
    }

    pub fn is_parameterized(&self) -> bool {
        self.pattern.is_parameterized()
    }

    pub fn is_async(&self) -> bool {
        matches!(self.handler, Handler::Async(_))
    }

    pub fn path(&self) -> String {
        self.pattern.to_string()
    }
}

impl<T> Clone for Route<T> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.to_string())
            .field("handler", &self.handler)
            .finish()
    }
}

/// One row of [`Router::route_table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub parameterized: bool,
    #[serde(rename = "async")]
    pub is_async: bool,
}

/// A matched route and its captured parameters.
#[derive(Debug)]
pub struct RouteMatch<'a, T> {
    pub route: &'a Route<T>,
    pub params: PathParams,
}

/// Path router generic over the handler output.
pub struct Router<T> {
    id: RouterId,
    prefix: PathPattern,
    routes: IndexMap<String, Route<T>>,
    included: Vec<RouterId>,
}

impl<T: Send + 'static> Router<T> {
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    /// Router whose routes all live under `prefix`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            id: RouterId::next(),
            prefix: PathPattern::parse(prefix),
            routes: IndexMap::new(),
            included: Vec::new(),
        }
    }

    pub fn id(&self) -> RouterId {
        self.id
    }

    pub fn prefix(&self) -> &PathPattern {
        &self.prefix
    }

    /// Register a synchronous handler at `prefix + path`.
    pub fn route<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(PathParams) -> T + Send + Sync + 'static,
    {
        self.register(path, Handler::sync(handler))
    }

    /// Register an asynchronous handler at `prefix + path`.
    pub fn route_async<F, Fut>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.register(path, Handler::asynchronous(handler))
    }

    /// Register any handler at `prefix + path`. Re-registering a path
    /// replaces its handler in place.
    pub fn register(&mut self, path: &str, handler: Handler<T>) -> &mut Self {
        let pattern = self.prefix.join(&PathPattern::parse(path));
        self.insert(Route { pattern, handler });
        self
    }

    fn insert(&mut self, route: Route<T>) {
        let key = route.path();
        tracing::debug!(
            path = %key,
            parameterized = route.is_parameterized(),
            is_async = route.is_async(),
            "Route registered"
        );
        if self.routes.insert(key.clone(), route).is_some() {
            tracing::warn!(path = %key, "Route replaced");
        }
    }

    /// Copy every route of `child` under `self.prefix + prefix`.
    ///
    /// The child's own prefix is replaced by the new one. Routers the child
    /// already included come along, since their routes were copied into it.
    pub fn include(&mut self, child: &Router<T>, prefix: &str) -> Result<&mut Self, RoutingError> {
        if child.id == self.id || child.included.contains(&self.id) {
            tracing::error!(router = %self.id, "Rejected self-inclusion");
            return Err(RoutingError::SelfInclusion(self.id));
        }

        let base = self.prefix.join(&PathPattern::parse(prefix));
        for route in child.routes.values() {
            let rest = route
                .pattern
                .strip_prefix(&child.prefix)
                .unwrap_or_else(|| route.pattern.clone());
            self.insert(Route {
                pattern: base.join(&rest),
                handler: route.handler.clone(),
            });
        }

        self.included.push(child.id);
        self.included.extend(child.included.iter().copied());
        tracing::info!(
            router = %self.id,
            child = %child.id,
            prefix = %base,
            routes = child.routes.len(),
            "Router included"
        );
        Ok(self)
    }

    /// Find the route for `path`: exact literal first, then the first
    /// parameterized pattern that matches.
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        if let Some(route) = self.routes.get(&normalize_path(path)) {
            if !route.is_parameterized() {
                return Some(RouteMatch { route, params: PathParams::new() });
            }
        }

        let segments = split_path(path);
        self.routes
            .values()
            .filter(|route| route.is_parameterized())
            .find_map(|route| {
                route
                    .pattern
                    .match_segments(&segments)
                    .map(|params| RouteMatch { route, params })
            })
    }

    /// Invoke the handler for `path`.
    pub fn dispatch(&self, path: &str) -> Result<Dispatched<T>, RoutingError> {
        let matched = self
            .match_route(path)
            .ok_or_else(|| RoutingError::RouteNotFound(path.to_string()))?;
        Ok(matched.route.handler.call(matched.params))
    }

    /// Dispatch and await the result.
    pub async fn resolve(&self, path: &str) -> Result<T, RoutingError> {
        Ok(self.dispatch(path)?.resolve().await)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<T>> {
        self.routes.values()
    }

    pub fn get(&self, path: &str) -> Option<&Route<T>> {
        self.routes.get(&PathPattern::parse(path).to_string())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn route_table(&self) -> Vec<RouteInfo> {
        self.routes
            .values()
            .map(|route| RouteInfo {
                path: route.path(),
                parameterized: route.is_parameterized(),
                is_async: route.is_async(),
            })
            .collect()
    }
}

impl<T: Send + 'static> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Router<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            prefix: self.prefix.clone(),
            routes: self.routes.clone(),
            included: self.included.clone(),
        }
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("id", &self.id)
            .field("prefix", &self.prefix.to_string())
            .field("routes", &self.routes.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(router: &Router<String>, path: &str) -> String {
        router.dispatch(path).unwrap().into_ready().unwrap()
    }

    #[test]
    fn test_literal_beats_parameterized() {
        let mut router = Router::new();
        router
            .route("/user/<id>", |p| format!("user {}", p.get("id").unwrap_or("")))
            .route("/user/me", |_| "me".to_string());

        assert_eq!(ready(&router, "/user/me"), "me");
        assert_eq!(ready(&router, "/user/42"), "user 42");
    }

    #[test]
    fn test_first_parameterized_match_wins() {
        let mut router = Router::new();
        router
            .route("/<a>/x", |_| "first".to_string())
            .route("/y/<b>", |_| "second".to_string());
        assert_eq!(ready(&router, "/y/x"), "first");
    }

    #[test]
    fn test_route_not_found() {
        let router: Router<String> = Router::new();
        let err = router.dispatch("/missing").unwrap_err();
        assert_eq!(err, RoutingError::RouteNotFound("/missing".to_string()));
        assert_eq!(err.to_string(), "Route not found: /missing");
    }

    #[test]
    fn test_prefix_router() {
        let mut router = Router::with_prefix("/blog/");
        router.route("/", |_| "index".to_string()).route("/<slug>", |p| {
            p.get("slug").unwrap_or("").to_string()
        });
        assert_eq!(ready(&router, "/blog"), "index");
        assert_eq!(ready(&router, "/blog/hello/"), "hello");
        assert!(router.dispatch("/hello").is_err());
    }

    #[test]
    fn test_include_replaces_child_prefix() {
        let mut api = Router::with_prefix("/internal");
        api.route("/ping", |_| "pong".to_string());

        let mut app = Router::new();
        app.include(&api, "/api").unwrap();

        assert_eq!(ready(&app, "/api/ping"), "pong");
        assert!(app.dispatch("/internal/ping").is_err());
        assert!(app.dispatch("/api/internal/ping").is_err());
    }

    #[test]
    fn test_nested_include() {
        let mut v1 = Router::new();
        v1.route("/users/<id>", |p| format!("v1 {}", p.get("id").unwrap_or("")));

        let mut api = Router::new();
        api.include(&v1, "/v1").unwrap();

        let mut app = Router::with_prefix("/site");
        app.include(&api, "/api").unwrap();

        assert_eq!(ready(&app, "/site/api/v1/users/7"), "v1 7");
    }

    #[test]
    fn test_include_is_a_snapshot() {
        let mut child = Router::new();
        child.route("/a", |_| "a".to_string());

        let mut parent = Router::new();
        parent.include(&child, "/c").unwrap();
        child.route("/b", |_| "b".to_string());

        assert!(parent.dispatch("/c/a").is_ok());
        assert!(parent.dispatch("/c/b").is_err());
    }

    #[test]
    fn test_self_inclusion_rejected() {
        let mut router: Router<String> = Router::new();
        router.route("/", |_| "root".to_string());
        let same = router.clone();

        let err = router.include(&same, "/again").unwrap_err();
        assert_eq!(err, RoutingError::SelfInclusion(router.id()));
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_indirect_self_inclusion_rejected() {
        let mut parent: Router<String> = Router::new();
        let mut child: Router<String> = Router::new();
        child.include(&parent.clone(), "/p").unwrap();

        assert!(matches!(
            parent.include(&child, "/c"),
            Err(RoutingError::SelfInclusion(_))
        ));
    }

    #[test]
    fn test_route_table() {
        let mut router = Router::new();
        router
            .route("/", |_| "home".to_string())
            .route_async("/user/<id>", |_| async { "user".to_string() });

        let table = router.route_table();
        assert_eq!(
            table,
            vec![
                RouteInfo { path: "/".into(), parameterized: false, is_async: false },
                RouteInfo { path: "/user/<id>".into(), parameterized: true, is_async: true },
            ]
        );
        let json = serde_json::to_value(&table[1]).unwrap();
        assert_eq!(json["async"], true);
    }

    #[tokio::test]
    async fn test_resolve_async_handler() {
        let mut router = Router::new();
        router.route_async("/user/<id>", |p: PathParams| async move {
            format!("id={}", p.get("id").unwrap_or(""))
        });

        let dispatched = router.dispatch("/user/42").unwrap();
        assert!(!dispatched.is_ready());
        assert_eq!(dispatched.resolve().await, "id=42");
        assert_eq!(router.resolve("/user/9").await.unwrap(), "id=9");
    }
}
