//! Route handlers.
//!
//! A handler is either synchronous or asynchronous. Dispatch returns a
//! [`Dispatched`] so callers only suspend when the handler is async.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::routing::pattern::PathParams;

type SyncFn<T> = dyn Fn(PathParams) -> T + Send + Sync;
type AsyncFn<T> = dyn Fn(PathParams) -> BoxFuture<'static, T> + Send + Sync;

/// A callable bound to a route.
pub enum Handler<T> {
    Sync(Arc<SyncFn<T>>),
    Async(Arc<AsyncFn<T>>),
}

impl<T: Send + 'static> Handler<T> {
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(PathParams) -> T + Send + Sync + 'static,
    {
        Handler::Sync(Arc::new(f))
    }

    pub fn asynchronous<F, Fut>(f: F) -> Self
    where
        F: Fn(PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Handler::Async(Arc::new(move |params| f(params).boxed()))
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Handler::Async(_))
    }

    /// Run a sync handler now, or start an async one.
    pub fn call(&self, params: PathParams) -> Dispatched<T> {
        match self {
            Handler::Sync(f) => Dispatched::Ready(f(params)),
            Handler::Async(f) => Dispatched::Pending(f(params)),
        }
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        match self {
            Handler::Sync(f) => Handler::Sync(Arc::clone(f)),
            Handler::Async(f) => Handler::Async(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Sync(_) => f.write_str("Handler::Sync"),
            Handler::Async(_) => f.write_str("Handler::Async"),
        }
    }
}

/// Outcome of dispatching to a handler.
pub enum Dispatched<T> {
    Ready(T),
    Pending(BoxFuture<'static, T>),
}

impl<T> Dispatched<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Dispatched::Ready(_))
    }

    /// The value of a sync handler; `None` for an async one.
    pub fn into_ready(self) -> Option<T> {
        match self {
            Dispatched::Ready(value) => Some(value),
            Dispatched::Pending(_) => None,
        }
    }

    /// Await the handler if needed.
    pub async fn resolve(self) -> T {
        match self {
            Dispatched::Ready(value) => value,
            Dispatched::Pending(fut) => fut.await,
        }
    }
}

impl<T> fmt::Debug for Dispatched<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatched::Ready(_) => f.write_str("Dispatched::Ready"),
            Dispatched::Pending(_) => f.write_str("Dispatched::Pending"),
        }
    }
}
