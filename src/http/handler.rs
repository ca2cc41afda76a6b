//! The application contract and the built-in fallback responder.
//!
//! # Responsibilities
//! - Define the opaque handler trait the table dispatches to
//! - Carry the table back-reference to fallback handlers
//! - Provide the default 404 responder with route diagnostics
//!
//! # Design Decisions
//! - Handlers are `Send + Sync` trait objects shared via `Arc`
//! - Closures get a blanket impl; tests and small apps stay terse
//! - The fallback is ordinary dependency-injected state, not a global

use std::fmt::Write as _;
use std::sync::Arc;

use http::StatusCode;

use crate::http::{RouteRequest, RouteResponse};
use crate::routing::RouteKey;

/// An opaque request handler bound into the table.
///
/// The table never inspects a handler beyond invoking it; by the time
/// `handle` runs, `script_name` holds every prefix matched so far and
/// `path_info` the unconsumed suffix (possibly empty).
pub trait Application: Send + Sync {
    fn handle(&self, req: RouteRequest) -> RouteResponse;
}

impl<F> Application for F
where
    F: Fn(RouteRequest) -> RouteResponse + Send + Sync,
{
    fn handle(&self, req: RouteRequest) -> RouteResponse {
        self(req)
    }
}

/// Snapshot of the keys registered in the table that failed to match,
/// inserted into the request extensions before the fallback runs.
///
/// Fallback applications read it to enumerate what *was* registered:
///
/// ```
/// # use urlmux::{RegisteredRoutes, RouteRequest};
/// # let req = RouteRequest::new("/nope");
/// if let Some(routes) = req.extensions.get::<RegisteredRoutes>() {
///     for key in routes.keys() {
///         eprintln!("registered: {key}");
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RegisteredRoutes(Arc<Vec<RouteKey>>);

impl RegisteredRoutes {
    pub(crate) fn new(keys: Vec<RouteKey>) -> Self {
        Self(Arc::new(keys))
    }

    pub fn keys(&self) -> &[RouteKey] {
        &self.0
    }
}

/// Default fallback: a 404 listing the registered routes and the request's
/// consumed/remaining path pair, for operator diagnostics.
#[derive(Debug, Clone, Default)]
pub struct NotFoundApp;

impl Application for NotFoundApp {
    fn handle(&self, req: RouteRequest) -> RouteResponse {
        let mut body = String::from("not found\n");
        if let Some(routes) = req.extensions.get::<RegisteredRoutes>() {
            body.push_str("defined routes:\n");
            for key in routes.keys() {
                let _ = writeln!(body, "  {key}");
            }
        }
        let _ = writeln!(body, "script name: {:?}", req.script_name);
        let _ = writeln!(body, "path info: {:?}", req.path_info);
        let _ = writeln!(body, "host: {:?}", req.host());
        RouteResponse::text(StatusCode::NOT_FOUND, body)
    }
}
