//! The route table: sorted bindings and per-request dispatch.
//!
//! # Data Flow
//! ```text
//! Incoming RouteRequest (host, scheme, path)
//!     → extract host / host:port authority
//!     → scan bindings in invariant order (most specific first)
//!     → matched: peel prefix off path_info, invoke application
//!     → unmatched: attach route diagnostics, invoke fallback
//! ```
//!
//! # Design Decisions
//! - Bindings live in an immutable snapshot (`arc-swap`); dispatch, `get`
//!   and `keys` never take a lock, writers serialize on a master copy
//! - Sort invariant maintained on every structural change, never at read
//! - First match wins; order encodes domain-specificity and prefix length
//! - An unmatched request is not an error, it invokes the fallback

use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard};

use arc_swap::ArcSwap;
use http::uri::Scheme;

use crate::error::{Result, RouteError};
use crate::http::{Application, NotFoundApp, RegisteredRoutes, RouteRequest, RouteResponse};
use crate::routing::key::{normalize_path, RouteKey};

/// One (key, application) entry in the table.
#[derive(Clone)]
struct Binding {
    key: RouteKey,
    app: Arc<dyn Application>,
}

/// Dispatches requests to one of several applications by host and path
/// prefix, longest match first.
///
/// Bindings are kept sorted: domain-scoped keys before domain-agnostic
/// ones, longer paths before shorter ones within a group. Dispatch scans in
/// that order and the first binding whose domain fits the request's host
/// and whose path is the request path or a segment prefix of it wins.
///
/// ```
/// # use std::sync::Arc;
/// # use urlmux::{RouteKey, RouteRequest, RouteResponse, RouteTable};
/// let table = RouteTable::new();
/// table.set(
///     RouteKey::parse("/api")?,
///     Some(Arc::new(|req: RouteRequest| RouteResponse::ok(req.path_info))),
/// );
///
/// let (resp, matched) = table.dispatch(RouteRequest::new("/api/users"));
/// assert_eq!(resp.body, "/users");
/// assert_eq!(matched, Some(RouteKey::parse("/api")?));
/// # Ok::<(), urlmux::RouteError>(())
/// ```
pub struct RouteTable {
    /// Authoritative copy; writers lock it for the whole mutation.
    master: Mutex<Vec<Binding>>,
    /// Published sorted view; readers load it lock-free.
    snapshot: ArcSwap<Vec<Binding>>,
    fallback: Arc<dyn Application>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.keys())
            .finish_non_exhaustive()
    }
}

impl RouteTable {
    /// An empty table with the built-in 404 fallback.
    pub fn new() -> Self {
        Self::with_fallback(Arc::new(NotFoundApp))
    }

    /// An empty table with a caller-supplied fallback application.
    pub fn with_fallback(fallback: Arc<dyn Application>) -> Self {
        Self {
            master: Mutex::new(Vec::new()),
            snapshot: ArcSwap::from_pointee(Vec::new()),
            fallback,
        }
    }

    fn lock_master(&self) -> MutexGuard<'_, Vec<Binding>> {
        match self.master.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn publish(&self, bindings: &[Binding]) {
        self.snapshot.store(Arc::new(bindings.to_vec()));
    }

    /// Bind `app` to `key`, replacing any existing binding for the exact
    /// key. `None` clears the binding instead, swallowing a miss.
    pub fn set(&self, key: RouteKey, app: Option<Arc<dyn Application>>) {
        let Some(app) = app else {
            let _ = self.remove(&key);
            return;
        };
        let mut bindings = self.lock_master();
        if let Some(slot) = bindings.iter_mut().find(|b| b.key == key) {
            slot.app = app;
        } else {
            tracing::debug!(route = %key, "binding route");
            bindings.push(Binding { key, app });
            // Stable sort keeps insertion order among equal keys.
            bindings.sort_by(|a, b| invariant_order(&a.key, &b.key));
        }
        self.publish(bindings.as_slice());
    }

    /// The application bound to exactly `key` (no prefix matching).
    pub fn get(&self, key: &RouteKey) -> Result<Arc<dyn Application>> {
        self.snapshot
            .load()
            .iter()
            .find(|b| b.key == *key)
            .map(|b| b.app.clone())
            .ok_or_else(|| RouteError::NotFound { key: key.clone() })
    }

    /// Delete the binding for exactly `key`.
    pub fn remove(&self, key: &RouteKey) -> Result<()> {
        let mut bindings = self.lock_master();
        let pos = bindings
            .iter()
            .position(|b| b.key == *key)
            .ok_or_else(|| RouteError::NotFound { key: key.clone() })?;
        bindings.remove(pos);
        tracing::debug!(route = %key, "removed route");
        self.publish(bindings.as_slice());
        Ok(())
    }

    /// The bound keys in invariant order (a point-in-time view).
    pub fn keys(&self) -> Vec<RouteKey> {
        self.snapshot.load().iter().map(|b| b.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }

    /// Route `req` to the best-matching application.
    ///
    /// Returns the application's response and the matched key, or the
    /// fallback's response and `None` when nothing matched. On a match the
    /// invoked application sees `script_name` extended by the matched
    /// prefix and `path_info` reduced to the unconsumed suffix; the
    /// fallback sees the request unmodified, plus a [`RegisteredRoutes`]
    /// extension listing what was bound.
    pub fn dispatch(&self, mut req: RouteRequest) -> (RouteResponse, Option<RouteKey>) {
        let authority = req.authority().to_ascii_lowercase();
        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => (host.to_string(), port.to_string()),
            None => {
                let port = if req.scheme == Scheme::HTTP { "80" } else { "443" };
                (authority, port.to_string())
            }
        };
        let hostport = format!("{host}:{port}");

        // trim=false: a request for exactly "/" stays "/", distinct from
        // the root binding's empty stored path.
        let path = normalize_path(&req.path_info, false);

        let bindings = self.snapshot.load_full();
        for binding in bindings.iter() {
            if let Some(domain) = binding.key.domain() {
                if domain != host && domain != hostport {
                    continue;
                }
            }
            let prefix = binding.key.path();
            if path == prefix || is_segment_prefix(&path, prefix) {
                req.script_name.push_str(prefix);
                req.path_info = path[prefix.len()..].to_string();
                tracing::debug!(
                    route = %binding.key,
                    script_name = %req.script_name,
                    path_info = %req.path_info,
                    "dispatching"
                );
                return (binding.app.handle(req), Some(binding.key.clone()));
            }
        }

        tracing::debug!(host = %host, path = %path, "no route matched, invoking fallback");
        req.extensions.insert(RegisteredRoutes::new(
            bindings.iter().map(|b| b.key.clone()).collect(),
        ));
        (self.fallback.handle(req), None)
    }
}

/// Domain-scoped keys first (ordered by domain), then longer paths first.
fn invariant_order(a: &RouteKey, b: &RouteKey) -> Ordering {
    let domains = match (a.domain(), b.domain()) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    domains.then(b.path().len().cmp(&a.path().len()))
}

/// True when `prefix` matches a whole leading segment run of `path`, i.e.
/// `path` starts with `prefix` immediately followed by `/`. A plain
/// `starts_with` would let `/foo` claim `/foobar`.
fn is_segment_prefix(path: &str, prefix: &str) -> bool {
    path.starts_with(prefix) && path.as_bytes().get(prefix.len()) == Some(&b'/')
}
