//! urlmux — dispatch requests to sub-applications by host and path prefix.
//!
//! A library-only port of the classic URL-map pattern: an ordered table of
//! `(domain, path)` → application bindings, matched most-specific-first
//! (domain-scoped before domain-agnostic, longest path prefix first). The
//! matched prefix is peeled off the request path before the bound
//! application runs, so applications compose under any mount point.
//!
//! ```text
//! RouteRequest (host, scheme, path)
//!     → routing (RouteKey normalization, sorted table, dispatch)
//!     → http (Application contract, fallback responder)
//!     → RouteResponse
//!
//! Config file / path expressions
//!     → config (schema, AppLoader resolution)
//!     → populated RouteTable
//! ```
//!
//! Transport binding, raw request parsing, and response serialization are
//! out of scope; pair the table with whatever server stack owns the wire.

pub mod config;
pub mod error;
pub mod http;
pub mod routing;

pub use config::{build_table, load_config, AppLoader, ConfigError, MapConfig, ResolveError, RouteEntry};
pub use error::RouteError;
pub use http::{Application, NotFoundApp, RegisteredRoutes, RouteRequest, RouteResponse};
pub use routing::{parse_path_expression, RouteKey, RouteTable};
