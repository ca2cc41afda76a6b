//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Route paths use the path-expression syntax
//! (`[domain <name>] [port <n>] <path>`); application names are resolved
//! through the caller's [`AppLoader`](crate::config::AppLoader).

use serde::{Deserialize, Serialize};

/// Root configuration for a dispatch table.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MapConfig {
    /// Application resolved as the fallback for unmatched requests.
    /// Absent means the built-in 404 responder.
    pub not_found_app: Option<String>,

    /// Route definitions, in no particular order (the table sorts).
    pub routes: Vec<RouteEntry>,
}

/// One route line: a path expression and the application bound to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteEntry {
    /// Path expression, e.g. `/api` or `domain example.com port 8080 /`.
    pub path: String,

    /// Application reference, resolved through the injected loader.
    pub app: String,
}
