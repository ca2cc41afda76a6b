//! Routing error types.
//!
//! Everything except [`RouteError::NotFound`] is a setup-time input error:
//! a malformed route key or path expression aborts table construction and
//! is never retried. `NotFound` is the recoverable exact-key miss raised by
//! [`RouteTable::get`](crate::RouteTable::get) and
//! [`RouteTable::remove`](crate::RouteTable::remove).

use thiserror::Error;

use crate::routing::RouteKey;

/// Result type for routing operations.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors raised while building route keys or looking them up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A bare relative path was given where a route is expected.
    /// Unscoped relative paths are ambiguous, so they are rejected.
    #[error("route must start with '/' or 'http://' (got {0:?})")]
    BarePath(String),

    /// A `domain` or `port` token in a path expression had no value.
    #[error("'{0}' must be followed by a value")]
    MissingValue(&'static str),

    /// A `domain` or `port` token appeared twice in a path expression.
    #[error("'{0}' given twice")]
    DuplicateToken(&'static str),

    /// More than one bare path segment in a path expression.
    #[error("more than one path given (have {have:?}, got {got:?})")]
    ExtraPath { have: String, got: String },

    /// `port` appeared in a path expression without a `domain`.
    #[error("'port' requires a 'domain'")]
    PortWithoutDomain,

    /// Exact-key lookup or removal found no binding.
    #[error("no application bound for {key}")]
    NotFound { key: RouteKey },
}

impl RouteError {
    /// True for the exact-key miss; false for the invalid-route family.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}
