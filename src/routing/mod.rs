//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Config line ("domain example.com /api")
//!     → expr.rs (path expression → normalized URL string)
//!     → key.rs (URL string → canonical RouteKey)
//!     → table.rs (sorted bindings, per-request dispatch)
//! ```
//!
//! # Design Decisions
//! - Keys are canonical by construction; the table never re-normalizes
//! - Most-specific-first ordering: domain-scoped, then longest path
//! - No regex in hot path (prefix matching only)
//! - First match wins, deterministically

pub mod expr;
pub mod key;
pub mod table;

pub use expr::parse_path_expression;
pub use key::RouteKey;
pub use table::RouteTable;
