//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → MapConfig (routes as path expressions + app names)
//!     → build_table: expression → RouteKey, app name → AppLoader::resolve
//!     → populated RouteTable
//! ```
//!
//! # Design Decisions
//! - Syntactic validation is serde's; route semantics fail in build_table
//! - Applications are never loaded here, only resolved through AppLoader
//! - Loader failures propagate unchanged to the construction caller

pub mod loader;
pub mod schema;

pub use loader::{build_table, load_config, AppLoader, ConfigError, ResolveError};
pub use schema::{MapConfig, RouteEntry};
