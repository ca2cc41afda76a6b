//! Table construction from configuration.
//!
//! Mirrors the split used elsewhere in this crate's config layer: syntax is
//! serde's problem ([`schema`](crate::config::schema)), semantics live here.
//! Application references in the config are opaque names resolved through
//! the injected [`AppLoader`]; this crate never loads code by itself.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::MapConfig;
use crate::error::RouteError;
use crate::http::Application;
use crate::routing::{parse_path_expression, RouteKey, RouteTable};

/// Resolves application references from configuration into handlers.
///
/// The injection seam for whatever application registry the embedding
/// program has: a static map, a plugin host, a DI container.
pub trait AppLoader {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Application>, ResolveError>;
}

/// An application reference could not be resolved.
#[derive(Debug, Error)]
#[error("unable to resolve application {name:?}")]
pub struct ResolveError {
    pub name: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ResolveError {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
        }
    }

    pub fn with_source(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            name: name.into(),
            source: Some(source.into()),
        }
    }
}

/// Errors raised while loading a config file or building a table from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Load a [`MapConfig`] from a TOML file.
pub fn load_config(path: &Path) -> Result<MapConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: MapConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Build a populated [`RouteTable`] from a config.
///
/// Each route's path expression is parsed and normalized, its application
/// reference resolved through `loader`, and the binding installed via
/// [`RouteTable::set`]. A `not_found_app` reference, when present, is
/// resolved the same way and installed as the table's fallback. Loader
/// failures propagate unchanged.
pub fn build_table(loader: &dyn AppLoader, config: &MapConfig) -> Result<RouteTable, ConfigError> {
    let table = match &config.not_found_app {
        Some(name) => RouteTable::with_fallback(loader.resolve(name)?),
        None => RouteTable::new(),
    };

    for entry in &config.routes {
        let url = parse_path_expression(&entry.path)?;
        let key = RouteKey::parse(&url)?;
        let app = loader.resolve(&entry.app)?;
        tracing::info!(route = %key, app = %entry.app, "configured route");
        table.set(key, Some(app));
    }

    Ok(table)
}
