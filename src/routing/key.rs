//! Route keys and URL normalization.
//!
//! # Responsibilities
//! - Represent a binding's match criteria as a (domain, path) pair
//! - Normalize URL strings and pairs into canonical keys
//! - Reject ambiguous bare relative paths
//!
//! # Design Decisions
//! - Keys are normalized at construction; a `RouteKey` is canonical by type
//! - Stored paths are trimmed (no trailing `/`, root stored as "")
//! - Live request paths keep their trailing `/` (see `normalize_path`)
//! - No regex: slash collapsing is a single manual scan

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RouteError};

/// Match criteria for one binding: an optional host name and a path prefix.
///
/// `domain` is a lower-cased host name, never carrying a scheme or port
/// syntax of its own (a `host:port` domain is matched against the request's
/// `host:port` form). `None` means the binding matches any host not claimed
/// by a more specific domain-scoped binding.
///
/// The path is stored trimmed: `/` collapses to the empty string, so the
/// root binding's path is `""` and it matches every request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    domain: Option<String>,
    path: String,
}

impl RouteKey {
    /// Build a key from a URL string.
    ///
    /// Accepts an absolute path (`/foo`), an `http://` or `https://` URL
    /// (domain split at the first `/`, lower-cased), or the empty string
    /// (the domain-agnostic root). Anything else is an ambiguous relative
    /// path and fails with [`RouteError::BarePath`].
    pub fn parse(url: &str) -> Result<Self> {
        if let Some(rest) = strip_scheme(url) {
            let (domain, path) = match rest.split_once('/') {
                Some((domain, tail)) => (domain, format!("/{tail}")),
                None => (rest, String::new()),
            };
            return Ok(Self {
                domain: Some(domain.to_ascii_lowercase()),
                path: normalize_path(&path, true),
            });
        }
        if !url.is_empty() && !url.starts_with('/') {
            return Err(RouteError::BarePath(url.to_string()));
        }
        Ok(Self {
            domain: None,
            path: normalize_path(url, true),
        })
    }

    /// Build a key from an explicit (domain, path) pair.
    ///
    /// The domain is taken verbatim — callers hand in an already-normalized
    /// host name. Only the path component of `path` is kept, normalized the
    /// same way [`parse`](Self::parse) normalizes it.
    pub fn scoped(domain: impl Into<String>, path: &str) -> Result<Self> {
        let inner = Self::parse(path)?;
        Ok(Self {
            domain: Some(domain.into()),
            path: inner.path,
        })
    }

    /// The domain-agnostic root key; matches every request path.
    pub fn root() -> Self {
        Self {
            domain: None,
            path: String::new(),
        }
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.domain {
            Some(domain) => write!(f, "http://{}{}", domain, self.path),
            None if self.path.is_empty() => f.write_str("/"),
            None => f.write_str(&self.path),
        }
    }
}

impl FromStr for RouteKey {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn strip_scheme(url: &str) -> Option<&str> {
    url.strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
}

/// Collapse runs of `/` and, when `trim` is set, drop a trailing `/`.
///
/// `trim=true` is the stored-key form (`/` becomes ""); `trim=false` is
/// used for live request paths, where a request for exactly `/` must stay
/// distinct from the root binding's empty stored path.
pub(crate) fn normalize_path(path: &str, trim: bool) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for ch in path.chars() {
        if ch == '/' && prev_slash {
            continue;
        }
        prev_slash = ch == '/';
        out.push(ch);
    }
    if trim && out.ends_with('/') {
        out.pop();
    }
    out
}
