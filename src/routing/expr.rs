//! Path-expression parsing.
//!
//! Configuration files name routes with lines of the form
//! `[domain <name>] [port <n>] <path>`, e.g. `domain example.com port 8080 /api`.
//! This module turns such a line into the normalized URL string
//! `http://<domain>[:<port>]<path>` that [`RouteKey::parse`] accepts.
//!
//! [`RouteKey::parse`]: crate::RouteKey::parse

use crate::error::{Result, RouteError};

/// Parse a path expression into a normalized URL string.
///
/// A pure string transformation, independent of the table. Fails when a
/// `domain` or `port` token has no value or is given twice, when more than
/// one bare path is supplied, or when `port` appears without `domain`.
pub fn parse_path_expression(expr: &str) -> Result<String> {
    let mut domain: Option<&str> = None;
    let mut port: Option<&str> = None;
    let mut path: Option<&str> = None;

    let mut parts = expr.split_whitespace();
    while let Some(part) = parts.next() {
        match part {
            "domain" => {
                let value = parts.next().ok_or(RouteError::MissingValue("domain"))?;
                if domain.is_some() {
                    return Err(RouteError::DuplicateToken("domain"));
                }
                domain = Some(value);
            }
            "port" => {
                let value = parts.next().ok_or(RouteError::MissingValue("port"))?;
                if port.is_some() {
                    return Err(RouteError::DuplicateToken("port"));
                }
                port = Some(value);
            }
            other => {
                if let Some(have) = path {
                    return Err(RouteError::ExtraPath {
                        have: have.to_string(),
                        got: other.to_string(),
                    });
                }
                path = Some(other);
            }
        }
    }

    if port.is_some() && domain.is_none() {
        return Err(RouteError::PortWithoutDomain);
    }

    let mut url = String::new();
    if let Some(domain) = domain {
        url.push_str("http://");
        url.push_str(domain);
    }
    if let Some(port) = port {
        url.push(':');
        url.push_str(port);
    }
    if let Some(path) = path {
        if !url.is_empty() && !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path);
    }
    Ok(url)
}
