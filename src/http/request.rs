//! The request view handed to applications.
//!
//! A `RouteRequest` carries the fields dispatch needs (authority, scheme,
//! path) plus the consumed/remaining path split that downstream
//! applications rely on. It is deliberately transport-free: binding it to a
//! listener and parsing it off the wire happen outside this crate.

use http::header;
use http::uri::Scheme;
use http::{Extensions, HeaderMap, HeaderValue, Method, Request};

/// An in-flight request as seen by the dispatch table and applications.
///
/// `script_name` is the concatenation of all route prefixes matched so far;
/// `path_info` is the unconsumed suffix. Dispatch extends the former and
/// shrinks the latter before invoking the matched application.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub method: Method,
    pub scheme: Scheme,
    pub headers: HeaderMap,
    /// Fallback authority when no Host header is present.
    pub server_name: String,
    /// Path prefix consumed by matched routes so far.
    pub script_name: String,
    /// Remaining request path, still to be interpreted downstream.
    pub path_info: String,
    /// Typed side-channel; dispatch uses it to hand diagnostic context to
    /// the fallback application.
    pub extensions: Extensions,
}

impl RouteRequest {
    /// A GET request for `path` with no Host header.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            scheme: Scheme::HTTP,
            headers: HeaderMap::new(),
            server_name: "localhost".to_string(),
            script_name: String::new(),
            path_info: path.into(),
            extensions: Extensions::new(),
        }
    }

    /// Borrow the routing-relevant fields of an `http::Request`.
    ///
    /// `server_name` supplies the authority fallback when the request has
    /// no Host header. The whole request path starts out unconsumed.
    pub fn from_http<B>(req: &Request<B>, server_name: impl Into<String>) -> Self {
        Self {
            method: req.method().clone(),
            scheme: req.uri().scheme().cloned().unwrap_or(Scheme::HTTP),
            headers: req.headers().clone(),
            server_name: server_name.into(),
            script_name: String::new(),
            path_info: req.uri().path().to_string(),
            extensions: Extensions::new(),
        }
    }

    /// Set the Host header. A value that is not a valid header value
    /// leaves the header unchanged.
    pub fn with_host<V>(mut self, host: V) -> Self
    where
        V: TryInto<HeaderValue>,
    {
        if let Ok(value) = host.try_into() {
            self.headers.insert(header::HOST, value);
        }
        self
    }

    /// Switch the URL scheme (affects the default port during dispatch).
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// The Host header value, if present and valid UTF-8.
    pub fn host(&self) -> Option<&str> {
        self.headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
    }

    /// The authority dispatch matches domains against: the Host header,
    /// falling back to `server_name`.
    pub fn authority(&self) -> &str {
        self.host().unwrap_or(&self.server_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_header_wins_over_server_name() {
        let req = RouteRequest::new("/x").with_host("example.com:8080");
        assert_eq!(req.authority(), "example.com:8080");

        let req = RouteRequest::new("/x");
        assert_eq!(req.authority(), "localhost");
    }

    #[test]
    fn host_can_be_built_dynamically() {
        let host = format!("{}.example.com", "api");
        let req = RouteRequest::new("/x").with_host(host.as_str());
        assert_eq!(req.authority(), "api.example.com");
    }

    #[test]
    fn invalid_host_value_is_ignored() {
        let req = RouteRequest::new("/x").with_host("bad\nhost");
        assert_eq!(req.host(), None);
        assert_eq!(req.authority(), "localhost");
    }

    #[test]
    fn from_http_keeps_path_unconsumed() {
        let inner = Request::builder()
            .uri("https://example.com/api/v1")
            .header("Host", "example.com")
            .body(())
            .unwrap();
        let req = RouteRequest::from_http(&inner, "fallback");
        assert_eq!(req.scheme, Scheme::HTTPS);
        assert_eq!(req.script_name, "");
        assert_eq!(req.path_info, "/api/v1");
        assert_eq!(req.authority(), "example.com");
    }
}
