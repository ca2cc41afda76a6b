//! The response type applications return.

use http::{header, HeaderMap, HeaderValue, StatusCode};

/// A response produced by an application (or the fallback responder).
///
/// Transport-free counterpart of an `http::Response`: status, headers, and
/// a text body. Serializing it onto a connection is the server layer's job.
#[derive(Debug, Clone)]
pub struct RouteResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RouteResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    /// A `text/plain` response with the given status and body.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// A 200 `text/plain` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::text(StatusCode::OK, body)
    }
}
