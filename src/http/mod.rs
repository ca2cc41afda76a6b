//! Application-facing request/response surface.
//!
//! # Data Flow
//! ```text
//! http::Request (or hand-built RouteRequest)
//!     → request.rs (authority, scheme, consumed/remaining path)
//!     → [routing table picks an application]
//!     → handler.rs (Application trait, fallback responder)
//!     → response.rs (status, headers, body)
//! ```

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{Application, NotFoundApp, RegisteredRoutes};
pub use request::RouteRequest;
pub use response::RouteResponse;
