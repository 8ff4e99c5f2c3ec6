//! HTTP request and response data types.
//!
//! # Design
//! A request is described as plain data before any I/O happens: the
//! dispatcher builds an `ApiRequest`, the transport executes it, and the
//! normalizer consumes the resulting `RawResponse`. Keeping the three steps
//! separate makes header construction and status classification testable
//! without a network.

/// HTTP verb for a dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Get,
    Post,
    Put,
}

impl RequestKind {
    /// Wire name of the verb, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Get => "GET",
            RequestKind::Post => "POST",
            RequestKind::Put => "PUT",
        }
    }
}

/// An HTTP request described as plain data, ready for execution.
///
/// Built by `build_request`. `body` is `None` for GET: the dispatcher drops
/// any payload it was handed for body-less verbs.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub kind: RequestKind,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Status code and body text of a completed HTTP round-trip, before
/// normalization.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}
