//! Synchronous bearer-token client for the JSON API.
//!
//! # Overview
//! One entry point, `ApiClient::dispatch`, issues a GET/POST/PUT request
//! with `content-type: application/json` and `Authorization: bearer <token>`
//! headers, classifies the response status against a fixed success set, and
//! decodes successful bodies into `serde_json::Value`.
//!
//! # Design
//! - `ApiClient` is stateless — it holds only the configured base URL,
//!   passed at construction instead of read from a process-wide constant.
//! - A call splits into build (`ApiRequest` as data), execute (ureq), and
//!   normalize (`ApiResponse`), so everything but the round-trip itself is
//!   testable without a network.
//! - Non-success statuses are data (`is_success == false`), not errors;
//!   only transport and JSON-decode faults surface as `ApiError`.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod response;

pub use client::{build_request, ApiClient};
pub use config::Environment;
pub use error::ApiError;
pub use http::{ApiRequest, RawResponse, RequestKind};
pub use response::{normalize, ApiResponse, SUCCESS_STATUS_CODES};
