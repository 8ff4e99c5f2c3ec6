//! Error types for the API client.
//!
//! # Design
//! Only faults are errors. A completed round-trip with a non-success status
//! code is not an error: it comes back as an `ApiResponse` with
//! `is_success` false so callers can inspect the status and body. The
//! variants here cover the paths where no usable response exists at all.

use std::fmt;

/// Faults raised by `ApiClient::dispatch`.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed: DNS failure, connection refused, TLS
    /// error, or the response body could not be read.
    Transport(String),

    /// The server reported a success status but the body was not valid JSON.
    Json(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Json(msg) => write!(f, "JSON decode failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
