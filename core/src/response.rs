//! Response normalization: status classification and JSON decoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::http::RawResponse;

/// Status codes treated as successful outcomes: the 2xx class restricted to
/// codes with a defined success semantic. Everything else is a failure,
/// including unlisted 2xx values and all redirects.
pub const SUCCESS_STATUS_CODES: [u16; 10] =
    [200, 201, 202, 203, 204, 205, 206, 207, 208, 226];

/// Normalized outcome of one API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// True iff `status_code` is in `SUCCESS_STATUS_CODES`.
    pub is_success: bool,
    /// Raw response body text, kept verbatim for both outcomes.
    pub message: String,
    /// Decoded JSON body. Present iff `is_success`.
    pub data: Option<Value>,
    pub status_code: u16,
}

/// Classify a completed round-trip and decode the body on success.
///
/// A body that fails to decode on a success status is a `Json` fault, not a
/// failure response.
pub fn normalize(raw: RawResponse) -> Result<ApiResponse, ApiError> {
    let is_success = SUCCESS_STATUS_CODES.contains(&raw.status);
    let data = if is_success {
        Some(serde_json::from_str(&raw.body).map_err(|e| ApiError::Json(e.to_string()))?)
    } else {
        None
    };
    Ok(ApiResponse {
        is_success,
        message: raw.body,
        data,
        status_code: raw.status,
    })
}
