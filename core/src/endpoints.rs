//! Concrete endpoint wrappers over `ApiClient::dispatch`.
//!
//! Each wrapper joins its endpoint path onto the client's base URL and
//! forwards the payload untouched. No logic beyond URL construction.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::RequestKind;
use crate::response::ApiResponse;

/// Create a user: POST the raw JSON payload to `<base>/UserCreate`.
pub fn user_create(
    client: &ApiClient,
    token: &str,
    content: &str,
) -> Result<ApiResponse, ApiError> {
    client.dispatch(RequestKind::Post, &client.url_for("UserCreate"), token, content)
}
