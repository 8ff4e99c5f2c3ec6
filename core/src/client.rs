//! Request dispatch: header construction, transport execution, response
//! normalization.
//!
//! # Design
//! `ApiClient` holds only the configured base URL and carries no mutable
//! state between calls. A `dispatch` call splits into building the request
//! as data, executing it over ureq, and normalizing the raw response, so
//! everything but the round-trip itself stays testable without a server.

use log::debug;

use crate::config::Environment;
use crate::error::ApiError;
use crate::http::{ApiRequest, RawResponse, RequestKind};
use crate::response::{normalize, ApiResponse};

/// Synchronous bearer-token client for the JSON API.
///
/// Each call is independent: a fresh agent per request, no session or
/// connection state retained between calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client for one of the fixed deployment environments.
    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint under the configured base.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Issue one request and normalize the outcome.
    ///
    /// `token` is inserted verbatim into the `Authorization: bearer <token>`
    /// header. `body` is attached for POST and PUT and ignored for GET. A
    /// completed call with a non-success status is `Ok` with `is_success`
    /// false; only transport and JSON-decode faults are `Err`.
    pub fn dispatch(
        &self,
        kind: RequestKind,
        url: &str,
        token: &str,
        body: &str,
    ) -> Result<ApiResponse, ApiError> {
        debug!("dispatch {} {url} token:{token}", kind.as_str());
        let request = build_request(kind, url, token, body);
        let result = normalize(execute(&request)?)?;
        debug!(
            "dispatch {} {url} is_success:{}",
            kind.as_str(),
            result.is_success
        );
        Ok(result)
    }
}

/// Assemble the request as data: verb, the exact two-header set, and the
/// payload for body-carrying verbs.
pub fn build_request(kind: RequestKind, url: &str, token: &str, body: &str) -> ApiRequest {
    let headers = vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("Authorization".to_string(), format!("bearer {token}")),
    ];
    let body = match kind {
        RequestKind::Get => None,
        RequestKind::Post | RequestKind::Put => Some(body.to_string()),
    };
    ApiRequest {
        kind,
        url: url.to_string(),
        headers,
        body,
    }
}

/// Execute an `ApiRequest` over ureq and return the raw status and body.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data for the normalizer to classify.
fn execute(request: &ApiRequest) -> Result<RawResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let body = request.body.as_deref().unwrap_or_default();
    let mut response = match request.kind {
        RequestKind::Get => with_headers(agent.get(&request.url), &request.headers).call(),
        RequestKind::Post => {
            with_headers(agent.post(&request.url), &request.headers).send(body.as_bytes())
        }
        RequestKind::Put => {
            with_headers(agent.put(&request.url), &request.headers).send(body.as_bytes())
        }
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(RawResponse { status, body })
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
