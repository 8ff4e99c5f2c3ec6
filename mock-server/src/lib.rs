use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// The bearer token the auth-checked routes accept.
pub const VALID_TOKEN: &str = "tok123";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

pub type Db = Arc<RwLock<HashMap<u64, User>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/UserCreate", post(user_create))
        .route("/status/{code}", any(status_code))
        .route("/echo", any(echo))
        .route("/malformed", any(malformed))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Create a user. Requires `Authorization: bearer <VALID_TOKEN>`; the body
/// must be JSON with a string `name` field.
async fn user_create(
    State(db): State<Db>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    if !bearer_ok(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "unauthorized"})),
        );
    }
    let name = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|payload| payload.get("name").and_then(Value::as_str).map(String::from));
    let Some(name) = name else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "bad"})));
    };

    let mut users = db.write().await;
    let user = User {
        id: users.len() as u64 + 1,
        name,
    };
    users.insert(user.id, user.clone());
    (StatusCode::CREATED, Json(json!(user)))
}

/// Respond with the requested status code and a small JSON body, so clients
/// can exercise their status classification against real HTTP.
async fn status_code(Path(code): Path<u16>) -> (StatusCode, Json<Value>) {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"status": code})))
}

/// Reflect the request back as JSON: method, auth and content-type headers,
/// and body text.
async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Value> {
    let header_text = |name: header::HeaderName| {
        headers
            .get(&name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    Json(json!({
        "method": method.as_str(),
        "authorization": header_text(header::AUTHORIZATION),
        "content_type": header_text(header::CONTENT_TYPE),
        "body": body,
    }))
}

/// A 200 whose body is not JSON, for exercising decode-fault paths.
async fn malformed() -> String {
    "not json".to_string()
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("bearer {VALID_TOKEN}"))
}
