use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, User, VALID_TOKEN};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn authed_request(method: &str, uri: &str, token: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::AUTHORIZATION, format!("bearer {token}"))
        .body(body.to_string())
        .unwrap()
}

// --- /UserCreate ---

#[tokio::test]
async fn user_create_returns_201_with_assigned_id() {
    let app = app();
    let resp = app
        .oneshot(authed_request(
            "POST",
            "/UserCreate",
            VALID_TOKEN,
            r#"{"name":"a"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "a");
}

#[tokio::test]
async fn user_create_without_token_returns_401() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/UserCreate")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(r#"{"name":"a"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_create_with_wrong_token_returns_401() {
    let app = app();
    let resp = app
        .oneshot(authed_request("POST", "/UserCreate", "nope", r#"{"name":"a"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_create_malformed_json_returns_400() {
    let app = app();
    let resp = app
        .oneshot(authed_request("POST", "/UserCreate", VALID_TOKEN, "not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "bad");
}

#[tokio::test]
async fn user_create_missing_name_returns_400() {
    let app = app();
    let resp = app
        .oneshot(authed_request(
            "POST",
            "/UserCreate",
            VALID_TOKEN,
            r#"{"username":"a"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_ids_increment_per_create() {
    use tower::Service;

    let mut app = app().into_service();

    for expected_id in 1u64..=3 {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(authed_request(
                "POST",
                "/UserCreate",
                VALID_TOKEN,
                r#"{"name":"n"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let user: User = body_json(resp).await;
        assert_eq!(user.id, expected_id);
    }
}

// --- /status/{code} ---

#[tokio::test]
async fn status_route_reflects_the_requested_code() {
    for code in [200u16, 201, 203, 301, 400, 404, 500] {
        let app = app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/status/{code}"))
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), code);
        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body["status"], code);
    }
}

#[tokio::test]
async fn status_route_accepts_post_and_put() {
    for method in ["POST", "PUT"] {
        let app = app();
        let resp = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/status/202")
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
    }
}

// --- /echo ---

#[tokio::test]
async fn echo_reflects_method_headers_and_body() {
    let app = app();
    let resp = app
        .oneshot(authed_request("PUT", "/echo", VALID_TOKEN, r#"{"k":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["authorization"], "bearer tok123");
    assert_eq!(body["content_type"], "application/json");
    assert_eq!(body["body"], r#"{"k":1}"#);
}

#[tokio::test]
async fn echo_reports_empty_strings_for_absent_headers() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/echo").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["method"], "GET");
    assert_eq!(body["authorization"], "");
    assert_eq!(body["body"], "");
}

// --- /malformed ---

#[tokio::test]
async fn malformed_route_returns_200_with_non_json_body() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/malformed")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "not json");
}
