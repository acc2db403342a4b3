use super::*;
use crate::config::{BackendTimeouts, PortalConfig};
use axum::Router;
use axum::extract::{Path, RawQuery};
use axum::http::HeaderValue;
use axum::routing::{patch, post};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::Duration;

// =============================================================
// Helpers
// =============================================================

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve should run");
    });
    format!("http://{addr}")
}

/// Stand-in for the account backend. Echoes what it received.
fn mock_backend() -> Router {
    Router::new()
        .route(
            "/users/{id}",
            patch(|Path(id): Path<String>, RawQuery(query): RawQuery, headers: HeaderMap, body: String| async move {
                Json(json!({
                    "id": id,
                    "query": query,
                    "authorization": headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
                    "cookie": headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
                    "body": body,
                }))
            }),
        )
        .route(
            "/auth/login",
            post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" }))) }),
        )
        .route(
            "/slow",
            axum::routing::get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "late"
            }),
        )
}

fn config(backend_url: &str, request_secs: u64) -> PortalConfig {
    PortalConfig {
        port: 0,
        backend_url: backend_url.to_owned(),
        timeouts: BackendTimeouts { request_secs, connect_secs: 1 },
    }
}

async fn spawn_portal(backend_url: &str, request_secs: u64) -> String {
    let state = AppState::new(&config(backend_url, request_secs)).expect("client should build");
    spawn(crate::routes::api_routes(state)).await
}

// =============================================================
// upstream_url
// =============================================================

#[test]
fn upstream_url_joins_base_path_and_query() {
    let url = upstream_url("http://backend:8080", "users/7", Some("full=true")).unwrap();
    assert_eq!(url, "http://backend:8080/users/7?full=true");
}

#[test]
fn upstream_url_skips_empty_query() {
    assert_eq!(upstream_url("http://b", "/auth/login", Some("")).unwrap(), "http://b/auth/login");
    assert_eq!(upstream_url("http://b", "users", None).unwrap(), "http://b/users");
}

#[test]
fn upstream_url_rejects_dot_segments() {
    for path in ["../admin", "users/../../etc", "users/./me"] {
        let err = upstream_url("http://b", path, None).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST, "{path}");
    }
}

#[test]
fn upstream_url_rejects_encoded_dot_segments() {
    for path in ["%2e%2e/admin", "users/%2E%2E/etc", "users/.%2e", "%2e/me"] {
        assert!(upstream_url("http://b", path, None).is_err(), "{path}");
    }
}

#[test]
fn upstream_url_keeps_percent_encoding() {
    let url = upstream_url("http://b", "users/me%3Frole=ADMIN%2Fx%23y", None).unwrap();
    assert_eq!(url, "http://b/users/me%3Frole=ADMIN%2Fx%23y");
}

#[test]
fn raw_tail_strips_api_prefix_without_decoding() {
    let uri: Uri = "/api/users/me%3Frole=ADMIN?x=1".parse().unwrap();
    assert_eq!(raw_tail(&uri), "users/me%3Frole=ADMIN");
}

#[test]
fn upstream_url_allows_dots_inside_segments() {
    assert_eq!(upstream_url("http://b", "files/a..b.txt", None).unwrap(), "http://b/files/a..b.txt");
}

// =============================================================
// forwarded_headers
// =============================================================

#[test]
fn forwarded_headers_keeps_only_allow_list() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    headers.insert(header::HOST, HeaderValue::from_static("portal.local"));

    let out = forwarded_headers(&headers);

    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap().to_str().unwrap(), "Bearer abc");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn response_headers_drop_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));

    let out = response_headers(&headers);

    assert_eq!(out.len(), 1);
    assert!(out.contains_key(header::CONTENT_TYPE));
}

// =============================================================
// forward (end to end)
// =============================================================

#[tokio::test]
async fn forward_relays_method_path_query_auth_and_body() {
    let backend = spawn(mock_backend()).await;
    let portal = spawn_portal(&backend, 5).await;

    let resp = reqwest::Client::new()
        .patch(format!("{portal}/api/users/42?x=1"))
        .header(header::AUTHORIZATION, "Bearer t0k")
        .header(header::COOKIE, "sid=1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"username":"alice"}"#)
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(body["id"], "42");
    assert_eq!(body["query"], "x=1");
    assert_eq!(body["authorization"], "Bearer t0k");
    assert_eq!(body["cookie"], Value::Null);
    assert_eq!(body["body"], r#"{"username":"alice"}"#);
}

#[tokio::test]
async fn forward_keeps_encoded_query_marker_inside_path() {
    let backend = spawn(mock_backend()).await;
    let portal = spawn_portal(&backend, 5).await;

    let resp = reqwest::Client::new()
        .patch(format!("{portal}/api/users/me%3Frole=ADMIN"))
        .body("{}")
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(body["id"], "me?role=ADMIN");
    assert_eq!(body["query"], Value::Null);
}

#[tokio::test]
async fn forward_relays_backend_error_status_and_body() {
    let backend = spawn(mock_backend()).await;
    let portal = spawn_portal(&backend, 5).await;

    let resp = reqwest::Client::new()
        .post(format!("{portal}/api/auth/login"))
        .body("{}")
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn unreachable_backend_maps_to_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let portal = spawn_portal(&dead, 5).await;

    let resp = reqwest::get(format!("{portal}/api/users")).await.expect("request should succeed");

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(body["message"], "backend unreachable");
}

#[tokio::test]
async fn slow_backend_maps_to_gateway_timeout() {
    let backend = spawn(mock_backend()).await;
    let portal = spawn_portal(&backend, 1).await;

    let resp = reqwest::get(format!("{portal}/api/slow")).await.expect("request should succeed");

    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn healthz_is_ok() {
    let portal = spawn_portal("http://127.0.0.1:9", 1).await;
    let resp = reqwest::get(format!("{portal}/healthz")).await.expect("request should succeed");
    assert_eq!(resp.status(), StatusCode::OK);
}
