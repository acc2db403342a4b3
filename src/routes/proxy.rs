//! `/api/*` forwarder.
//!
//! DESIGN
//! ======
//! The host adds no business logic to backend calls. Method, path, query, body
//! and a small allow-list of request headers go upstream unchanged; the
//! backend's status, headers and body come back unchanged. Only transport
//! failures produce responses of our own.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the backend.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Response headers never copied back to the browser.
const HOP_BY_HOP: [HeaderName; 6] = [
    header::CONNECTION,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::TE,
    header::TRAILER,
    header::CONTENT_LENGTH,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid request path: {0}")]
    BadRequest(String),
    #[error("backend unreachable")]
    Unreachable(#[source] reqwest::Error),
    #[error("backend timed out")]
    Timeout(#[source] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout(e) } else { Self::Unreachable(e) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Whether `segment` is `.` or `..`, literally or percent-encoded (`%2e`).
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// The still-encoded request path below `/api/`.
fn raw_tail(uri: &Uri) -> &str {
    uri.path().strip_prefix("/api").unwrap_or_default().trim_start_matches('/')
}

/// Join `base` and the raw (still percent-encoded) `/api` tail into the
/// upstream URL. Encoded characters stay encoded.
///
/// # Errors
///
/// Returns `ProxyError::BadRequest` for dot segments, which could escape the
/// backend's path prefix.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    let path = path.trim_start_matches('/');
    if path.split('/').any(is_dot_segment) {
        return Err(ProxyError::BadRequest(path.to_owned()));
    }
    let mut url = format!("{base}/{path}");
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    Ok(url)
}

/// The allow-listed subset of `headers`.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

fn response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut out = upstream.clone();
    for name in &HOP_BY_HOP {
        out.remove(name);
    }
    out
}

/// Forward one request to the backend and relay its response.
///
/// # Errors
///
/// Returns `ProxyError` when the path is rejected or the backend cannot be
/// reached in time. Backend error statuses are relayed, not errors.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = raw_tail(&uri);
    let url = upstream_url(&state.backend_url, path, uri.query())?;

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, path = %path, error = %e, "backend request failed");
            ProxyError::from(e)
        })?;

    let status = upstream.status();
    let headers = response_headers(upstream.headers());
    let body = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, path = %path, error = %e, "backend body read failed");
        ProxyError::from(e)
    })?;
    tracing::debug!(%method, path = %path, status = status.as_u16(), bytes = body.len(), "proxied");

    Ok((status, headers, body).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
