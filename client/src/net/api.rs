//! REST helpers for the account backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! host's `/api` prefix.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses are classified by `ApiError::from_status`; transport
//! failures become `ApiError::Network`. Callers decide what to show.
//!
//! The bearer token is passed in explicitly by the caller from the current
//! session rather than held in shared request defaults.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ForgotLoginRequest, LoginResponse, MessageResponse, UpdateResponse, UserRecord, UserUpdate};
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;

/// Path prefix under which the host forwards requests to the backend.
pub const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: &str) -> String {
    format!("{API_BASE}/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::ApiError;

    fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    pub(super) async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
        ensure_ok(req.send().await.map_err(network)?).await
    }

    pub(super) async fn send_json<B: Serialize>(req: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let req = req.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        ensure_ok(req.send().await.map_err(network)?).await
    }

    async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like `read_json`, but an empty body yields `T::default()`.
    pub(super) async fn read_json_or_default<T: DeserializeOwned + Default>(resp: Response) -> Result<T, ApiError> {
        let text = resp.text().await.map_err(network)?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Authenticate via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for rejected credentials, or any other
/// `ApiError` if the request fails.
pub async fn login_user(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = http::send_json(gloo_net::http::Request::post(&endpoint("/auth/login")), &body).await?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Reset username and/or password for the account registered to an email via
/// `POST /auth/forgotLogin`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the backend rejects it.
pub async fn forgot_login(request: &ForgotLoginRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(gloo_net::http::Request::post(&endpoint("/auth/forgotLogin")), request).await?;
        http::read_json_or_default(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Register a new account via `POST /users`.
///
/// # Errors
///
/// Returns `ApiError::Conflict` when the username or email is taken.
pub async fn create_user(user: &UserRecord) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::send_json(gloo_net::http::Request::post(&endpoint("/users")), user).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        Err(ApiError::Unavailable)
    }
}

/// List every account via `GET /users`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not a user list.
pub async fn fetch_users(token: &str) -> Result<Vec<UserRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&endpoint("/users")).header("Authorization", &bearer(token));
        http::read_json(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the account the token belongs to via `GET /users/me`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not a user.
pub async fn fetch_current_user(token: &str) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&endpoint("/users/me")).header("Authorization", &bearer(token));
        http::read_json(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one account via `GET /users/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not a user.
pub async fn fetch_user(token: &str, user_id: &str) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&user_endpoint(user_id)).header("Authorization", &bearer(token));
        http::read_json(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Edit an account via `PATCH /users/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the backend rejects the edit.
pub async fn update_user(token: &str, user_id: &str, update: &UserUpdate) -> Result<UpdateResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::patch(&user_endpoint(user_id)).header("Authorization", &bearer(token));
        http::read_json_or_default(http::send_json(req, update).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id, update);
        Err(ApiError::Unavailable)
    }
}

/// Remove an account via `DELETE /users/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the backend refuses.
pub async fn delete_user(token: &str, user_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::delete(&user_endpoint(user_id)).header("Authorization", &bearer(token));
        http::send(req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err(ApiError::Unavailable)
    }
}
