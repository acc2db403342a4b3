//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper returns `Result<_, ApiError>`. Pages map the variants to
//! inline strings; nothing here panics or logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// 401: the bearer token was missing, expired, or rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// 409: the resource conflicts with an existing one.
    #[error("conflict")]
    Conflict,

    /// Any other non-success status, with the server's `message` if present.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success response whose body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body text.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            409 => Self::Conflict,
            _ => Self::Status { status, message: extract_message(body) },
        }
    }

    /// Server-provided explanation, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the session should be dropped and the user sent to `/login`.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Pull a human-readable message from an error body.
///
/// JSON bodies contribute their `message` field; short plain-text bodies are
/// used verbatim; anything else yields `None`.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') {
        return serde_json::from_str::<ErrorBody>(trimmed)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
    }
    if trimmed.starts_with('<') || trimmed.len() > 200 {
        return None;
    }
    Some(trimmed.to_owned())
}
