//! Client-side bearer token inspection.
//!
//! The token's payload segment is base64url-decoded and parsed as JSON. The
//! signature is never checked: the result only decides whether a stored
//! session is worth restoring, the backend still authorizes every call.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// The subset of registered claims the client reads.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Subject, usually the username.
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiry in seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<f64>,
}

/// Decode the payload segment of a JWT-shaped token.
/// Returns `None` when the token is not three dot-separated segments or the
/// payload is not base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether `token` must be treated as expired at `now_ms` (milliseconds since
/// the Unix epoch).
///
/// Malformed tokens and tokens without an `exp` claim count as expired.
pub fn is_token_expired(token: &str, now_ms: i64) -> bool {
    #[allow(clippy::cast_precision_loss)]
    let now_ms = now_ms as f64;
    match decode_claims(token).and_then(|claims| claims.exp) {
        Some(exp) => exp * 1000.0 < now_ms,
        None => true,
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}
