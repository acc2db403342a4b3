//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl BackendTimeouts {
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// Backend origin without a trailing `/`. `/api/<path>` is forwarded to
    /// `<backend_url>/<path>`.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
}

impl PortalConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8080`
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PortalConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let backend_url = parse_backend_url(lookup("BACKEND_URL"))?;
        let timeouts = BackendTimeouts {
            request_secs: parse_or("BACKEND_TIMEOUT_SECS", lookup("BACKEND_TIMEOUT_SECS"), DEFAULT_BACKEND_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "BACKEND_CONNECT_TIMEOUT_SECS",
                lookup("BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            )?,
        };
        if timeouts.request_secs == 0 {
            return Err(ConfigError::Invalid { var: "BACKEND_TIMEOUT_SECS", value: "0".into(), reason: "must be positive" });
        }
        Ok(Self { port, backend_url, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned(), reason: "not a number" }),
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<String, ConfigError> {
    let url = raw
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "BACKEND_URL", value: url.to_owned(), reason: "expected an http(s) URL" });
    }
    Ok(url.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
