//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for every forwarded call and the backend
//! origin those calls target.

use std::sync::Arc;

use crate::config::PortalConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build the shared upstream client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &PortalConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
