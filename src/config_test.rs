use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<PortalConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    PortalConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_when_env_is_empty() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn parses_overrides_and_trims_trailing_slash() {
    let cfg = config_from(&[
        ("PORT", "8081"),
        ("BACKEND_URL", "https://accounts.example.test/api/"),
        ("BACKEND_TIMEOUT_SECS", "12"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", "2"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.backend_url, "https://accounts.example.test/api");
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(12));
    assert_eq!(cfg.timeouts.connect(), Duration::from_secs(2));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", " "), ("BACKEND_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_port_is_an_error() {
    let err = config_from(&[("PORT", "http")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into(), reason: "not a number" });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn invalid_timeouts_are_errors() {
    assert!(config_from(&[("BACKEND_CONNECT_TIMEOUT_SECS", "-1")]).is_err());
    assert!(config_from(&[("BACKEND_TIMEOUT_SECS", "0")]).is_err());
}

#[test]
fn backend_url_requires_http_scheme() {
    let err = config_from(&[("BACKEND_URL", "localhost:8080")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_URL", .. }));
}
