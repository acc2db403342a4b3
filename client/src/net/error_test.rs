use super::*;

#[test]
fn from_status_maps_401_to_unauthorized() {
    let err = ApiError::from_status(401, r#"{"message":"expired"}"#);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
}

#[test]
fn from_status_maps_409_to_conflict() {
    assert_eq!(ApiError::from_status(409, ""), ApiError::Conflict);
}

#[test]
fn from_status_keeps_json_message() {
    let err = ApiError::from_status(400, r#"{"message":"Username must be between 4 and 20 characters"}"#);
    assert_eq!(err.server_message(), Some("Username must be between 4 and 20 characters"));
    assert!(!err.is_unauthorized());
}

#[test]
fn from_status_uses_short_plain_text_body() {
    let err = ApiError::from_status(404, "User not found");
    assert_eq!(err, ApiError::Status { status: 404, message: Some("User not found".to_owned()) });
}

#[test]
fn extract_message_ignores_html_and_blank_bodies() {
    assert_eq!(extract_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_message("   "), None);
}

#[test]
fn extract_message_ignores_json_without_message() {
    assert_eq!(extract_message(r#"{"error":"x"}"#), None);
    assert_eq!(extract_message(r#"{"message":"  "}"#), None);
}

#[test]
fn extract_message_ignores_oversized_text() {
    assert_eq!(extract_message(&"x".repeat(201)), None);
}

#[test]
fn network_errors_are_flagged() {
    assert!(ApiError::Network("dns".into()).is_network());
    assert!(!ApiError::Conflict.is_network());
}

#[test]
fn display_includes_status() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.to_string(), "request failed with status 500");
}
