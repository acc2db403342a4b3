use super::*;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "  Alice ".into(),
        last_name: "Walker".into(),
        username: "alicew".into(),
        email: " alice@example.com ".into(),
        phone_number: "  ".into(),
        home_address: " 1 Main St ".into(),
        password: " secret ".into(),
        role: "CUSTOMER".into(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_trims_fields_but_not_password() {
    let user = valid_form().validate().unwrap();
    assert_eq!(user.first_name.as_deref(), Some("Alice"));
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.home_address.as_deref(), Some("1 Main St"));
    assert_eq!(user.phone_number, None);
    assert_eq!(user.password.as_deref(), Some(" secret "));
    assert_eq!(user.role, Some(Role::Customer));
    assert!(user.user_id.is_none());
}

#[test]
fn validate_enforces_name_lengths() {
    let mut form = valid_form();
    form.first_name = "Al".into();
    assert_eq!(form.validate(), Err("First name must be between 4 and 30 characters."));

    let mut form = valid_form();
    form.last_name = "W".repeat(21);
    assert_eq!(form.validate(), Err("Last name must be between 4 and 20 characters."));
}

#[test]
fn validate_enforces_username_length() {
    let mut form = valid_form();
    form.username = "abc".into();
    assert_eq!(form.validate(), Err("Username must be between 4 and 20 characters."));
    form.username = "abcd".into();
    assert!(form.validate().is_ok());
}

#[test]
fn validate_requires_email_with_at_sign() {
    let mut form = valid_form();
    form.email = "alice.example.com".into();
    assert_eq!(form.validate(), Err("Enter a valid email address."));
}

#[test]
fn validate_requires_six_char_password() {
    let mut form = valid_form();
    form.password = "12345".into();
    assert_eq!(form.validate(), Err("Password must be at least 6 characters."));
}

#[test]
fn validate_requires_role() {
    let mut form = valid_form();
    form.role = String::new();
    assert_eq!(form.validate(), Err("Select a role."));
}

// =============================================================
// registration_error_message
// =============================================================

#[test]
fn conflict_maps_to_duplicate_account_message() {
    assert_eq!(registration_error_message(&ApiError::Conflict), CONFLICT_MESSAGE);
}

#[test]
fn status_uses_server_message_then_status_code() {
    let with_message = ApiError::Status { status: 400, message: Some("Email must be valid".into()) };
    assert_eq!(registration_error_message(&with_message), "Email must be valid");
    let bare = ApiError::Status { status: 500, message: None };
    assert_eq!(registration_error_message(&bare), "Error: 500");
}

#[test]
fn network_failure_maps_to_connection_message() {
    assert_eq!(registration_error_message(&ApiError::Network("refused".into())), NETWORK_MESSAGE);
}
