use super::*;

#[test]
fn welcome_names_session_role() {
    assert_eq!(welcome_message(Some(&Role::Admin)), "Welcome to ADMIN home page");
    assert_eq!(welcome_message(Some(&Role::Other("AUDITOR".into()))), "Welcome to AUDITOR home page");
}

#[test]
fn welcome_defaults_to_user() {
    assert_eq!(welcome_message(None), "Welcome to user home page");
}
