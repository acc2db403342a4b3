use super::*;
use crate::net::types::Role;

fn user(id: &str, username: &str) -> UserRecord {
    UserRecord {
        user_id: Some(id.to_owned()),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        ..UserRecord::default()
    }
}

fn session(user_id: &str, role: Role) -> Session {
    Session { token: "t".into(), user_id: user_id.into(), role }
}

// =============================================================
// can_delete
// =============================================================

#[test]
fn admin_can_delete_other_users() {
    assert_eq!(can_delete(&session("1", Role::Admin), "2"), Ok(()));
}

#[test]
fn admin_cannot_delete_self() {
    assert_eq!(can_delete(&session("1", Role::Admin), "1"), Err("Admins cannot delete their own accounts."));
}

#[test]
fn non_admin_cannot_delete() {
    for role in [Role::Customer, Role::SalesClerk, Role::Other("AUDITOR".into())] {
        assert_eq!(can_delete(&session("1", role), "2"), Err("Unauthorized action."));
    }
}

// =============================================================
// remove_user
// =============================================================

#[test]
fn remove_user_drops_exactly_the_matching_id() {
    let mut users = vec![user("1", "alice"), user("2", "bob"), user("3", "carol")];
    assert!(remove_user(&mut users, "2"));
    let ids: Vec<_> = users.iter().filter_map(|u| u.user_id.as_deref()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn remove_user_with_unknown_id_keeps_list() {
    let mut users = vec![user("1", "alice")];
    assert!(!remove_user(&mut users, "12"));
    assert_eq!(users.len(), 1);
}

#[test]
fn remove_user_does_not_match_rows_without_id() {
    let mut users = vec![UserRecord { user_id: None, ..user("x", "ghost") }, user("1", "alice")];
    assert!(remove_user(&mut users, "1"));
    assert_eq!(users.len(), 1);
    assert!(users[0].user_id.is_none());
}

// =============================================================
// visible_users / messages
// =============================================================

#[test]
fn visible_users_falls_back_to_self() {
    let me = user("5", "eve");
    assert_eq!(visible_users(&me, None), vec![me.clone()]);
    let all = vec![user("1", "alice"), me.clone()];
    assert_eq!(visible_users(&me, Some(all.clone())), all);
}

#[test]
fn failure_messages_prefer_server_text() {
    let err = ApiError::Status { status: 403, message: Some("Forbidden".into()) };
    assert_eq!(load_failure_message(&err), "Failed to load users: Forbidden");
    assert_eq!(delete_failure_message(&err), "Forbidden");
    let bare = ApiError::Network("offline".into());
    assert_eq!(load_failure_message(&bare), "Failed to load users.");
    assert_eq!(delete_failure_message(&bare), "Failed to delete user.");
}
