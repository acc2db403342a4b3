use super::*;
use crate::net::types::Role;
use crate::state::session::Session;

fn logged_out() -> AuthState {
    AuthState { session: None, loading: false }
}

fn logged_in() -> AuthState {
    AuthState {
        session: Some(Session { token: "t".into(), user_id: "1".into(), role: Role::Customer }),
        loading: false,
    }
}

const PROTECTED: [AppRoute; 4] = [AppRoute::Dashboard, AppRoute::Profile, AppRoute::Home, AppRoute::UpdateUser];
const PUBLIC: [AppRoute; 3] = [AppRoute::Login, AppRoute::ForgotLogin, AppRoute::CreateUser];

#[test]
fn protected_routes_redirect_to_login_when_logged_out() {
    for route in PROTECTED {
        assert_eq!(guard(route, &logged_out()), RouteDecision::Redirect("/login"), "{route:?}");
    }
}

#[test]
fn protected_routes_render_when_logged_in() {
    for route in PROTECTED {
        assert_eq!(guard(route, &logged_in()), RouteDecision::Render, "{route:?}");
    }
}

#[test]
fn protected_routes_wait_while_auth_loads() {
    for route in PROTECTED {
        assert_eq!(guard(route, &AuthState::default()), RouteDecision::Pending, "{route:?}");
    }
}

#[test]
fn public_routes_always_render() {
    for route in PUBLIC {
        assert_eq!(guard(route, &logged_out()), RouteDecision::Render);
        assert_eq!(guard(route, &logged_in()), RouteDecision::Render);
        assert_eq!(guard(route, &AuthState::default()), RouteDecision::Render);
    }
}

#[test]
fn root_redirects_by_auth_state() {
    assert_eq!(guard(AppRoute::Root, &logged_out()), RouteDecision::Redirect("/login"));
    assert_eq!(guard(AppRoute::Root, &logged_in()), RouteDecision::Redirect("/dashboard"));
    assert_eq!(guard(AppRoute::Root, &AuthState::default()), RouteDecision::Pending);
}

#[test]
fn paths_match_segments() {
    for route in PROTECTED.into_iter().chain(PUBLIC) {
        assert_eq!(route.path(), format!("/{}", route.segment()));
    }
}

#[test]
fn update_user_path_appends_id() {
    assert_eq!(update_user_path("42"), "/update-user/42");
}
