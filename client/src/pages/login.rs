//! Login page: username + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_message::ErrorMessage;
use crate::components::input_field::InputField;
use crate::net::types::{LoginResponse, Role};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::session::Session;

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const LOGIN_FAILED: &str = "Invalid credentials or server error.";

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Build a session from a login response. The token, user ID and a role
/// parsed from `roleMessage` must all be present.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn session_from_response(resp: LoginResponse) -> Option<Session> {
    let token = resp.token.filter(|t| !t.trim().is_empty())?;
    let user_id = resp.user_id.filter(|id| !id.trim().is_empty())?;
    let role = resp.role_message.as_deref().and_then(Role::from_role_message)?;
    Some(Session { token, user_id, role })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate_home(AppRoute::Dashboard.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login_user(&username_value, &password_value).await;
                match result.map(session_from_response) {
                    Ok(Some(session)) => {
                        log::info!("login succeeded for user {}", session.user_id);
                        auth.update(|a| a.login(session, &crate::util::storage::LocalStorage));
                        navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                    }
                    Ok(None) => {
                        log::warn!("login response missing token, userId or role");
                        error.set(LOGIN_FAILED.to_owned());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(LOGIN_FAILED.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <InputField id="username" label="Username" value=username required=true disabled=busy/>
                    <InputField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=password
                        required=true
                        disabled=busy
                    />
                    <ErrorMessage message=error/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <div class="login-card__links">
                    <A href=AppRoute::CreateUser.path()>"Register New User"</A>
                    <A href=AppRoute::ForgotLogin.path()>"Forgot My Password"</A>
                </div>
            </div>
        </div>
    }
}
