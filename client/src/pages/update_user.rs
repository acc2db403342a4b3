//! Profile editor: `GET /users/{id}` to prefill, `PATCH /users/{id}` to save.

#[cfg(test)]
#[path = "update_user_test.rs"]
mod update_user_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_message::{ErrorMessage, SuccessMessage};
use crate::components::input_field::InputField;
use crate::net::error::ApiError;
use crate::net::types::{UpdateResponse, UserUpdate};
use crate::routes::AppRoute;
use crate::state::session::Session;

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const FORBIDDEN_MESSAGE: &str = "You can only edit your own profile.";

/// Admins may edit anyone; everyone else only their own account.
fn can_edit(session: &Session, target_id: &str) -> bool {
    session.is_admin() || session.user_id == target_id
}

fn validate_update(username: &str, email: &str, home_address: &str, password: &str) -> Result<UserUpdate, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() {
        return Err("Username and email are required.");
    }
    Ok(UserUpdate {
        username: username.to_owned(),
        email: email.to_owned(),
        home_address: home_address.trim().to_owned(),
        password: (!password.trim().is_empty()).then(|| password.to_owned()),
    })
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn update_success_message(resp: &UpdateResponse) -> String {
    resp.message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Profile updated successfully!".to_owned())
}

/// Token to store after a successful update. A token issued for another
/// account (admin editing someone else) is never stored.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn reissued_token(resp: &UpdateResponse, editing_self: bool) -> Option<String> {
    resp.token.clone().filter(|t| editing_self && !t.trim().is_empty())
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn update_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) | ApiError::Unavailable => "Network error. Please try again.".to_owned(),
        ApiError::Conflict => "That username or email is already taken.".to_owned(),
        other => other
            .server_message()
            .map_or_else(|| "Failed to update profile.".to_owned(), str::to_owned),
    }
}

#[component]
pub fn UpdateUserPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let target_id = Signal::derive(move || params.read().get("id").unwrap_or_default());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let home_address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let allowed = Signal::derive(move || {
        auth.get().session.as_ref().is_some_and(|s| can_edit(s, &target_id.get()))
    });
    let locked = Signal::derive(move || loading.get() || saving.get() || !allowed.get());

    #[cfg(feature = "hydrate")]
    let alive = super::mounted_flag();

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        let alive = alive.clone();
        Effect::new(move || {
            let id = target_id.get();
            if !allowed.get_untracked() {
                loading.set(false);
                error.set(FORBIDDEN_MESSAGE.to_owned());
                return;
            }
            let token = auth.get_untracked().token().unwrap_or_default().to_owned();
            let navigate = navigate.clone();
            let alive = alive.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_user(&token, &id).await;
                if !super::is_mounted(&alive) {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(user) => {
                        username.set(user.username);
                        email.set(user.email);
                        home_address.set(user.home_address.unwrap_or_default());
                    }
                    Err(e) => {
                        log::warn!("load user {id} failed: {e}");
                        if !crate::util::auth::expire_on_unauthorized(auth, &e, &navigate) {
                            error.set(update_failure_message(&e));
                        }
                    }
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if locked.get() {
            return;
        }
        error.set(String::new());
        message.set(String::new());
        let update = match validate_update(&username.get(), &email.get(), &home_address.get(), &password.get()) {
            Ok(update) => update,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let alive = alive.clone();
            let id = target_id.get_untracked();
            let state = auth.get_untracked();
            let token = state.token().unwrap_or_default().to_owned();
            let editing_self = state.user_id() == Some(id.as_str());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_user(&token, &id, &update).await;
                if !super::is_mounted(&alive) {
                    return;
                }
                saving.set(false);
                match result {
                    Ok(resp) => {
                        if let Some(token) = reissued_token(&resp, editing_self) {
                            auth.update(|a| a.replace_token(token, &crate::util::storage::LocalStorage));
                        }
                        password.set(String::new());
                        message.set(update_success_message(&resp));
                    }
                    Err(e) => {
                        log::warn!("update user {id} failed: {e}");
                        if !crate::util::auth::expire_on_unauthorized(auth, &e, &navigate) {
                            error.set(update_failure_message(&e));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, &navigate);
        }
    };

    view! {
        <div class="update-user-page">
            <h2>"Update Profile"</h2>
            <ErrorMessage message=error/>
            <SuccessMessage message=message/>
            <Show when=move || loading.get()>
                <p class="update-user-page__loading">"Loading profile..."</p>
            </Show>
            <form class="update-user-form" on:submit=on_submit>
                <InputField id="username" label="Username" value=username required=true disabled=locked/>
                <InputField id="email" label="Email" input_type="email" value=email required=true disabled=locked/>
                <InputField id="homeAddress" label="Home Address" value=home_address disabled=locked/>
                <InputField
                    id="password"
                    label="New Password"
                    input_type="password"
                    placeholder="Leave blank to keep current password"
                    value=password
                    disabled=locked
                />
                <button class="btn btn--primary" type="submit" disabled=move || locked.get()>
                    {move || if saving.get() { "Saving..." } else { "Update" }}
                </button>
            </form>
            <A href=AppRoute::Dashboard.path()>"Back to dashboard"</A>
        </div>
    }
}
