//! Dashboard page: the current user's account, plus the full user list with
//! delete actions for admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it loads `GET /users/me`
//! and, when the session role is admin, `GET /users`. Role gating here only
//! decides what to render; the backend still authorizes every call.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_message::{ErrorMessage, SuccessMessage};
use crate::components::user_table::UserTable;
use crate::net::error::ApiError;
use crate::net::types::UserRecord;
use crate::routes::update_user_path;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::auth::logout_and_redirect;

/// Client-side check before `DELETE /users/{id}`.
fn can_delete(session: &Session, target_id: &str) -> Result<(), &'static str> {
    if !session.is_admin() {
        return Err("Unauthorized action.");
    }
    if session.user_id == target_id {
        return Err("Admins cannot delete their own accounts.");
    }
    Ok(())
}

/// Drop exactly the row whose ID is `user_id`. Returns whether one was removed.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn remove_user(users: &mut Vec<UserRecord>, user_id: &str) -> bool {
    let before = users.len();
    users.retain(|u| u.user_id.as_deref() != Some(user_id));
    users.len() != before
}

/// Rows to show: everyone for admins, otherwise just `me`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn visible_users(me: &UserRecord, all: Option<Vec<UserRecord>>) -> Vec<UserRecord> {
    all.unwrap_or_else(|| vec![me.clone()])
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn load_failure_message(err: &ApiError) -> String {
    match err.server_message() {
        Some(msg) => format!("Failed to load users: {msg}"),
        None => "Failed to load users.".to_owned(),
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn delete_failure_message(err: &ApiError) -> String {
    err.server_message().map_or_else(|| "Failed to delete user.".to_owned(), str::to_owned)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let me = RwSignal::new(None::<UserRecord>);
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let delete_target = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let alive = super::mounted_flag();

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        let alive = alive.clone();
        let state = auth.get_untracked();
        let token = state.token().unwrap_or_default().to_owned();
        let is_admin = state.is_admin();
        leptos::task::spawn_local(async move {
            let result = async {
                let current = crate::net::api::fetch_current_user(&token).await?;
                let all = if is_admin { Some(crate::net::api::fetch_users(&token).await?) } else { None };
                Ok::<_, ApiError>((current, all))
            }
            .await;
            if !super::is_mounted(&alive) {
                return;
            }
            loading.set(false);
            match result {
                Ok((current, all)) => {
                    users.set(visible_users(&current, all));
                    me.set(Some(current));
                }
                Err(e) => {
                    log::warn!("dashboard load failed: {e}");
                    if !crate::util::auth::expire_on_unauthorized(auth, &e, &navigate) {
                        error.set(load_failure_message(&e));
                    }
                }
            }
        });
    }

    let on_delete_request = Callback::new(move |id: String| {
        notice.set(String::new());
        error.set(String::new());
        let Some(session) = auth.get_untracked().session else {
            return;
        };
        match can_delete(&session, &id) {
            Ok(()) => delete_target.set(Some(id)),
            Err(msg) => error.set(msg.to_owned()),
        }
    });

    let on_delete_confirm = {
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        move |_| {
            let Some(target) = delete_target.get_untracked() else {
                return;
            };
            delete_target.set(None);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                let alive = alive.clone();
                let token = auth.get_untracked().token().unwrap_or_default().to_owned();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::delete_user(&token, &target).await;
                    if !super::is_mounted(&alive) {
                        return;
                    }
                    match result {
                        Ok(()) => {
                            log::info!("deleted user {target}");
                            users.update(|list| {
                                remove_user(list, &target);
                            });
                            notice.set("User deleted successfully.".to_owned());
                        }
                        Err(e) => {
                            log::warn!("delete user {target} failed: {e}");
                            if !crate::util::auth::expire_on_unauthorized(auth, &e, &navigate) {
                                error.set(delete_failure_message(&e));
                            }
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (target, &navigate);
            }
        }
    };

    let on_logout = move |_| logout_and_redirect(auth, &navigate);

    let is_admin = Signal::derive(move || auth.get().is_admin());
    let self_id = Signal::derive(move || auth.get().user_id().map(str::to_owned));
    let greeting = move || {
        me.get()
            .map(|u| format!("Welcome, {}", u.username))
            .unwrap_or_else(|| "Welcome".to_owned())
    };
    let profile_href = move || update_user_path(self_id.get().as_deref().unwrap_or_default());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <div class="dashboard-page__actions">
                    <A href=profile_href>"Update my profile"</A>
                    <button class="btn" on:click=on_logout>"Logout"</button>
                </div>
            </header>
            <ErrorMessage message=error/>
            <SuccessMessage message=notice/>
            <Show when=move || delete_target.get().is_some()>
                <div class="dialog dialog--confirm">
                    <p>{move || format!("Delete user {}?", delete_target.get().unwrap_or_default())}</p>
                    <button class="btn btn--danger" on:click=on_delete_confirm.clone()>"Delete"</button>
                    <button class="btn" on:click=move |_| delete_target.set(None)>"Cancel"</button>
                </div>
            </Show>
            <h2>{move || if is_admin.get() { "All Users" } else { "My Account" }}</h2>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dashboard-page__loading">"Loading users..."</p> }
            >
                {move || {
                    if is_admin.get() {
                        view! { <UserTable users=users self_id=self_id on_delete=on_delete_request/> }.into_any()
                    } else {
                        view! { <UserTable users=users self_id=self_id/> }.into_any()
                    }
                }}
            </Show>
        </div>
    }
}
