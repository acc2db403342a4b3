//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated call site applies the same 401 behavior: the session is
//! dropped and the user is sent to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Log out if `err` is a 401. Returns whether the session was dropped.
pub fn logout_if_unauthorized(state: &mut AuthState, err: &ApiError, store: &impl KeyValueStore) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    state.logout(store);
    true
}

/// Apply 401 handling to the shared auth signal and redirect to `/login`.
/// Returns whether the caller should stop handling `err`.
pub fn expire_on_unauthorized<F>(auth: RwSignal<AuthState>, err: &ApiError, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    let mut expired = false;
    auth.update(|state| expired = logout_if_unauthorized(state, err, &LocalStorage));
    if expired {
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    }
    expired
}

/// Clear the session and return to `/login`.
pub fn logout_and_redirect<F>(auth: RwSignal<AuthState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    auth.update(|state| state.logout(&LocalStorage));
    navigate(AppRoute::Login.path(), NavigateOptions::default());
}
