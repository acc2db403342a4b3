//! Role landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

fn welcome_message(role: Option<&Role>) -> String {
    let role = role.map_or("user", Role::as_str);
    format!("Welcome to {role} home page")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>{move || welcome_message(auth.get().role())}</h1>
            <A href=AppRoute::Dashboard.path()>"Go to dashboard"</A>
        </div>
    }
}
