//! Route guard wrapper.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::{AppRoute, RouteDecision, guard};
use crate::state::auth::AuthState;

/// Guard decision for `route`. Only notifies when the decision changes, so a
/// token swap inside a live session does not rebuild the guarded page.
fn guard_decision(route: AppRoute, auth: RwSignal<AuthState>) -> Memo<RouteDecision> {
    Memo::new(move |_| guard(route, &auth.get()))
}

/// Render `children` only when `route`'s guard allows it; otherwise redirect
/// client-side. Shows a loading line while auth is still being restored.
#[component]
pub fn ProtectedRoute(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let decision = guard_decision(route, expect_context::<RwSignal<AuthState>>());

    move || match decision.get() {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        RouteDecision::Pending => view! { <p class="route-pending">"Loading..."</p> }.into_any(),
    }
}

/// `/`: forward to the dashboard or the login form.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let decision = guard_decision(AppRoute::Root, expect_context::<RwSignal<AuthState>>());

    move || match decision.get() {
        RouteDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        RouteDecision::Render | RouteDecision::Pending => {
            view! { <p class="route-pending">"Loading..."</p> }.into_any()
        }
    }
}
