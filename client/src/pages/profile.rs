//! Read-only profile for the signed-in account (`GET /users/me`).

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_message::ErrorMessage;
use crate::net::types::UserRecord;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::auth::logout_and_redirect;

fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "N/A".to_owned(),
    }
}

/// Label/value rows shown for `user`.
fn profile_rows(user: &UserRecord) -> [(&'static str, String); 4] {
    let role = user.role.as_ref().map(ToString::to_string);
    [
        ("Username", or_na(Some(&user.username))),
        ("Role", or_na(role.as_deref())),
        ("Email", or_na(Some(&user.email))),
        ("Home Address", or_na(user.home_address.as_deref())),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let user = RwSignal::new(None::<UserRecord>);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        let alive = super::mounted_flag();
        let token = auth.get_untracked().token().unwrap_or_default().to_owned();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_current_user(&token).await;
            if !super::is_mounted(&alive) {
                return;
            }
            match result {
                Ok(me) => user.set(Some(me)),
                Err(e) => {
                    log::warn!("profile load failed: {e}");
                    if !crate::util::auth::expire_on_unauthorized(auth, &e, &navigate) {
                        error.set("Failed to load user details.".to_owned());
                    }
                }
            }
        });
    }

    let on_logout = move |_| logout_and_redirect(auth, &navigate);

    view! {
        <div class="profile-page">
            <h2>"User Details"</h2>
            <ErrorMessage message=error/>
            {move || match user.get() {
                Some(u) => view! {
                    <dl class="profile-page__details">
                        {profile_rows(&u)
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                }
                .into_any(),
                None => view! { <p class="profile-page__loading">"Loading..."</p> }.into_any(),
            }}
            <div class="profile-page__actions">
                <button class="btn" on:click=on_logout>"Logout"</button>
                <A href=AppRoute::Home.path()>"Home"</A>
            </div>
        </div>
    }
}
