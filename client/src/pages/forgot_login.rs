//! Credential reset page: `POST /auth/forgotLogin` with a registered email and
//! an optional new username and/or password.

#[cfg(test)]
#[path = "forgot_login_test.rs"]
mod forgot_login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_message::{ErrorMessage, SuccessMessage};
use crate::components::input_field::InputField;
use crate::net::error::ApiError;
use crate::net::types::{ForgotLoginRequest, MessageResponse};
use crate::routes::AppRoute;

fn optional_field(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn validate_forgot_input(email: &str, username: &str, password: &str) -> Result<ForgotLoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    Ok(ForgotLoginRequest {
        email: email.to_owned(),
        username: optional_field(username),
        password: optional_field(password),
    })
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn reset_success_message(resp: &MessageResponse) -> String {
    resp.message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Credentials reset successful! Redirecting to login...".to_owned())
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn reset_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::Unavailable => "Network or server error".to_owned(),
        other => other
            .server_message()
            .map_or_else(|| "Reset failed. Please try again".to_owned(), str::to_owned),
    }
}

#[component]
pub fn ForgotLoginPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let new_username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let success = RwSignal::new(false);
    let locked = Signal::derive(move || loading.get() || success.get());

    #[cfg(feature = "hydrate")]
    let alive = super::mounted_flag();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if locked.get() {
            return;
        }
        message.set(String::new());
        error.set(String::new());
        let request = match validate_forgot_input(&email.get(), &new_username.get(), &new_password.get()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::forgot_login(&request).await;
                if !super::is_mounted(&alive) {
                    return;
                }
                match result {
                    Ok(resp) => {
                        message.set(reset_success_message(&resp));
                        success.set(true);
                        loading.set(false);
                        gloo_timers::future::sleep(super::REDIRECT_DELAY).await;
                        if super::is_mounted(&alive) {
                            navigate(AppRoute::Login.path(), NavigateOptions::default());
                        }
                    }
                    Err(e) => {
                        log::warn!("credential reset failed: {e}");
                        error.set(reset_failure_message(&e));
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <div class="forgot-login-page">
            <h2>"Reset Credentials"</h2>
            <SuccessMessage message=message/>
            <ErrorMessage message=error/>
            <form class="forgot-login-form" on:submit=on_submit>
                <InputField
                    id="email"
                    label="Email (required)"
                    input_type="email"
                    placeholder="Registered Email"
                    value=email
                    required=true
                    disabled=locked
                />
                <InputField
                    id="newUsername"
                    label="New Username (optional)"
                    placeholder="New Username"
                    value=new_username
                    disabled=locked
                />
                <InputField
                    id="newPassword"
                    label="New Password (optional)"
                    input_type="password"
                    placeholder="New Password"
                    value=new_password
                    disabled=locked
                />
                <button class="btn btn--primary" type="submit" disabled=move || locked.get()>
                    {move || if loading.get() { "Processing..." } else { "Reset" }}
                </button>
            </form>
            <A href=AppRoute::Login.path()>"Back to login"</A>
        </div>
    }
}
