//! Registration page: `POST /users`.

#[cfg(test)]
#[path = "create_user_test.rs"]
mod create_user_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_message::{ErrorMessage, SuccessMessage};
use crate::components::input_field::InputField;
use crate::net::error::ApiError;
use crate::net::types::{Role, UserRecord};
use crate::routes::AppRoute;

const CONFLICT_MESSAGE: &str = "User with this email or username already exists. Please use different credentials.";
const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";
const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login in 5 seconds...";

/// Raw registration form values as typed.
#[derive(Clone, Debug, Default, PartialEq)]
struct RegistrationForm {
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    phone_number: String,
    home_address: String,
    password: String,
    role: String,
}

fn length_between(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

impl RegistrationForm {
    /// Trim text fields (the password is kept as typed) and check the
    /// registration constraints.
    fn validate(&self) -> Result<UserRecord, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let username = self.username.trim();
        let email = self.email.trim();

        if !length_between(first_name, 4, 30) {
            return Err("First name must be between 4 and 30 characters.");
        }
        if !length_between(last_name, 4, 20) {
            return Err("Last name must be between 4 and 20 characters.");
        }
        if !length_between(username, 4, 20) {
            return Err("Username must be between 4 and 20 characters.");
        }
        if email.is_empty() || !email.contains('@') {
            return Err("Enter a valid email address.");
        }
        if self.password.chars().count() < 6 {
            return Err("Password must be at least 6 characters.");
        }
        let Some(role) = Role::parse(&self.role) else {
            return Err("Select a role.");
        };

        Ok(UserRecord {
            user_id: None,
            first_name: Some(first_name.to_owned()),
            last_name: Some(last_name.to_owned()),
            username: username.to_owned(),
            email: email.to_owned(),
            phone_number: optional(self.phone_number.trim()),
            home_address: optional(self.home_address.trim()),
            role: Some(role),
            password: Some(self.password.clone()),
        })
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn registration_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Conflict => CONFLICT_MESSAGE.to_owned(),
        ApiError::Network(_) | ApiError::Unavailable => NETWORK_MESSAGE.to_owned(),
        ApiError::Unauthorized => "Error: 401".to_owned(),
        ApiError::Status { status, message } => message.clone().unwrap_or_else(|| format!("Error: {status}")),
        ApiError::Decode(_) => "Error: unexpected response from server".to_owned(),
    }
}

#[component]
pub fn CreateUserPage() -> impl IntoView {
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let home_address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());

    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let locked = Signal::derive(move || loading.get() || success.get());
    let success_text = Signal::derive(move || if success.get() { SUCCESS_MESSAGE.to_owned() } else { String::new() });

    #[cfg(feature = "hydrate")]
    let alive = super::mounted_flag();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if locked.get() {
            return;
        }
        error.set(String::new());
        let form = RegistrationForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            username: username.get(),
            email: email.get(),
            phone_number: phone_number.get(),
            home_address: home_address.get(),
            password: password.get(),
            role: role.get(),
        };
        let user = match form.validate() {
            Ok(user) => user,
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
                let result = crate::net::api::create_user(&user).await;
                if !super::is_mounted(&alive) {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(()) => {
                        log::info!("registered user {}", user.username);
                        success.set(true);
                        gloo_timers::future::sleep(super::REDIRECT_DELAY).await;
                        if super::is_mounted(&alive) {
                            navigate(AppRoute::Login.path(), NavigateOptions::default());
                        }
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        error.set(registration_error_message(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, &navigate);
        }
    };

    view! {
        <div class="create-user-page">
            <h2>"Register User"</h2>
            <ErrorMessage message=error/>
            <SuccessMessage message=success_text/>
            <form class="create-user-form" on:submit=on_submit>
                <InputField id="firstName" label="First Name" placeholder="Enter your first name" value=first_name required=true disabled=locked/>
                <InputField id="lastName" label="Last Name" placeholder="Enter your last name" value=last_name required=true disabled=locked/>
                <InputField id="username" label="Username" placeholder="Choose a username" value=username required=true disabled=locked/>
                <InputField id="email" label="Email address" input_type="email" placeholder="Enter your email" value=email required=true disabled=locked/>
                <InputField id="phoneNumber" label="Phone Number" input_type="tel" placeholder="Enter your phone number" value=phone_number disabled=locked/>
                <InputField id="homeAddress" label="Home Address" placeholder="Enter your home address" value=home_address disabled=locked/>
                <InputField id="password" label="Password" input_type="password" placeholder="Create a password" value=password required=true disabled=locked/>
                <div class="form-row">
                    <label for="role" class="form-label">"Role"</label>
                    <select
                        id="role"
                        name="role"
                        class="form-select"
                        required=true
                        disabled=move || locked.get()
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="">"Select role"</option>
                        {Role::SELECTABLE
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str().to_owned()>{r.label().to_owned()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || locked.get()>
                    {move || if loading.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <A href=AppRoute::Login.path()>"Back to login"</A>
        </div>
    }
}
