//! Inline error and notice banners.

use leptos::prelude::*;

/// Red inline error; renders nothing while `message` is empty.
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-message" role="alert">{move || message.get()}</div>
        </Show>
    }
}

/// Green inline notice; renders nothing while `message` is empty.
#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="success-message" role="status">{move || message.get()}</div>
        </Show>
    }
}
