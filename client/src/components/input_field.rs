//! Labelled text input bound to a string signal.

use leptos::prelude::*;

#[component]
pub fn InputField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-row">
            <label for=id class="form-label">{label}</label>
            <input
                id=id
                name=id
                class="form-input"
                type=input_type
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
