//! Account list table for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admins get a delete action on every row except their own; other users see
//! a single read-only row for themselves.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::net::types::UserRecord;

/// Display value for an optional column.
fn cell(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "-".to_owned(),
    }
}

/// Whether a row gets a delete button.
fn row_deletable(row_id: Option<&str>, self_id: Option<&str>) -> bool {
    row_id.is_some() && row_id != self_id
}

#[component]
pub fn UserTable(
    #[prop(into)] users: Signal<Vec<UserRecord>>,
    #[prop(into)] self_id: Signal<Option<String>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let show_actions = on_delete.is_some();

    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"First Name"</th>
                    <th>"Last Name"</th>
                    <th>"Username"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Address"</th>
                    <th>"Role"</th>
                    <Show when=move || show_actions>
                        <th>"Actions"</th>
                    </Show>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let self_id = self_id.get();
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            let deletable = row_deletable(user.user_id.as_deref(), self_id.as_deref());
                            let row_id = user.user_id.clone().unwrap_or_default();
                            let role = user.role.as_ref().map(ToString::to_string);
                            view! {
                                <tr>
                                    <td>{cell(user.user_id.as_deref())}</td>
                                    <td>{cell(user.first_name.as_deref())}</td>
                                    <td>{cell(user.last_name.as_deref())}</td>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{cell(user.phone_number.as_deref())}</td>
                                    <td>{cell(user.home_address.as_deref())}</td>
                                    <td>{cell(role.as_deref())}</td>
                                    {on_delete.map(|on_delete| {
                                        let row_id = row_id.clone();
                                        view! {
                                            <td>
                                                <Show when=move || deletable>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click={
                                                            let row_id = row_id.clone();
                                                            move |_| on_delete.run(row_id.clone())
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </Show>
                                            </td>
                                        }
                                    })}
                                </tr>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || users.get().is_empty()>
                    <tr>
                        <td class="user-table__empty" colspan="9">"No users found."</td>
                    </tr>
                </Show>
            </tbody>
        </table>
    }
}
