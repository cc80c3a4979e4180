//! User management table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `ContentArea` while the users destination is active. Rows come
//! from `user_rows`, which keeps input order and maps roles to badge tones.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::row_actions::RowActions;
use crate::state::records::{Role, UserId, UserRecord};

#[cfg(test)]
#[path = "users_table_test.rs"]
mod users_table_test;

/// Display projection of one [`UserRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub tone: BadgeTone,
}

#[must_use]
pub fn role_tone(role: Role) -> BadgeTone {
    match role {
        Role::Admin => BadgeTone::Accent,
        Role::User => BadgeTone::Neutral,
    }
}

/// One row per user, in input order.
#[must_use]
pub fn user_rows(users: &[UserRecord]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role.as_str(),
            tone: role_tone(u.role),
        })
        .collect()
}

#[component]
pub fn UsersTable(users: Vec<UserRecord>, actions: RowActions) -> impl IntoView {
    let rows = user_rows(&users);

    view! {
        <table class="data-table data-table--users">
            <thead>
                <tr class="data-table__head">
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th class="data-table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {if rows.is_empty() {
                    view! {
                        <tr class="data-table__empty">
                            <td colspan="4">"No users."</td>
                        </tr>
                    }
                        .into_any()
                } else {
                    rows.into_iter()
                        .map(|row| {
                            let id = row.id;
                            view! {
                                <tr class="data-table__row">
                                    <td class="data-table__primary">{row.name}</td>
                                    <td>{row.email}</td>
                                    <td>
                                        <Badge tone=row.tone text=row.role/>
                                    </td>
                                    <td class="data-table__actions">
                                        <button
                                            class="btn btn--icon btn--inverse"
                                            title="Edit user"
                                            on:click=move |_| actions.on_edit_user.run(id)
                                        >
                                            <svg viewBox="0 0 20 20" aria-hidden="true">
                                                <path d="M4 14.5 V16 H5.5 L14 7.5 L12.5 6 Z"></path>
                                                <path d="M13.5 5 L15 3.5 L16.5 5 L15 6.5 Z"></path>
                                            </svg>
                                        </button>
                                        <button
                                            class="btn btn--icon btn--inverse btn--danger-icon"
                                            title="Delete user"
                                            on:click=move |_| actions.on_delete_user.run(id)
                                        >
                                            <svg viewBox="0 0 20 20" aria-hidden="true">
                                                <path d="M5 6 H15 L14 17 H6 Z"></path>
                                                <path d="M4 4.5 H16 M8 4.5 V3 H12 V4.5"></path>
                                            </svg>
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
