//! Main content region switching between the two tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the active destination only; it never writes UI state.

use leptos::prelude::*;

use crate::components::jobs_table::JobsTable;
use crate::components::row_actions::RowActions;
use crate::components::users_table::UsersTable;
use crate::state::records::DashboardRecords;
use crate::state::ui::Destination;

#[component]
pub fn ContentArea(
    #[prop(into)] destination: Signal<Destination>,
    records: DashboardRecords,
    actions: RowActions,
) -> impl IntoView {
    let DashboardRecords { users, jobs } = records;

    view! {
        <main class="content-area">
            <div class="content-area__card">
                <div class="content-area__scroll">
                    {move || match destination.get() {
                        Destination::Users => view! { <UsersTable users=users.clone() actions=actions/> }.into_any(),
                        Destination::Jobs => view! { <JobsTable jobs=jobs.clone() actions=actions/> }.into_any(),
                    }}
                </div>
            </div>
        </main>
    }
}
