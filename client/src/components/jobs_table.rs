//! Available jobs table.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::row_actions::RowActions;
use crate::state::records::{JobId, JobRecord, JobStatus};

#[cfg(test)]
#[path = "jobs_table_test.rs"]
mod jobs_table_test;

/// Display projection of one [`JobRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRow {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub status: &'static str,
    pub tone: BadgeTone,
}

#[must_use]
pub fn status_tone(status: JobStatus) -> BadgeTone {
    match status {
        JobStatus::Open => BadgeTone::Success,
    }
}

/// One row per job, in input order.
#[must_use]
pub fn job_rows(jobs: &[JobRecord]) -> Vec<JobRow> {
    jobs.iter()
        .map(|j| JobRow {
            id: j.id,
            title: j.title.clone(),
            company: j.company.clone(),
            location: j.location.clone(),
            status: j.status.as_str(),
            tone: status_tone(j.status),
        })
        .collect()
}

#[component]
pub fn JobsTable(jobs: Vec<JobRecord>, actions: RowActions) -> impl IntoView {
    let rows = job_rows(&jobs);

    view! {
        <table class="data-table data-table--jobs">
            <thead>
                <tr class="data-table__head">
                    <th>"Job Title"</th>
                    <th>"Company"</th>
                    <th>"Location"</th>
                    <th>"Status"</th>
                    <th class="data-table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {if rows.is_empty() {
                    view! {
                        <tr class="data-table__empty">
                            <td colspan="5">"No jobs."</td>
                        </tr>
                    }
                        .into_any()
                } else {
                    rows.into_iter()
                        .map(|row| {
                            let id = row.id;
                            view! {
                                <tr class="data-table__row">
                                    <td class="data-table__primary">{row.title}</td>
                                    <td>{row.company}</td>
                                    <td>{row.location}</td>
                                    <td>
                                        <Badge tone=row.tone text=row.status/>
                                    </td>
                                    <td class="data-table__actions">
                                        <button
                                            class="btn btn--primary btn--small"
                                            on:click=move |_| actions.on_accept_job.run(id)
                                        >
                                            "Accept Job"
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
