//! Dashboard page: the shell composing navigation, header, and content.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardShell` owns the only mutable UI state (`UiState`) in one signal.
//! Children get read-only projections of it and callbacks that apply the
//! `UiState` transitions; records and row actions are injected via context.

use leptos::prelude::*;

use crate::components::content_area::ContentArea;
use crate::components::nav_panel::NavigationPanel;
use crate::components::page_header::PageHeader;
use crate::components::row_actions::RowActions;
use crate::state::records::DashboardRecords;
use crate::state::source::FixtureSource;
use crate::state::ui::{Destination, UiState};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Route-level page. Falls back to the embedded fixtures and no-op actions
/// when the host did not provide its own.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let records = use_context::<DashboardRecords>().unwrap_or_else(|| DashboardRecords::load(&FixtureSource));
    let actions = use_context::<RowActions>().unwrap_or_default();

    view! { <DashboardShell records=records actions=actions/> }
}

/// Callbacks handed to the shell's children, each applying one `UiState`
/// transition to `ui`.
#[derive(Clone, Copy)]
pub struct ShellHandlers {
    pub on_select: Callback<Destination>,
    pub on_open_panel: Callback<()>,
    pub on_close_panel: Callback<()>,
}

impl ShellHandlers {
    pub fn new(ui: RwSignal<UiState>) -> Self {
        Self {
            on_select: Callback::new(move |target: Destination| ui.update(|u| u.select_destination(target))),
            on_open_panel: Callback::new(move |()| ui.update(UiState::open_panel)),
            on_close_panel: Callback::new(move |()| ui.update(UiState::close_panel)),
        }
    }
}

#[component]
pub fn DashboardShell(records: DashboardRecords, #[prop(optional)] actions: RowActions) -> impl IntoView {
    let ui = RwSignal::new(UiState::default());

    let destination = Signal::derive(move || ui.get().destination);
    let panel_open = Signal::derive(move || ui.get().panel_open);

    let handlers = ShellHandlers::new(ui);

    view! {
        <div class="dashboard-shell">
            <NavigationPanel
                active=destination
                open=panel_open
                on_select=handlers.on_select
                on_close=handlers.on_close_panel
            />
            <div class="dashboard-shell__main">
                <PageHeader destination=destination on_open_panel=handlers.on_open_panel/>
                <ContentArea destination=destination records=records actions=actions/>
            </div>
        </div>
    }
}
