//! Collapsible navigation panel listing the dashboard destinations.
//!
//! ARCHITECTURE
//! ============
//! On wide viewports the panel is docked and always visible. On narrow
//! viewports it slides in over the content while `open` is set, with a
//! backdrop that dismisses it. The panel never writes state directly; it only
//! fires `on_select` and `on_close`.

use leptos::prelude::*;

use crate::state::ui::Destination;
use crate::util::class_names::class_list;

#[cfg(test)]
#[path = "nav_panel_test.rs"]
mod nav_panel_test;

/// Navigation sidebar with one button per [`Destination`].
#[component]
pub fn NavigationPanel(
    #[prop(into)] active: Signal<Destination>,
    #[prop(into)] open: Signal<bool>,
    on_select: Callback<Destination>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="nav-backdrop" on:click=move |_| on_close.run(())></div>
        </Show>
        <aside class=move || panel_class(open.get())>
            <div class="nav-panel__header">
                <h1 class="nav-panel__brand">"Dashboard"</h1>
                <button
                    class="btn btn--icon nav-panel__close"
                    title="Close navigation"
                    on:click=move |_| on_close.run(())
                >
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <path d="M5 5 L15 15 M15 5 L5 15"></path>
                    </svg>
                </button>
            </div>
            <nav class="nav-panel__links">
                {Destination::ALL
                    .into_iter()
                    .map(|destination| {
                        view! {
                            <button
                                id=format!("nav-{}", destination.slug())
                                class=move || link_class(active.get() == destination)
                                on:click=move |_| on_select.run(destination)
                            >
                                {destination_icon(destination)}
                                <span>{destination.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

fn panel_class(open: bool) -> String {
    class_list("nav-panel", &[("nav-panel--open", open)])
}

fn link_class(active: bool) -> String {
    class_list("btn nav-panel__link", &[("nav-panel__link--active", active)])
}

fn destination_icon(destination: Destination) -> impl IntoView {
    match destination {
        Destination::Users => view! {
            <svg class="nav-panel__icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="7" cy="7" r="3"></circle>
                <circle cx="14" cy="8" r="2.5"></circle>
                <path d="M2 17 C2 13 12 13 12 17 Z"></path>
                <path d="M11 13 C13 12 18 12.5 18 16 H13"></path>
            </svg>
        }
            .into_any(),
        Destination::Jobs => view! {
            <svg class="nav-panel__icon" viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="6" width="16" height="11" rx="2" ry="2"></rect>
                <path d="M7 6 V4 H13 V6"></path>
            </svg>
        }
            .into_any(),
    }
}
