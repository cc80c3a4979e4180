//! Page header showing the active destination's title.

use leptos::prelude::*;

use crate::state::ui::Destination;

/// Header bar; the menu button is only visible on narrow viewports.
#[component]
pub fn PageHeader(#[prop(into)] destination: Signal<Destination>, on_open_panel: Callback<()>) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__inner">
                <button
                    class="btn btn--icon page-header__menu"
                    title="Open navigation"
                    on:click=move |_| on_open_panel.run(())
                >
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <path d="M3 5 H17 M3 10 H17 M3 15 H17"></path>
                    </svg>
                </button>
                <h2 class="page-header__title">{move || destination.get().title()}</h2>
                <div class="page-header__spacer" aria-hidden="true"></div>
            </div>
        </header>
    }
}
