//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::row_actions::RowActions;
use crate::pages::dashboard::DashboardPage;
use crate::state::records::DashboardRecords;
use crate::state::source::FixtureSource;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the record collections and row action slots, then routes `/` to
/// the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(DashboardRecords::load(&FixtureSource));
    provide_context(RowActions::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-dashboard.css"/>
        <Title text="Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
