//! Pill-shaped status label used in table cells.

use leptos::prelude::*;

/// Color treatment for a [`Badge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    /// Highlighted (administrative roles).
    Accent,
    /// Muted default.
    Neutral,
    /// Positive state (open postings).
    Success,
}

impl BadgeTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Accent => "badge badge--accent",
            Self::Neutral => "badge badge--neutral",
            Self::Success => "badge badge--success",
        }
    }
}

#[component]
pub fn Badge(tone: BadgeTone, #[prop(into)] text: String) -> impl IntoView {
    view! { <span class=tone.class()>{text}</span> }
}
