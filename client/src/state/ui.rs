//! Local UI chrome state (active destination, navigation panel visibility).
//!
//! DESIGN
//! ======
//! The dashboard has exactly two pieces of interactive state. They live in one
//! plain struct so the transitions are testable without a reactive runtime;
//! the shell wraps it in a single `RwSignal` and hands children read-only
//! projections plus callbacks.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level view selected in the navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Destination {
    /// User management table.
    #[default]
    Users,
    /// Available jobs table.
    Jobs,
}

impl Destination {
    /// Every destination, in navigation order.
    pub const ALL: [Destination; 2] = [Destination::Users, Destination::Jobs];

    /// Label shown on the navigation button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Jobs => "Jobs",
        }
    }

    /// Heading shown in the page header while this destination is active.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Users => "User Management",
            Self::Jobs => "Available Jobs",
        }
    }

    /// Stable slug used for element ids and CSS modifiers.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Jobs => "jobs",
        }
    }
}

/// UI state for the dashboard shell.
///
/// `panel_open` only affects narrow viewports; on wide viewports the panel is
/// always docked and the flag is ignored by the stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub destination: Destination,
    pub panel_open: bool,
}

impl UiState {
    /// Switch to `target` and dismiss the overlay panel.
    ///
    /// Selecting the already-active destination still closes the panel.
    pub fn select_destination(&mut self, target: Destination) {
        self.destination = target;
        self.panel_open = false;
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    #[must_use]
    pub fn is_active(&self, destination: Destination) -> bool {
        self.destination == destination
    }
}
