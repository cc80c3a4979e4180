//! Callback slots for the per-row table actions.
//!
//! TRADE-OFFS
//! ==========
//! Edit, delete, and accept have no defined behavior yet. The buttons render
//! and fire these slots; the default slots do nothing. Hosts that want real
//! behavior provide their own `RowActions` through context.

use leptos::prelude::*;

use crate::state::records::{JobId, UserId};

#[derive(Clone, Copy)]
pub struct RowActions {
    pub on_edit_user: Callback<UserId>,
    pub on_delete_user: Callback<UserId>,
    pub on_accept_job: Callback<JobId>,
}

impl Default for RowActions {
    fn default() -> Self {
        Self {
            on_edit_user: Callback::new(|_: UserId| {}),
            on_delete_user: Callback::new(|_: UserId| {}),
            on_accept_job: Callback::new(|_: JobId| {}),
        }
    }
}
