//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive read-only signals and callbacks from the dashboard
//! shell; none of them owns state of its own.

pub mod badge;
pub mod content_area;
pub mod jobs_table;
pub mod nav_panel;
pub mod page_header;
pub mod row_actions;
pub mod users_table;
