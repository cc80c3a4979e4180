//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds the only mutable state (destination + panel flag); `records` and
//! `source` describe the read-only data the tables render.

pub mod records;
pub mod source;
pub mod ui;
