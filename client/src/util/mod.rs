//! Utility helpers shared across client UI modules.

pub mod class_names;
