//! Conditional CSS class composition.

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

/// Join `base` with every modifier whose flag is set, space separated.
#[must_use]
pub fn class_list(base: &str, modifiers: &[(&str, bool)]) -> String {
    let mut out = base.trim().to_owned();
    for (class, enabled) in modifiers {
        let class = class.trim();
        if !*enabled || class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}
