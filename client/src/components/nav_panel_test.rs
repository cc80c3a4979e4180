use super::*;

#[test]
fn panel_class_adds_open_modifier() {
    assert_eq!(panel_class(false), "nav-panel");
    assert_eq!(panel_class(true), "nav-panel nav-panel--open");
}

#[test]
fn link_class_marks_active_destination() {
    assert_eq!(link_class(true), "btn nav-panel__link nav-panel__link--active");
    assert_eq!(link_class(false), "btn nav-panel__link");
}
