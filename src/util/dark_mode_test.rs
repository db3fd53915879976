use super::*;

#[test]
fn toggle_flips_the_flag() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn read_preference_defaults_to_light_outside_browser() {
    assert!(!read_preference());
}
