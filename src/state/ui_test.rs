use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_nav_expanded() {
    let state = UiState::default();
    assert!(state.nav_expanded);
    assert!(state.notices.is_empty());
}

// =============================================================
// Notices
// =============================================================

#[test]
fn push_notice_assigns_increasing_ids() {
    let mut state = UiState::default();
    let first = state.push_notice("one");
    let second = state.push_notice("two");
    assert!(second > first);
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].message, "one");
}

#[test]
fn dismiss_notice_removes_only_target() {
    let mut state = UiState::default();
    let first = state.push_notice("one");
    let second = state.push_notice("two");
    state.dismiss_notice(first);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, second);
}

#[test]
fn dismiss_unknown_notice_is_a_no_op() {
    let mut state = UiState::default();
    state.push_notice("one");
    state.dismiss_notice(999);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn notice_ids_are_not_reused_after_dismissal() {
    let mut state = UiState::default();
    let first = state.push_notice("one");
    state.dismiss_notice(first);
    let second = state.push_notice("two");
    assert_ne!(first, second);
}
