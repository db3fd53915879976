use super::*;

fn user(role: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: role.map(str::to_owned),
        avatar_url: None,
        active: true,
    }
}

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.display_name().is_none());
}

#[test]
fn display_name_reads_from_user() {
    let state = AuthState { user: Some(user(None)), loading: false };
    assert_eq!(state.display_name(), Some("Alice"));
}

#[test]
fn has_role_matches_exact_role_name() {
    let state = AuthState { user: Some(user(Some("admin"))), loading: false };
    assert!(state.has_role("admin"));
    assert!(!state.has_role("employee"));
}

#[test]
fn has_role_is_false_without_user_or_role() {
    assert!(!AuthState::default().has_role("admin"));
    let state = AuthState { user: Some(user(None)), loading: false };
    assert!(!state.has_role("admin"));
}
