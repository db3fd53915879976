use super::*;

fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{id}@example.com"),
        role: None,
        avatar_url: None,
        active: true,
    }
}

#[test]
fn team_state_default_is_empty() {
    let state = TeamState::default();
    assert!(state.users.is_empty());
    assert!(state.roles.is_empty());
    assert!(state.permissions.is_empty());
}

#[test]
fn upsert_user_replaces_by_id() {
    let mut state = TeamState::default();
    state.upsert_user(user("u1", "Ann"));
    state.upsert_user(user("u1", "Ann Lee"));
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].name, "Ann Lee");
}

#[test]
fn upsert_role_appends_new_roles() {
    let mut state = TeamState::default();
    state.upsert_role(Role { id: "r1".to_owned(), name: "admin".to_owned(), permissions: Vec::new() });
    state.upsert_role(Role {
        id: "r1".to_owned(),
        name: "admin".to_owned(),
        permissions: vec!["projects:read".to_owned()],
    });
    assert_eq!(state.roles.len(), 1);
    assert_eq!(state.roles[0].permissions.len(), 1);
}

#[test]
fn user_name_lookup() {
    let mut state = TeamState::default();
    state.upsert_user(user("u1", "Ann"));
    assert_eq!(state.user_name("u1"), Some("Ann"));
    assert!(state.user_name("u9").is_none());
}
