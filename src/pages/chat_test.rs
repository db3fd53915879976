use super::*;

fn user(id: &str, active: bool) -> User {
    User {
        id: id.to_owned(),
        name: format!("user {id}"),
        email: format!("{id}@example.com"),
        role: None,
        avatar_url: None,
        active,
    }
}

fn conversation(participants: &[&str]) -> Conversation {
    Conversation {
        id: "c1".to_owned(),
        kind: "group".to_owned(),
        title: None,
        participant_ids: participants.iter().map(|p| (*p).to_owned()).collect(),
        project_id: None,
        last_activity: None,
    }
}

// =============================================================
// selectable_participants
// =============================================================

#[test]
fn selectable_excludes_self_and_inactive() {
    let users = vec![user("me", true), user("u2", true), user("u3", false)];
    let picked = selectable_participants(&users, Some("me"));
    let ids: Vec<&str> = picked.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, ["u2"]);
}

#[test]
fn selectable_without_self_id_keeps_all_active() {
    let users = vec![user("u1", true), user("u2", true)];
    assert_eq!(selectable_participants(&users, None).len(), 2);
}

// =============================================================
// addable_users
// =============================================================

#[test]
fn addable_excludes_existing_participants() {
    let users = vec![user("u1", true), user("u2", true), user("u3", true)];
    let c = conversation(&["u1"]);
    let ids: Vec<String> = addable_users(&users, &c).into_iter().map(|u| u.id).collect();
    assert_eq!(ids, ["u2", "u3"]);
}

#[test]
fn addable_excludes_inactive_users() {
    let users = vec![user("u1", false)];
    let c = conversation(&[]);
    assert!(addable_users(&users, &c).is_empty());
}

// =============================================================
// conversation_kind_for
// =============================================================

#[test]
fn one_participant_makes_a_direct_conversation() {
    assert_eq!(conversation_kind_for(1), "direct");
}

#[test]
fn multiple_participants_make_a_group() {
    assert_eq!(conversation_kind_for(2), "group");
    assert_eq!(conversation_kind_for(5), "group");
}

#[test]
fn zero_participants_default_to_group() {
    // The dialog refuses to submit with zero picks; this is just the fallback.
    assert_eq!(conversation_kind_for(0), "group");
}
