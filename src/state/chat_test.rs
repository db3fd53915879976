use super::*;

fn conversation(id: &str) -> Conversation {
    Conversation {
        id: id.to_owned(),
        kind: "direct".to_owned(),
        title: None,
        participant_ids: vec!["u1".to_owned(), "u2".to_owned()],
        project_id: None,
        last_activity: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_disconnected_and_empty() {
    let state = ChatState::default();
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
    assert!(state.presence.is_empty());
    assert!(state.conversations.is_empty());
    assert!(!state.conversations_stale);
    assert!(state.selected_conversation_id.is_none());
    assert!(state.messages.is_empty());
}

#[test]
fn connection_status_default_is_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
}

// =============================================================
// is_user_online
// =============================================================

#[test]
fn unknown_participant_is_offline() {
    let state = ChatState::default();
    assert!(!state.is_user_online("nobody"));
}

#[test]
fn last_recorded_event_wins() {
    let mut state = ChatState::default();
    state.presence.insert("u1".to_owned(), true);
    assert!(state.is_user_online("u1"));
    state.presence.insert("u1".to_owned(), false);
    assert!(!state.is_user_online("u1"));
}

// =============================================================
// Staleness
// =============================================================

#[test]
fn mark_stale_is_idempotent() {
    let mut state = ChatState::default();
    state.mark_conversations_stale();
    state.mark_conversations_stale();
    assert!(state.conversations_stale);
}

// =============================================================
// clear_selection_if
// =============================================================

#[test]
fn clear_selection_if_matches_selected_conversation() {
    let mut state = ChatState::default();
    state.selected_conversation_id = Some("c1".to_owned());
    state.messages_conversation_id = Some("c1".to_owned());
    state.messages.push(crate::net::types::ChatMessage {
        id: "m1".to_owned(),
        conversation_id: "c1".to_owned(),
        author_id: "u1".to_owned(),
        author_name: "Ann".to_owned(),
        content: "hi".to_owned(),
        edited: false,
        deleted: false,
        timestamp: 1,
    });

    state.clear_selection_if("c1");
    assert!(state.selected_conversation_id.is_none());
    assert!(state.messages.is_empty());
    assert!(state.messages_conversation_id.is_none());
}

#[test]
fn clear_selection_if_leaves_other_selection_untouched() {
    let mut state = ChatState::default();
    state.selected_conversation_id = Some("c1".to_owned());
    state.clear_selection_if("c2");
    assert_eq!(state.selected_conversation_id.as_deref(), Some("c1"));
}

// =============================================================
// conversation lookup
// =============================================================

#[test]
fn conversation_lookup_by_id() {
    let mut state = ChatState::default();
    state.conversations.push(conversation("c1"));
    state.conversations.push(conversation("c2"));
    assert_eq!(state.conversation("c2").map(|c| c.id.as_str()), Some("c2"));
    assert!(state.conversation("c9").is_none());
}
