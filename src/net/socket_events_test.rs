use super::*;
use crate::net::types::ParticipantStatus;

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn connect_and_disconnect_update_connection_status() {
    let mut chat = ChatState::default();
    apply_event(&mut chat, &ServerEvent::Connect);
    assert_eq!(chat.connection_status, ConnectionStatus::Connected);
    apply_event(&mut chat, &ServerEvent::Disconnect);
    assert_eq!(chat.connection_status, ConnectionStatus::Disconnected);
}

#[test]
fn error_event_changes_nothing() {
    let mut chat = ChatState::default();
    chat.presence.insert("u1".to_owned(), true);
    apply_event(&mut chat, &ServerEvent::Error("boom".to_owned()));
    assert!(chat.is_user_online("u1"));
    assert!(!chat.conversations_stale);
}

// =============================================================
// Presence
// =============================================================

#[test]
fn user_status_overwrites_single_entry() {
    let mut chat = ChatState::default();
    apply_event(&mut chat, &ServerEvent::UserStatus { user_id: "u1".to_owned(), online: true });
    assert!(chat.is_user_online("u1"));
    apply_event(&mut chat, &ServerEvent::UserStatus { user_id: "u1".to_owned(), online: false });
    assert!(!chat.is_user_online("u1"));
}

#[test]
fn initial_status_bulk_overwrites_regardless_of_prior_state() {
    let mut chat = ChatState::default();
    // Stale prior knowledge: p1 offline, p2 online.
    chat.presence.insert("p1".to_owned(), false);
    chat.presence.insert("p2".to_owned(), true);

    apply_event(
        &mut chat,
        &ServerEvent::ConversationInitialStatus {
            conversation_id: "c1".to_owned(),
            participants: vec![
                ParticipantStatus { user_id: "p1".to_owned(), online: true },
                ParticipantStatus { user_id: "p2".to_owned(), online: false },
            ],
        },
    );

    assert!(chat.is_user_online("p1"));
    assert!(!chat.is_user_online("p2"));
}

#[test]
fn initial_status_leaves_unlisted_participants_alone() {
    let mut chat = ChatState::default();
    chat.presence.insert("p3".to_owned(), true);
    apply_event(
        &mut chat,
        &ServerEvent::ConversationInitialStatus {
            conversation_id: "c1".to_owned(),
            participants: vec![ParticipantStatus { user_id: "p1".to_owned(), online: true }],
        },
    );
    assert!(chat.is_user_online("p3"));
}

// =============================================================
// Conversation cache invalidation
// =============================================================

#[test]
fn conversation_new_and_updated_mark_cache_stale() {
    let mut chat = ChatState::default();
    apply_event(&mut chat, &ServerEvent::ConversationNew);
    assert!(chat.conversations_stale);

    let mut chat = ChatState::default();
    apply_event(&mut chat, &ServerEvent::ConversationUpdated);
    assert!(chat.conversations_stale);
}

#[test]
fn double_invalidation_is_idempotent() {
    let mut chat = ChatState::default();
    // A mutation's HTTP success and its broadcast event may both invalidate.
    apply_event(&mut chat, &ServerEvent::ConversationUpdated);
    apply_event(&mut chat, &ServerEvent::ConversationUpdated);
    assert!(chat.conversations_stale);
}

#[test]
fn removed_conversation_clears_matching_selection() {
    let mut chat = ChatState::default();
    chat.selected_conversation_id = Some("c1".to_owned());
    apply_event(&mut chat, &ServerEvent::ConversationRemoved { conversation_id: "c1".to_owned() });
    assert!(chat.selected_conversation_id.is_none());
    assert!(chat.conversations_stale);
}

#[test]
fn removed_conversation_leaves_other_selection_untouched() {
    let mut chat = ChatState::default();
    chat.selected_conversation_id = Some("c1".to_owned());
    apply_event(&mut chat, &ServerEvent::ConversationRemoved { conversation_id: "c2".to_owned() });
    assert_eq!(chat.selected_conversation_id.as_deref(), Some("c1"));
    assert!(chat.conversations_stale);
}
