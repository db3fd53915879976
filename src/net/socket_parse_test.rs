use super::*;

fn raw(event: &str, data: serde_json::Value) -> String {
    serde_json::json!({ "event": event, "data": data }).to_string()
}

// =============================================================
// Lifecycle events
// =============================================================

#[test]
fn parses_connect_and_disconnect() {
    assert_eq!(parse_server_event(&raw("connect", serde_json::json!({}))), Some(ServerEvent::Connect));
    assert_eq!(
        parse_server_event(&raw("disconnect", serde_json::json!({}))),
        Some(ServerEvent::Disconnect)
    );
}

#[test]
fn connect_event_without_data_field_still_parses() {
    assert_eq!(parse_server_event(r#"{"event":"connect"}"#), Some(ServerEvent::Connect));
}

#[test]
fn error_events_carry_a_message() {
    let event = parse_server_event(&raw("error", serde_json::json!({ "message": "boom" })));
    assert_eq!(event, Some(ServerEvent::Error("boom".to_owned())));

    let event = parse_server_event(&raw("connect_error", serde_json::json!({})));
    assert_eq!(event, Some(ServerEvent::Error("realtime error".to_owned())));
}

// =============================================================
// user:status
// =============================================================

#[test]
fn parses_user_status_with_bool_flag() {
    let event = parse_server_event(&raw("user:status", serde_json::json!({ "user_id": "u1", "online": true })));
    assert_eq!(event, Some(ServerEvent::UserStatus { user_id: "u1".to_owned(), online: true }));
}

#[test]
fn parses_user_status_with_string_status() {
    let event = parse_server_event(&raw("user:status", serde_json::json!({ "userId": "u2", "status": "offline" })));
    assert_eq!(event, Some(ServerEvent::UserStatus { user_id: "u2".to_owned(), online: false }));
}

#[test]
fn user_status_without_identity_is_rejected() {
    assert!(parse_server_event(&raw("user:status", serde_json::json!({ "online": true }))).is_none());
}

#[test]
fn user_status_with_unknown_status_word_is_rejected() {
    assert!(parse_server_event(&raw("user:status", serde_json::json!({ "user_id": "u1", "status": "away" }))).is_none());
}

// =============================================================
// conversation:initial-status
// =============================================================

#[test]
fn parses_initial_status_participants() {
    let event = parse_server_event(&raw(
        "conversation:initial-status",
        serde_json::json!({
            "conversation_id": "c1",
            "participants": [
                { "user_id": "p1", "online": true },
                { "user_id": "p2", "status": "offline" },
                { "online": true }
            ]
        }),
    ));
    let Some(ServerEvent::ConversationInitialStatus { conversation_id, participants }) = event else {
        panic!("expected initial-status event");
    };
    assert_eq!(conversation_id, "c1");
    // The row without an identity is skipped, not fatal.
    assert_eq!(participants.len(), 2);
    assert!(participants[0].online);
    assert!(!participants[1].online);
}

#[test]
fn initial_status_without_participants_list_parses_empty() {
    let event = parse_server_event(&raw("conversation:initial-status", serde_json::json!({ "conversation_id": "c1" })));
    assert_eq!(
        event,
        Some(ServerEvent::ConversationInitialStatus {
            conversation_id: "c1".to_owned(),
            participants: Vec::new()
        })
    );
}

// =============================================================
// conversation lifecycle
// =============================================================

#[test]
fn parses_conversation_new_updated_removed() {
    assert_eq!(
        parse_server_event(&raw("conversation:new", serde_json::json!({ "conversation_id": "c1" }))),
        Some(ServerEvent::ConversationNew)
    );
    assert_eq!(
        parse_server_event(&raw("conversation:updated", serde_json::json!({}))),
        Some(ServerEvent::ConversationUpdated)
    );
    assert_eq!(
        parse_server_event(&raw("conversation:removed", serde_json::json!({ "conversationId": "c9" }))),
        Some(ServerEvent::ConversationRemoved { conversation_id: "c9".to_owned() })
    );
}

#[test]
fn conversation_removed_without_id_is_rejected() {
    assert!(parse_server_event(&raw("conversation:removed", serde_json::json!({}))).is_none());
}

// =============================================================
// Malformed input
// =============================================================

#[test]
fn unknown_event_names_are_rejected() {
    assert!(parse_server_event(&raw("typing:started", serde_json::json!({}))).is_none());
}

#[test]
fn non_json_and_shapeless_frames_are_rejected() {
    assert!(parse_server_event("not json").is_none());
    assert!(parse_server_event(r#"{"data":{}}"#).is_none());
    assert!(parse_server_event(r#"{"event":42}"#).is_none());
}
