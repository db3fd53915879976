use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_with_defaults() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Ann",
        "email": "ann@example.com",
        "role": "admin",
        "avatar_url": null
    }))
    .expect("user should deserialize");
    assert_eq!(user.id, "u1");
    assert_eq!(user.role.as_deref(), Some("admin"));
    assert!(user.active, "active defaults to true when omitted");
}

#[test]
fn user_respects_explicit_inactive_flag() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Ann",
        "email": "ann@example.com",
        "role": null,
        "avatar_url": null,
        "active": false
    }))
    .expect("user should deserialize");
    assert!(!user.active);
}

// =============================================================
// Conversation
// =============================================================

#[test]
fn conversation_participant_ids_default_to_empty() {
    let conversation: Conversation = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "kind": "direct",
        "title": null,
        "project_id": null,
        "last_activity": null
    }))
    .expect("conversation should deserialize");
    assert!(conversation.participant_ids.is_empty());
}

#[test]
fn conversation_round_trips_project_scope() {
    let conversation = Conversation {
        id: "c1".to_owned(),
        kind: "group".to_owned(),
        title: Some("Launch".to_owned()),
        participant_ids: vec!["u1".to_owned(), "u2".to_owned()],
        project_id: Some("p1".to_owned()),
        last_activity: Some("2024-03-01T10:00:00Z".to_owned()),
    };
    let value = serde_json::to_value(&conversation).expect("serialize");
    let back: Conversation = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, conversation);
}

// =============================================================
// ChatMessage
// =============================================================

#[test]
fn chat_message_accepts_integer_timestamp() {
    let msg: ChatMessage = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "conversation_id": "c1",
        "author_id": "u1",
        "author_name": "Ann",
        "content": "hello",
        "timestamp": 1_700_000_000_000_i64
    }))
    .expect("message should deserialize");
    assert_eq!(msg.timestamp, 1_700_000_000_000);
    assert!(!msg.edited);
    assert!(!msg.deleted);
}

#[test]
fn chat_message_accepts_float_shaped_timestamp() {
    let msg: ChatMessage = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "conversation_id": "c1",
        "author_id": "u1",
        "author_name": "Ann",
        "content": "hello",
        "timestamp": 1_700_000_000_000.0
    }))
    .expect("message should deserialize");
    assert_eq!(msg.timestamp, 1_700_000_000_000);
}

#[test]
fn chat_message_rejects_fractional_timestamp() {
    let result: Result<ChatMessage, _> = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "conversation_id": "c1",
        "author_id": "u1",
        "author_name": "Ann",
        "content": "hello",
        "timestamp": 17.5
    }));
    assert!(result.is_err());
}

// =============================================================
// Role / Permission
// =============================================================

#[test]
fn role_permissions_default_to_empty() {
    let role: Role = serde_json::from_value(serde_json::json!({
        "id": "r1",
        "name": "viewer"
    }))
    .expect("role should deserialize");
    assert!(role.permissions.is_empty());
}

#[test]
fn participant_status_round_trips() {
    let status = ParticipantStatus { user_id: "u1".to_owned(), online: true };
    let value = serde_json::to_value(&status).expect("serialize");
    let back: ParticipantStatus = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, status);
}
