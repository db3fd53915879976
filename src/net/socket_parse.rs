//! Event-boundary decoding for inbound realtime frames.
//!
//! DESIGN
//! ======
//! Every frame is decoded into a tagged `ServerEvent` variant before any
//! state is touched. Unrecognized names and malformed payloads decode to
//! `None` so the dispatch site can log them, rather than silently
//! half-applying a broken update.

#[cfg(test)]
#[path = "socket_parse_test.rs"]
mod socket_parse_test;

use crate::net::types::ParticipantStatus;

/// A decoded inbound event from the realtime broker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ServerEvent {
    /// Handshake ack; the connection is authenticated and live.
    Connect,
    /// Server-initiated disconnect notice.
    Disconnect,
    /// Broker-reported error; logged, never applied to state.
    Error(String),
    /// One participant's online flag changed.
    UserStatus { user_id: String, online: bool },
    /// Bulk presence snapshot sent when a conversation is first opened.
    ConversationInitialStatus {
        conversation_id: String,
        participants: Vec<ParticipantStatus>,
    },
    ConversationNew,
    ConversationUpdated,
    ConversationRemoved { conversation_id: String },
}

/// Decode one raw text frame of the form `{"event": <name>, "data": {...}}`.
pub(crate) fn parse_server_event(raw: &str) -> Option<ServerEvent> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let name = value.get("event")?.as_str()?;
    let data = value.get("data").cloned().unwrap_or(serde_json::Value::Null);

    match name {
        "connect" => Some(ServerEvent::Connect),
        "disconnect" => Some(ServerEvent::Disconnect),
        "error" | "connect_error" => Some(ServerEvent::Error(
            pick_str(&data, &["message", "error"])
                .unwrap_or("realtime error")
                .to_owned(),
        )),
        "user:status" => {
            let user_id = pick_str(&data, &["user_id", "userId"])?.to_owned();
            let online = pick_online(&data)?;
            Some(ServerEvent::UserStatus { user_id, online })
        }
        "conversation:initial-status" => {
            let conversation_id = pick_str(&data, &["conversation_id", "conversationId"])?.to_owned();
            let participants = data
                .get("participants")
                .and_then(serde_json::Value::as_array)
                .map(|rows| rows.iter().filter_map(parse_participant_status).collect::<Vec<_>>())
                .unwrap_or_default();
            Some(ServerEvent::ConversationInitialStatus { conversation_id, participants })
        }
        "conversation:new" => Some(ServerEvent::ConversationNew),
        "conversation:updated" => Some(ServerEvent::ConversationUpdated),
        "conversation:removed" => {
            let conversation_id = pick_str(&data, &["conversation_id", "conversationId"])?.to_owned();
            Some(ServerEvent::ConversationRemoved { conversation_id })
        }
        _ => None,
    }
}

fn parse_participant_status(row: &serde_json::Value) -> Option<ParticipantStatus> {
    let user_id = pick_str(row, &["user_id", "userId"])?.to_owned();
    let online = pick_online(row)?;
    Some(ParticipantStatus { user_id, online })
}

/// Presence payloads carry either `"online": bool` or `"status": "online"`.
fn pick_online(data: &serde_json::Value) -> Option<bool> {
    if let Some(online) = data.get("online").and_then(serde_json::Value::as_bool) {
        return Some(online);
    }
    match pick_str(data, &["status"])? {
        "online" => Some(true),
        "offline" => Some(false),
        _ => None,
    }
}

pub(crate) fn pick_str<'a>(data: &'a serde_json::Value, keys: &[&str]) -> Option<&'a str> {
    for key in keys {
        if let Some(value) = data.get(key).and_then(serde_json::Value::as_str) {
            return Some(value);
        }
    }
    None
}
