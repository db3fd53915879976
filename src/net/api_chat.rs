//! Chat REST endpoints extracted from `api`.
//!
//! SYSTEM CONTEXT
//! ==============
//! All chat mutations go over HTTP; the websocket only notifies. Call sites
//! invalidate the conversation cache on success instead of patching local
//! state, so the backend stays authoritative.

use crate::net::types::{ChatMessage, Conversation};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn conversation_messages_endpoint(conversation_id: &str) -> String {
    format!("/chat/conversations/{conversation_id}/messages")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn conversation_participants_endpoint(conversation_id: &str) -> String {
    format!("/chat/conversations/{conversation_id}/participants")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn message_endpoint(message_id: &str) -> String {
    format!("/chat/messages/{message_id}")
}

/// Fetch the conversation list from `GET /chat/conversations`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_conversations() -> Result<Vec<Conversation>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/chat/conversations").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a conversation via `POST /chat/conversations`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_conversation(
    kind: &str,
    participant_ids: &[String],
    project_id: Option<&str>,
) -> Result<Conversation, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "kind": kind,
            "participant_ids": participant_ids,
            "project_id": project_id,
        });
        super::post_json("/chat/conversations", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, participant_ids, project_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch one conversation's messages from
/// `GET /chat/conversations/:id/messages`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_messages(conversation_id: &str) -> Result<Vec<ChatMessage>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&conversation_messages_endpoint(conversation_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = conversation_id;
        Err("not available on server".to_owned())
    }
}

/// Send a message via `POST /chat/conversations/:id/messages`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn send_message(conversation_id: &str, content: &str) -> Result<ChatMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content });
        super::post_json(&conversation_messages_endpoint(conversation_id), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, content);
        Err("not available on server".to_owned())
    }
}

/// Edit a message's content via `PATCH /chat/messages/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn edit_message(message_id: &str, content: &str) -> Result<ChatMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content });
        super::patch_json(&message_endpoint(message_id), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message_id, content);
        Err("not available on server".to_owned())
    }
}

/// Delete a message via `DELETE /chat/messages/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_message(message_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::delete_empty(&message_endpoint(message_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message_id;
        Err("not available on server".to_owned())
    }
}

/// Add a participant via `POST /chat/conversations/:id/participants`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn add_participant(conversation_id: &str, user_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_id": user_id });
        super::post_empty(&conversation_participants_endpoint(conversation_id), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, user_id);
        Err("not available on server".to_owned())
    }
}

/// Remove a participant via
/// `DELETE /chat/conversations/:id/participants/:userId`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn remove_participant(conversation_id: &str, user_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("{}/{user_id}", conversation_participants_endpoint(conversation_id));
        super::delete_empty(&path).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, user_id);
        Err("not available on server".to_owned())
    }
}
