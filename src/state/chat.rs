//! Presence and conversation state for the chat feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the local projection of the realtime layer: connection status, a
//! presence map fed by broker events, and the cached conversation list with
//! its staleness flag. Mutations never write here directly; the cache is
//! invalidated and refetched so the backend stays authoritative.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashMap;

use crate::net::types::{ChatMessage, Conversation};

/// Realtime connection lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// Websocket handshake is in progress.
    Connecting,
    /// Websocket is open and the broker acked the handshake.
    Connected,
}

/// Chat-level state: connection, presence, conversations, and the open thread.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Current realtime connection lifecycle state.
    pub connection_status: ConnectionStatus,
    /// Last known online flag per participant id. Entries never expire;
    /// a new event overwrites the previous one.
    pub presence: HashMap<String, bool>,
    /// Cached conversation list; eventually consistent with the backend.
    pub conversations: Vec<Conversation>,
    /// True when a broker event invalidated the list since the last fetch.
    pub conversations_stale: bool,
    /// True while a conversation list fetch is in flight.
    pub conversations_loading: bool,
    /// Conversation currently displayed, if any.
    pub selected_conversation_id: Option<String>,
    /// Messages of the selected conversation.
    pub messages: Vec<ChatMessage>,
    /// Which conversation `messages` belongs to; kept separate from the
    /// selection so a stale fetch result can be detected and dropped.
    pub messages_conversation_id: Option<String>,
    /// True while a message fetch is in flight.
    pub messages_loading: bool,
    /// Last fetch error, surfaced inline in the chat layout.
    pub error: Option<String>,
}

impl ChatState {
    /// Presence lookup. Unknown participants are offline, not "unknown".
    pub fn is_user_online(&self, participant_id: &str) -> bool {
        self.presence.get(participant_id).copied().unwrap_or(false)
    }

    /// Mark the conversation cache stale. Idempotent: a second invalidation
    /// before the refetch lands changes nothing.
    pub fn mark_conversations_stale(&mut self) {
        self.conversations_stale = true;
    }

    /// Drop the selection (and its thread) if it points at `conversation_id`.
    pub fn clear_selection_if(&mut self, conversation_id: &str) {
        if self.selected_conversation_id.as_deref() == Some(conversation_id) {
            self.selected_conversation_id = None;
        }
        if self.messages_conversation_id.as_deref() == Some(conversation_id) {
            self.messages.clear();
            self.messages_conversation_id = None;
        }
    }

    /// Find a cached conversation by id.
    pub fn conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == conversation_id)
    }
}
