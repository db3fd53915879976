//! Applies decoded broker events to `ChatState`.

#[cfg(test)]
#[path = "socket_events_test.rs"]
mod socket_events_test;

use super::socket_parse::ServerEvent;
use crate::state::chat::{ChatState, ConnectionStatus};

/// Fold one decoded event into chat state.
///
/// Conversation mutations invalidate the cached list instead of merging
/// incrementally; lists are small and a refetch is always correct.
pub(crate) fn apply_event(chat: &mut ChatState, event: &ServerEvent) {
    match event {
        ServerEvent::Connect => {
            chat.connection_status = ConnectionStatus::Connected;
        }
        ServerEvent::Disconnect => {
            chat.connection_status = ConnectionStatus::Disconnected;
        }
        // Logged at the dispatch site; no state to change.
        ServerEvent::Error(_) => {}
        ServerEvent::UserStatus { user_id, online } => {
            chat.presence.insert(user_id.clone(), *online);
        }
        ServerEvent::ConversationInitialStatus { participants, .. } => {
            for participant in participants {
                chat.presence.insert(participant.user_id.clone(), participant.online);
            }
        }
        ServerEvent::ConversationNew | ServerEvent::ConversationUpdated => {
            chat.mark_conversations_stale();
        }
        ServerEvent::ConversationRemoved { conversation_id } => {
            chat.clear_selection_if(conversation_id);
            chat.mark_conversations_stale();
        }
    }
}
