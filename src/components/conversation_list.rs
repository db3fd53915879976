//! Conversation list for the chat layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the cached conversation list and presence map from `ChatState`;
//! selection is reported back to the page, which owns thread loading.

#[cfg(test)]
#[path = "conversation_list_test.rs"]
mod conversation_list_test;

use leptos::prelude::*;

use crate::net::types::Conversation;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;

/// Sidebar listing conversations with presence dots.
#[component]
pub fn ConversationList(on_select: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let rows = move || {
        let state = chat.get();
        let self_id = auth.get().user.map(|u| u.id);
        state
            .conversations
            .iter()
            .map(|conversation| {
                let online = conversation_peer_online(&state, conversation, self_id.as_deref());
                let selected = state.selected_conversation_id.as_deref() == Some(conversation.id.as_str());
                (conversation.clone(), online, selected)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="conversation-list">
            <Show
                when=move || !chat.get().conversations_loading
                fallback=move || view! { <p class="conversation-list__empty">"Loading conversations..."</p> }
            >
                <Show when=move || !rows().is_empty() fallback=move || view! {
                    <p class="conversation-list__empty">"No conversations yet."</p>
                }>
                    <ul class="conversation-list__items">
                        {move || {
                            rows()
                                .into_iter()
                                .map(|(conversation, online, selected)| {
                                    let id = conversation.id.clone();
                                    let label = conversation_label(&conversation);
                                    let class = if selected {
                                        "conversation-list__item conversation-list__item--selected"
                                    } else {
                                        "conversation-list__item"
                                    };
                                    view! {
                                        <li class=class on:click=move |_| on_select.run(id.clone())>
                                            <span class=presence_dot_class(online)></span>
                                            <span class="conversation-list__label">{label}</span>
                                            <Show when={
                                                let project = conversation.project_id.clone();
                                                move || project.is_some()
                                            }>
                                                <span class="conversation-list__project-tag">"project"</span>
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

/// Display label: explicit title, else a kind-based fallback.
pub(crate) fn conversation_label(conversation: &Conversation) -> String {
    match &conversation.title {
        Some(title) if !title.trim().is_empty() => title.clone(),
        _ if conversation.kind == "direct" => "Direct message".to_owned(),
        _ => "Group conversation".to_owned(),
    }
}

/// The other party of a direct conversation, for the presence dot.
pub(crate) fn direct_peer_id<'a>(conversation: &'a Conversation, self_id: Option<&str>) -> Option<&'a str> {
    if conversation.kind != "direct" {
        return None;
    }
    conversation
        .participant_ids
        .iter()
        .map(String::as_str)
        .find(|id| Some(*id) != self_id)
}

/// Direct conversations show the peer's presence; group conversations show
/// online if anyone besides the viewer is online.
pub(crate) fn conversation_peer_online(
    chat: &ChatState,
    conversation: &Conversation,
    self_id: Option<&str>,
) -> bool {
    if let Some(peer) = direct_peer_id(conversation, self_id) {
        return chat.is_user_online(peer);
    }
    conversation
        .participant_ids
        .iter()
        .filter(|id| Some(id.as_str()) != self_id)
        .any(|id| chat.is_user_online(id))
}

pub(crate) fn presence_dot_class(online: bool) -> &'static str {
    if online {
        "presence-dot presence-dot--online"
    } else {
        "presence-dot presence-dot--offline"
    }
}
