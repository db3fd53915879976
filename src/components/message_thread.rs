//! Message thread for the selected conversation.
//!
//! No optimistic mutation: edits and deletes round-trip over HTTP and the
//! page refetches before the thread reflects the change.

#[cfg(test)]
#[path = "message_thread_test.rs"]
mod message_thread_test;

use leptos::prelude::*;

use crate::net::types::ChatMessage;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;

/// Scrollable list of messages with edit/delete controls on own rows.
#[component]
pub fn MessageThread(on_edit: Callback<ChatMessage>, on_delete: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let rows = move || {
        let self_id = auth.get().user.map(|u| u.id);
        chat.get()
            .messages
            .into_iter()
            .map(|message| {
                let own = is_own_message(&message, self_id.as_deref());
                (message, own)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="message-thread">
            <Show
                when=move || !chat.get().messages_loading
                fallback=move || view! { <p class="message-thread__empty">"Loading messages..."</p> }
            >
                <Show when=move || !rows().is_empty() fallback=move || view! {
                    <p class="message-thread__empty">"No messages yet. Say hello."</p>
                }>
                    <ul class="message-thread__items">
                        {move || {
                            rows()
                                .into_iter()
                                .map(|(message, own)| {
                                    let class = if own {
                                        "message-thread__item message-thread__item--own"
                                    } else {
                                        "message-thread__item"
                                    };
                                    let edit_target = message.clone();
                                    let delete_id = message.id.clone();
                                    view! {
                                        <li class=class>
                                            <div class="message-thread__meta">
                                                <span class="message-thread__author">{message.author_name.clone()}</span>
                                                <span class="message-thread__time">{format_clock_utc(message.timestamp)}</span>
                                                <Show when={
                                                    let edited = message.edited && !message.deleted;
                                                    move || edited
                                                }>
                                                    <span class="message-thread__edited">"(edited)"</span>
                                                </Show>
                                            </div>
                                            <p class="message-thread__content">{display_content(&message)}</p>
                                            <Show when={
                                                let deleted = message.deleted;
                                                move || own && !deleted
                                            }>
                                                <div class="message-thread__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click={
                                                            let edit_target = edit_target.clone();
                                                            move |_| on_edit.run(edit_target.clone())
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click={
                                                            let delete_id = delete_id.clone();
                                                            move |_| on_delete.run(delete_id.clone())
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
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

pub(crate) fn is_own_message(message: &ChatMessage, self_id: Option<&str>) -> bool {
    self_id == Some(message.author_id.as_str())
}

/// Deleted messages render a placeholder instead of their former content.
pub(crate) fn display_content(message: &ChatMessage) -> String {
    if message.deleted {
        "message deleted".to_owned()
    } else {
        message.content.clone()
    }
}

/// Epoch milliseconds as a `HH:MM` UTC wall-clock label.
pub(crate) fn format_clock_utc(timestamp_ms: i64) -> String {
    let total_secs = timestamp_ms.div_euclid(1000);
    let secs_of_day = total_secs.rem_euclid(86_400);
    let hours = secs_of_day / 3600;
    let minutes = (secs_of_day % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}
