//! Chat page — conversation list, message thread, and membership dialogs.
//!
//! ARCHITECTURE
//! ============
//! This component coordinates the conversation cache with the realtime layer:
//! broker events only mark the cache stale, and an effect here performs the
//! refetch. Message mutations round-trip over HTTP and reload the thread; no
//! optimistic local writes.
//!
//! TRADE-OFFS
//! ==========
//! A mutation's HTTP success and its broadcast event can both invalidate the
//! cache; invalidation is idempotent so the double refetch is harmless.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::conversation_list::ConversationList;
use crate::components::message_thread::MessageThread;
use crate::components::nav_bar::NavBar;
use crate::components::notice_stack::NoticeStack;
use crate::net::socket::SocketController;
use crate::net::types::{ChatMessage, Conversation, User};
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, ConnectionStatus};
use crate::state::team::TeamState;
use crate::state::ui::UiState;

/// Users that can be picked as participants for a new conversation.
pub(crate) fn selectable_participants(users: &[User], self_id: Option<&str>) -> Vec<User> {
    users
        .iter()
        .filter(|user| user.active && Some(user.id.as_str()) != self_id)
        .cloned()
        .collect()
}

/// Users not yet part of the given conversation.
pub(crate) fn addable_users(users: &[User], conversation: &Conversation) -> Vec<User> {
    users
        .iter()
        .filter(|user| user.active && !conversation.participant_ids.iter().any(|id| id == &user.id))
        .cloned()
        .collect()
}

/// Two-party selections make a direct conversation, anything else a group.
pub(crate) fn conversation_kind_for(participant_count: usize) -> &'static str {
    if participant_count == 1 { "direct" } else { "group" }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let socket = expect_context::<SocketController>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    // Idempotent: the app shell connects on login, but deep links straight to
    // /chat must work too.
    socket.connect();
    chat.update(ChatState::mark_conversations_stale);

    let team = RwSignal::new(TeamState::default());
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let users = crate::net::api::fetch_users().await;
            team.update(|t| t.users = users.unwrap_or_default());
        });
    }

    // Stale flag -> refetch. Broker events and local mutations both funnel
    // through this one path.
    Effect::new(move || {
        let state = chat.get();
        if !state.conversations_stale || state.conversations_loading {
            return;
        }
        chat.update(|c| {
            c.conversations_stale = false;
            c.conversations_loading = true;
        });
        load_conversations(chat, ui);
    });

    // Selection -> thread load, skipping when the thread is already current.
    Effect::new(move || {
        let state = chat.get();
        let Some(id) = state.selected_conversation_id.clone() else {
            return;
        };
        if state.messages_conversation_id.as_deref() == Some(id.as_str()) || state.messages_loading {
            return;
        }
        chat.update(|c| c.messages_loading = true);
        load_messages(chat, ui, id);
    });

    let on_select = Callback::new(move |id: String| {
        chat.update(|c| c.selected_conversation_id = Some(id));
    });

    let draft = RwSignal::new(String::new());
    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get().trim().to_owned();
        let Some(conversation_id) = chat.get_untracked().selected_conversation_id else {
            return;
        };
        if content.is_empty() {
            return;
        }
        draft.set(String::new());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (content, conversation_id);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(&conversation_id, &content).await {
                Ok(_) => refresh_thread(chat, ui),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not send message: {e}"));
                }),
            }
        });
    };

    let edit_target = RwSignal::new(None::<ChatMessage>);
    let on_edit_request = Callback::new(move |message: ChatMessage| edit_target.set(Some(message)));
    let on_edit_cancel = Callback::new(move |()| edit_target.set(None));

    let on_delete = Callback::new(move |message_id: String| {
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message_id;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_message(&message_id).await {
                Ok(()) => refresh_thread(chat, ui),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not delete message: {e}"));
                }),
            }
        });
    });

    let show_new_conversation = RwSignal::new(false);
    let on_new_cancel = Callback::new(move |()| show_new_conversation.set(false));

    let show_participants = RwSignal::new(false);
    let on_participants_cancel = Callback::new(move |()| show_participants.set(false));

    let selected_conversation = move || {
        let state = chat.get();
        state
            .selected_conversation_id
            .as_deref()
            .and_then(|id| state.conversation(id).cloned())
    };

    let disconnected = move || chat.get().connection_status != ConnectionStatus::Connected;

    view! {
        <div class="chat-page">
            <NavBar/>

            <Show when=disconnected>
                <div class="chat-page__offline-banner">
                    "Realtime connection lost. Presence and live updates are paused."
                </div>
            </Show>

            <div class="chat-page__layout">
                <aside class="chat-page__sidebar">
                    <div class="chat-page__sidebar-header">
                        <h3>"Conversations"</h3>
                        <button class="btn btn--small" on:click=move |_| show_new_conversation.set(true)>
                            "+ New"
                        </button>
                    </div>
                    <ConversationList on_select=on_select/>
                </aside>

                <section class="chat-page__thread">
                    <Show
                        when=move || selected_conversation().is_some()
                        fallback=move || view! {
                            <p class="chat-page__placeholder">"Pick a conversation to start chatting."</p>
                        }
                    >
                        <div class="chat-page__thread-header">
                            <span class="chat-page__thread-title">
                                {move || {
                                    selected_conversation()
                                        .map(|c| crate::components::conversation_list::conversation_label(&c))
                                        .unwrap_or_default()
                                }}
                            </span>
                            <button class="btn btn--small" on:click=move |_| show_participants.set(true)>
                                "Participants"
                            </button>
                        </div>

                        <MessageThread on_edit=on_edit_request on_delete=on_delete/>

                        <form class="chat-page__composer" on:submit=on_send>
                            <input
                                class="chat-page__composer-input"
                                type="text"
                                placeholder="Write a message"
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary" type="submit">"Send"</button>
                        </form>
                    </Show>
                </section>
            </div>

            <Show when=move || edit_target.get().is_some()>
                <EditMessageDialog target=edit_target on_cancel=on_edit_cancel chat=chat ui=ui/>
            </Show>
            <Show when=move || show_new_conversation.get()>
                <NewConversationDialog on_cancel=on_new_cancel chat=chat team=team ui=ui auth=auth/>
            </Show>
            <Show when=move || show_participants.get()>
                <ParticipantsDialog on_cancel=on_participants_cancel chat=chat team=team ui=ui/>
            </Show>
            <NoticeStack/>
        </div>
    }
}

/// Fetch the conversation list and fold the result into state.
fn load_conversations(chat: RwSignal<ChatState>, ui: RwSignal<UiState>) {
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
        chat.update(|c| c.conversations_loading = false);
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_conversations().await {
            Ok(items) => chat.update(|c| {
                c.conversations = items;
                c.conversations_loading = false;
                c.error = None;
            }),
            Err(e) => {
                chat.update(|c| c.conversations_loading = false);
                ui.update(|u| {
                    u.push_notice(format!("Could not load conversations: {e}"));
                });
            }
        }
    });
}

/// Fetch messages for one conversation; a result arriving after the selection
/// moved on is dropped.
fn load_messages(chat: RwSignal<ChatState>, ui: RwSignal<UiState>, conversation_id: String) {
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, conversation_id);
        chat.update(|c| c.messages_loading = false);
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_messages(&conversation_id).await {
            Ok(items) => chat.update(|c| {
                if c.selected_conversation_id.as_deref() == Some(conversation_id.as_str()) {
                    c.messages = items;
                    c.messages_conversation_id = Some(conversation_id.clone());
                }
                c.messages_loading = false;
            }),
            Err(e) => {
                chat.update(|c| c.messages_loading = false);
                ui.update(|u| {
                    u.push_notice(format!("Could not load messages: {e}"));
                });
            }
        }
    });
}

/// Reload the open thread after a successful mutation.
#[cfg(feature = "hydrate")]
fn refresh_thread(chat: RwSignal<ChatState>, ui: RwSignal<UiState>) {
    let Some(id) = chat.get_untracked().selected_conversation_id else {
        return;
    };
    chat.update(|c| c.messages_loading = true);
    load_messages(chat, ui, id);
}

/// Modal dialog for editing one of the viewer's messages.
#[component]
fn EditMessageDialog(
    target: RwSignal<Option<ChatMessage>>,
    on_cancel: Callback<()>,
    chat: RwSignal<ChatState>,
    ui: RwSignal<UiState>,
) -> impl IntoView {
    let content = RwSignal::new(target.get_untracked().map(|m| m.content).unwrap_or_default());

    let submit = Callback::new(move |()| {
        let Some(message) = target.get_untracked() else {
            return;
        };
        let content_value = content.get().trim().to_owned();
        if content_value.is_empty() {
            return;
        }
        on_cancel.run(());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (message, content_value, chat, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::edit_message(&message.id, &content_value).await {
                Ok(_) => refresh_thread(chat, ui),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not edit message: {e}"));
                }),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Message"</h2>
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>"Save"</button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for starting a direct or group conversation.
#[component]
fn NewConversationDialog(
    on_cancel: Callback<()>,
    chat: RwSignal<ChatState>,
    team: RwSignal<TeamState>,
    ui: RwSignal<UiState>,
    auth: RwSignal<AuthState>,
) -> impl IntoView {
    let picked = RwSignal::new(Vec::<String>::new());

    let candidates = move || {
        let self_id = auth.get().user.map(|u| u.id);
        selectable_participants(&team.get().users, self_id.as_deref())
    };

    let toggle_pick = move |id: String| {
        picked.update(|list| {
            if let Some(pos) = list.iter().position(|p| p == &id) {
                list.remove(pos);
            } else {
                list.push(id);
            }
        });
    };

    let submit = Callback::new(move |()| {
        let participant_ids = picked.get_untracked();
        if participant_ids.is_empty() {
            return;
        }
        let kind = conversation_kind_for(participant_ids.len()).to_owned();
        on_cancel.run(());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (participant_ids, kind, chat, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_conversation(&kind, &participant_ids, None).await {
                Ok(created) => chat.update(|c| {
                    c.selected_conversation_id = Some(created.id.clone());
                    c.mark_conversations_stale();
                }),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not create conversation: {e}"));
                }),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Conversation"</h2>
                <p class="dialog__hint">
                    {move || {
                        let count = picked.get().len();
                        match count {
                            0 => "Pick at least one participant.".to_owned(),
                            1 => "Direct conversation".to_owned(),
                            n => format!("Group conversation with {n} people"),
                        }
                    }}
                </p>
                <div class="dialog__choices">
                    {move || {
                        candidates()
                            .into_iter()
                            .map(|user| {
                                let id = user.id.clone();
                                let checked_id = user.id.clone();
                                view! {
                                    <label class="dialog__choice">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || picked.get().contains(&checked_id)
                                            on:change={
                                                let id = id.clone();
                                                move |_| toggle_pick(id.clone())
                                            }
                                        />
                                        {user.name.clone()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>"Start"</button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog listing participants with add/remove controls.
#[component]
fn ParticipantsDialog(
    on_cancel: Callback<()>,
    chat: RwSignal<ChatState>,
    team: RwSignal<TeamState>,
    ui: RwSignal<UiState>,
) -> impl IntoView {
    let conversation = move || {
        let state = chat.get();
        state
            .selected_conversation_id
            .as_deref()
            .and_then(|id| state.conversation(id).cloned())
    };

    let on_remove = Callback::new(move |(conversation_id, user_id): (String, String)| {
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (conversation_id, user_id, chat, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_participant(&conversation_id, &user_id).await {
                Ok(()) => chat.update(ChatState::mark_conversations_stale),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not remove participant: {e}"));
                }),
            }
        });
    });

    let on_add = Callback::new(move |(conversation_id, user_id): (String, String)| {
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (conversation_id, user_id, chat, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_participant(&conversation_id, &user_id).await {
                Ok(()) => chat.update(ChatState::mark_conversations_stale),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not add participant: {e}"));
                }),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Participants"</h2>
                {move || {
                    conversation().map(|conversation| {
                        let conversation_for_add = conversation.clone();
                        let members = conversation
                            .participant_ids
                            .iter()
                            .map(|id| {
                                let state = team.get();
                                let name = state.user_name(id).unwrap_or(id.as_str()).to_owned();
                                let online = chat.get().is_user_online(id);
                                let remove_args = (conversation.id.clone(), id.clone());
                                view! {
                                    <li class="dialog__member">
                                        <span class=crate::components::conversation_list::presence_dot_class(online)></span>
                                        <span>{name}</span>
                                        <button
                                            class="btn btn--small"
                                            on:click={
                                                let remove_args = remove_args.clone();
                                                move |_| on_remove.run(remove_args.clone())
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>();

                        let additions = addable_users(&team.get().users, &conversation_for_add)
                            .into_iter()
                            .map(|user| {
                                let add_args = (conversation_for_add.id.clone(), user.id.clone());
                                view! {
                                    <li class="dialog__member dialog__member--addable">
                                        <span>{user.name.clone()}</span>
                                        <button
                                            class="btn btn--small"
                                            on:click={
                                                let add_args = add_args.clone();
                                                move |_| on_add.run(add_args.clone())
                                            }
                                        >
                                            "Add"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>();

                        view! {
                            <div>
                                <ul class="dialog__members">{members}</ul>
                                <h3 class="dialog__subheading">"Add people"</h3>
                                <ul class="dialog__members">{additions}</ul>
                            </div>
                        }
                    })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
