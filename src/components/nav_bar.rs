//! Top navigation bar for authenticated screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the signed-in identity, the realtime connection dot, and the
//! logout/dark-mode controls shared by every dashboard route.

use leptos::prelude::*;

use crate::net::socket::SocketController;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, ConnectionStatus};
use crate::state::ui::UiState;

/// Navigation bar with route links and session controls.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let socket = expect_context::<SocketController>();

    let status_class = move || connection_status_class(chat.get().connection_status);
    let self_name = move || auth.get().display_name().unwrap_or("me").to_owned();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let socket = socket.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                socket.disconnect();
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &socket;
        }
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/dashboard">"Workdesk"</a>

            <nav class="nav-bar__links">
                <a href="/dashboard">"Overview"</a>
                <a href="/projects">"Projects"</a>
                <a href="/users">"Users"</a>
                <a href="/roles">"Roles"</a>
                <a href="/services">"Services"</a>
                <a href="/chat" class="nav-bar__chat-link">
                    "Chat"
                    <span class=status_class title="Realtime connection"></span>
                </a>
            </nav>

            <span class="nav-bar__spacer"></span>

            <button
                class="btn nav-bar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="nav-bar__self">{self_name}</span>

            <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}

fn connection_status_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "nav-bar__dot nav-bar__dot--connected",
        ConnectionStatus::Connecting => "nav-bar__dot nav-bar__dot--connecting",
        ConnectionStatus::Disconnected => "nav-bar__dot nav-bar__dot--disconnected",
    }
}
