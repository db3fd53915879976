//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! All shared state lives here as `RwSignal` contexts. The realtime socket
//! task is spawned exactly once and reached through the `SocketController`
//! context, so no other module owns connection state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::socket::spawn_socket_client;
use crate::pages::{
    chat::ChatPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, project::ProjectPage,
    projects::ProjectsPage, roles::RolesPage, services::ServicesPage, users::UsersPage,
};
use crate::state::{auth::AuthState, chat::ChatState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(chat);
    provide_context(ui);

    let socket = spawn_socket_client(chat);
    provide_context(socket.clone());

    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        ui.update(|u| u.dark_mode = dark);
        crate::util::dark_mode::apply(dark);

        leptos::task::spawn_local(async move {
            // No credential cookie means no session to restore; skipping the
            // fetch keeps anonymous visitors off the 401 redirect path.
            let has_token = crate::util::cookie::get(crate::util::cookie::ACCESS_TOKEN_COOKIE).is_some();
            let user = if has_token {
                crate::net::api::fetch_current_user().await
            } else {
                None
            };
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        auth.update(|a| a.loading = false);
    }

    // Keep the realtime connection in step with the session: connect is
    // idempotent, so re-running on unrelated auth changes is harmless.
    let socket_for_session = socket.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            socket_for_session.connect();
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/workdesk.css"/>
        <Title text="Workdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("roles") view=RolesPage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
