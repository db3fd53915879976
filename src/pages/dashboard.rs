//! Dashboard page — authenticated landing route with overview widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Greets the signed-in user, previews recent projects, and hosts the
//! time-tracking widget. Redirects to `/login` when unauthenticated.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::notice_stack::NoticeStack;
use crate::state::auth::AuthState;
use crate::state::projects::ProjectsState;
use crate::util::timeclock::{TimeClock, format_elapsed};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let projects = RwSignal::new(ProjectsState::default());

    #[cfg(feature = "hydrate")]
    {
        projects.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_projects().await {
                Ok(items) => projects.update(|s| {
                    s.items = items;
                    s.loading = false;
                }),
                Err(e) => projects.update(|s| {
                    s.error = Some(e);
                    s.loading = false;
                }),
            }
        });
    }

    // Time tracker: a one-second tick drives the elapsed label while running.
    let clock = RwSignal::new(TimeClock::default());
    let now_ms = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        now_ms.set(js_sys::Date::now());
        let tick_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let tick_alive_task = tick_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !tick_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                now_ms.set(js_sys::Date::now());
            }
        });
        on_cleanup(move || tick_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let elapsed_label = move || format_elapsed(clock.get().elapsed_secs(now_ms.get()));
    let is_running = move || clock.get().is_running();

    let on_start_stop = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let now = js_sys::Date::now();
            clock.update(|c| if c.is_running() { c.stop(now) } else { c.start(now) });
        }
    };
    let on_reset = move |_| clock.update(TimeClock::reset);

    let greeting = move || {
        auth.get()
            .display_name()
            .map_or_else(|| "Welcome back".to_owned(), |name| format!("Welcome back, {name}"))
    };

    let recent_projects = move || {
        let state = projects.get();
        state.items.into_iter().take(4).collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <NavBar/>

                <div class="dashboard-page__grid">
                    <section class="dashboard-page__panel">
                        <h2>{greeting}</h2>
                        <div class="dashboard-page__quick-links">
                            <a class="btn" href="/projects">"Projects"</a>
                            <a class="btn" href="/chat">"Open Chat"</a>
                            <a class="btn" href="/users">"Team"</a>
                        </div>
                    </section>

                    <section class="dashboard-page__panel">
                        <h3>"Time tracker"</h3>
                        <div class="time-tracker">
                            <span class="time-tracker__elapsed">{elapsed_label}</span>
                            <button class="btn btn--primary" on:click=on_start_stop>
                                {move || if is_running() { "Stop" } else { "Start" }}
                            </button>
                            <button class="btn" on:click=on_reset>"Reset"</button>
                        </div>
                    </section>

                    <section class="dashboard-page__panel dashboard-page__panel--wide">
                        <h3>"Recent projects"</h3>
                        <Show when=move || projects.get().error.is_some()>
                            <p class="dashboard-page__error">
                                {move || projects.get().error.unwrap_or_default()}
                            </p>
                        </Show>
                        <Show
                            when=move || !projects.get().loading
                            fallback=move || view! { <p>"Loading projects..."</p> }
                        >
                            <ul class="dashboard-page__recent">
                                {move || {
                                    recent_projects()
                                        .into_iter()
                                        .map(|project| {
                                            let href = format!("/projects/{}", project.id);
                                            view! {
                                                <li>
                                                    <a href=href>{project.name}</a>
                                                    <span class="dashboard-page__recent-status">{project.status}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </section>
                </div>
                <NoticeStack/>
            </div>
        </Show>
    }
}
