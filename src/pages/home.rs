//! Marketing home page: company pitch plus the published service catalog.

use leptos::prelude::*;

use crate::state::services::ServicesState;

/// Public landing page. The service catalog is fetched best-effort; the page
/// renders fine without it.
#[component]
pub fn HomePage() -> impl IntoView {
    let services = RwSignal::new(ServicesState::default());

    #[cfg(feature = "hydrate")]
    {
        services.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_services().await {
                Ok(items) => services.update(|s| {
                    s.items = items;
                    s.loading = false;
                }),
                Err(_) => services.update(|s| s.loading = false),
            }
        });
    }

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Workdesk"</h1>
                <p class="home-page__tagline">
                    "Projects, people, and client conversations in one place."
                </p>
                <a class="btn btn--primary home-page__cta" href="/login">
                    "Sign In"
                </a>
            </section>

            <section class="home-page__services">
                <h2>"What we do"</h2>
                <Show
                    when=move || !services.get().items.is_empty()
                    fallback=move || view! {
                        <p class="home-page__services-empty">
                            "Design, development, and delivery for teams of every size."
                        </p>
                    }
                >
                    <div class="home-page__service-cards">
                        {move || {
                            services
                                .get()
                                .items
                                .into_iter()
                                .map(|service| {
                                    view! {
                                        <div class="home-page__service-card">
                                            <h3>{service.name}</h3>
                                            <p>{service.description.unwrap_or_default()}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>

            <footer class="home-page__footer">
                <span>"© Workdesk"</span>
                <a href="/login">"Client portal"</a>
            </footer>
        </div>
    }
}
