//! Services page — catalog table with create, edit, and delete.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::notice_stack::NoticeStack;
use crate::state::auth::AuthState;
use crate::state::services::ServicesState;
use crate::state::ui::UiState;
use crate::util::validate;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

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
                Err(e) => services.update(|s| {
                    s.error = Some(e);
                    s.loading = false;
                }),
            }
        });
    }

    let show_create = RwSignal::new(false);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));

    let on_delete = Callback::new(move |service_id: String| {
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = service_id;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_service(&service_id).await {
                Ok(()) => services.update(|s| s.remove(&service_id)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not delete service: {e}"));
                }),
            }
        });
    });

    view! {
        <div class="services-page">
            <NavBar/>
            <div class="services-page__toolbar">
                <h2>"Services"</h2>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Service"
                </button>
            </div>

            <Show when=move || services.get().error.is_some()>
                <p class="services-page__error">{move || services.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !services.get().loading
                fallback=move || view! { <p>"Loading services..."</p> }
            >
                <table class="services-page__table">
                    <thead>
                        <tr>
                            <th>"Service"</th>
                            <th>"Description"</th>
                            <th>"Rate"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            services
                                .get()
                                .items
                                .into_iter()
                                .map(|service| {
                                    let delete_id = service.id.clone();
                                    view! {
                                        <tr>
                                            <td>{service.name.clone()}</td>
                                            <td>{service.description.clone().unwrap_or_default()}</td>
                                            <td>{format_rate(service.rate)}</td>
                                            <td>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click={
                                                        let delete_id = delete_id.clone();
                                                        move |_| on_delete.run(delete_id.clone())
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || show_create.get()>
                <CreateServiceDialog on_cancel=on_create_cancel services=services ui=ui/>
            </Show>
            <NoticeStack/>
        </div>
    }
}

fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_owned(), |rate| format!("${rate:.0}/h"))
}

/// Modal dialog for publishing a new service.
#[component]
fn CreateServiceDialog(
    on_cancel: Callback<()>,
    services: RwSignal<ServicesState>,
    ui: RwSignal<UiState>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let rate = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let name_value = name.get().trim().to_owned();
        let rate_value = rate.get().trim().to_owned();
        let error = validate::first_error([
            validate::required("Service name", &name_value),
            if rate_value.is_empty() { None } else { validate::positive_amount("Rate", &rate_value) },
        ]);
        if let Some(message) = error {
            field_error.set(Some(message));
            return;
        }
        let description_value = description.get().trim().to_owned();
        let description_opt = if description_value.is_empty() { None } else { Some(description_value) };
        let rate_opt = rate_value.parse::<f64>().ok();
        on_cancel.run(());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, description_opt, rate_opt, services, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_service(&name_value, description_opt.as_deref(), rate_opt).await {
                Ok(service) => services.update(|s| s.upsert(service)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not create service: {e}"));
                }),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Service"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Hourly rate (optional)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="120"
                        prop:value=move || rate.get()
                        on:input=move |ev| rate.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || field_error.get().is_some()>
                    <p class="dialog__error">{move || field_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>"Publish"</button>
                </div>
            </div>
        </div>
    }
}
