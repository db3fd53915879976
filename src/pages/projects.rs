//! Projects page — list, create, and delete projects.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::notice_stack::NoticeStack;
use crate::components::project_card::ProjectCard;
use crate::state::auth::AuthState;
use crate::state::projects::ProjectsState;
use crate::state::ui::UiState;
use crate::util::validate;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

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

    let show_create = RwSignal::new(false);
    let delete_project_id = RwSignal::new(None::<String>);

    let on_create = move |_| show_create.set(true);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_delete_request = Callback::new(move |id: String| delete_project_id.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_project_id.set(None));

    // Navigate once a create round-trip reports the new project id.
    let navigate_to_created = navigate.clone();
    Effect::new(move || {
        if let Some(project_id) = projects.get().created_project_id.clone() {
            projects.update(|s| s.created_project_id = None);
            navigate_to_created(&format!("/projects/{project_id}"), NavigateOptions::default());
        }
    });

    view! {
        <div class="projects-page">
            <NavBar/>
            <div class="projects-page__toolbar">
                <h2>"Projects"</h2>
                <button class="btn btn--primary" on:click=on_create>"+ New Project"</button>
            </div>

            <Show when=move || projects.get().error.is_some()>
                <p class="projects-page__error">{move || projects.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !projects.get().loading
                fallback=move || view! { <p>"Loading projects..."</p> }
            >
                <div class="projects-page__cards">
                    {move || {
                        projects
                            .get()
                            .items
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <ProjectCard
                                        id=project.id
                                        name=project.name
                                        client_name=project.client_name
                                        status=project.status
                                        on_delete=on_delete_request
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || show_create.get()>
                <CreateProjectDialog on_cancel=on_create_cancel projects=projects ui=ui/>
            </Show>
            <Show when=move || delete_project_id.get().is_some()>
                <DeleteProjectDialog
                    project_id=delete_project_id
                    on_cancel=on_delete_cancel
                    projects=projects
                    ui=ui
                />
            </Show>
            <NoticeStack/>
        </div>
    }
}

/// Modal dialog for creating a new project.
#[component]
fn CreateProjectDialog(
    on_cancel: Callback<()>,
    projects: RwSignal<ProjectsState>,
    ui: RwSignal<UiState>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let client_name = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let name_value = name.get().trim().to_owned();
        if let Some(message) = validate::required("Project name", &name_value) {
            field_error.set(Some(message));
            return;
        }
        let client_value = client_name.get().trim().to_owned();
        let client_opt = if client_value.is_empty() { None } else { Some(client_value) };
        projects.update(|s| s.create_pending = true);
        on_cancel.run(());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, client_opt, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_project(&name_value, client_opt.as_deref()).await {
                Ok(created) => {
                    let id = created.id.clone();
                    projects.update(|s| {
                        s.upsert(created);
                        s.create_pending = false;
                        s.created_project_id = Some(id);
                    });
                }
                Err(e) => {
                    projects.update(|s| s.create_pending = false);
                    ui.update(|u| {
                        u.push_notice(format!("Could not create project: {e}"));
                    });
                }
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Project"</h2>
                <label class="dialog__label">
                    "Project Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Client (optional)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || client_name.get()
                        on:input=move |ev| client_name.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || field_error.get().is_some()>
                    <p class="dialog__error">{move || field_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>"Create"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeleteProjectDialog(
    project_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    projects: RwSignal<ProjectsState>,
    ui: RwSignal<UiState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = project_id.get_untracked() else {
            return;
        };
        on_cancel.run(());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, projects, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_project(&id).await {
                Ok(()) => projects.update(|s| s.remove(&id)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not delete project: {e}"));
                }),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Project"</h2>
                <p class="dialog__danger">
                    "This removes the project along with its milestones and tasks."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>"Delete"</button>
                </div>
            </div>
        </div>
    }
}
