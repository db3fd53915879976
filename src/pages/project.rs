//! Project detail page — header fields, milestones, and tasks.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between the URL project id
//! and `ProjectDetailState`: route transitions reset the cache and refetch
//! all three resources.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::components::notice_stack::NoticeStack;
use crate::state::auth::AuthState;
use crate::state::projects::ProjectDetailState;
use crate::state::ui::UiState;
use crate::util::validate;

/// Task workflow cycle used by the status button.
pub(crate) fn next_task_status(status: &str) -> &'static str {
    match status {
        "todo" => "doing",
        "doing" => "done",
        _ => "todo",
    }
}

/// Completed/total milestone counts for the header summary.
pub(crate) fn milestone_progress(state: &ProjectDetailState) -> (usize, usize) {
    let done = state.milestones.iter().filter(|m| m.completed).count();
    (done, state.milestones.len())
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let params = use_params_map();
    let project_id = move || params.read().get("id");

    let detail = RwSignal::new(ProjectDetailState::default());
    let loaded_project_id = RwSignal::new(None::<String>);

    // Refetch whenever the route's project id changes.
    Effect::new(move || {
        let Some(id) = project_id() else {
            return;
        };
        if loaded_project_id.get() == Some(id.clone()) {
            return;
        }
        loaded_project_id.set(Some(id.clone()));
        detail.set(ProjectDetailState { loading: true, ..ProjectDetailState::default() });
        load_detail(detail, id);
    });

    let new_milestone_title = RwSignal::new(String::new());
    let new_task_title = RwSignal::new(String::new());

    let on_add_milestone = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = project_id() else {
            return;
        };
        let title = new_milestone_title.get().trim().to_owned();
        if validate::required("Milestone title", &title).is_some() {
            return;
        }
        new_milestone_title.set(String::new());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, title, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_milestone(&id, &title, None).await {
                Ok(milestone) => detail.update(|d| d.upsert_milestone(milestone)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not add milestone: {e}"));
                }),
            }
        });
    };

    let on_add_task = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = project_id() else {
            return;
        };
        let title = new_task_title.get().trim().to_owned();
        if validate::required("Task title", &title).is_some() {
            return;
        }
        new_task_title.set(String::new());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, title);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_task(&id, &title, None, None).await {
                Ok(task) => detail.update(|d| d.upsert_task(task)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not add task: {e}"));
                }),
            }
        });
    };

    let on_toggle_milestone = Callback::new(move |(milestone_id, completed): (String, bool)| {
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (milestone_id, completed);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_milestone_completed(&milestone_id, completed).await {
                Ok(milestone) => detail.update(|d| d.upsert_milestone(milestone)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not update milestone: {e}"));
                }),
            }
        });
    });

    let on_cycle_task = Callback::new(move |(task_id, status): (String, String)| {
        let next = next_task_status(&status).to_owned();
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (task_id, next);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_task_status(&task_id, &next).await {
                Ok(task) => detail.update(|d| d.upsert_task(task)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not update task: {e}"));
                }),
            }
        });
    });

    let on_delete_task = Callback::new(move |task_id: String| {
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = task_id;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_task(&task_id).await {
                Ok(()) => detail.update(|d| d.remove_task(&task_id)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not delete task: {e}"));
                }),
            }
        });
    });

    let header = move || {
        let state = detail.get();
        let (done, total) = milestone_progress(&state);
        state.project.map(|project| {
            (
                project.name,
                project.client_name.unwrap_or_else(|| "Internal".to_owned()),
                project.status,
                format!("{done}/{total} milestones"),
            )
        })
    };

    view! {
        <div class="project-page">
            <NavBar/>
            <Show when=move || detail.get().error.is_some()>
                <p class="project-page__error">{move || detail.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !detail.get().loading
                fallback=move || view! { <p>"Loading project..."</p> }
            >
                <Show when=move || header().is_some()>
                    <header class="project-page__header">
                        <h2>{move || header().map(|h| h.0).unwrap_or_default()}</h2>
                        <span class="project-page__client">{move || header().map(|h| h.1).unwrap_or_default()}</span>
                        <span class="project-page__status">{move || header().map(|h| h.2).unwrap_or_default()}</span>
                        <span class="project-page__progress">{move || header().map(|h| h.3).unwrap_or_default()}</span>
                    </header>
                </Show>

                <div class="project-page__columns">
                    <section class="project-page__milestones">
                        <h3>"Milestones"</h3>
                        <ul>
                            {move || {
                                detail
                                    .get()
                                    .milestones
                                    .into_iter()
                                    .map(|milestone| {
                                        let toggle_args = (milestone.id.clone(), !milestone.completed);
                                        let class = if milestone.completed {
                                            "project-page__milestone project-page__milestone--done"
                                        } else {
                                            "project-page__milestone"
                                        };
                                        view! {
                                            <li class=class>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=milestone.completed
                                                    on:change={
                                                        let toggle_args = toggle_args.clone();
                                                        move |_| on_toggle_milestone.run(toggle_args.clone())
                                                    }
                                                />
                                                <span>{milestone.title.clone()}</span>
                                                <span class="project-page__due">
                                                    {milestone.due_date.clone().unwrap_or_default()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <form class="project-page__add" on:submit=on_add_milestone>
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="New milestone"
                                prop:value=move || new_milestone_title.get()
                                on:input=move |ev| new_milestone_title.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit">"Add"</button>
                        </form>
                    </section>

                    <section class="project-page__tasks">
                        <h3>"Tasks"</h3>
                        <ul>
                            {move || {
                                detail
                                    .get()
                                    .tasks
                                    .into_iter()
                                    .map(|task| {
                                        let cycle_args = (task.id.clone(), task.status.clone());
                                        let delete_id = task.id.clone();
                                        view! {
                                            <li class="project-page__task">
                                                <button
                                                    class="btn btn--small"
                                                    title="Advance status"
                                                    on:click={
                                                        let cycle_args = cycle_args.clone();
                                                        move |_| on_cycle_task.run(cycle_args.clone())
                                                    }
                                                >
                                                    {task.status.clone()}
                                                </button>
                                                <span>{task.title.clone()}</span>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    title="Delete task"
                                                    on:click={
                                                        let delete_id = delete_id.clone();
                                                        move |_| on_delete_task.run(delete_id.clone())
                                                    }
                                                >
                                                    "×"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <form class="project-page__add" on:submit=on_add_task>
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="New task"
                                prop:value=move || new_task_title.get()
                                on:input=move |ev| new_task_title.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit">"Add"</button>
                        </form>
                    </section>
                </div>
            </Show>
            <NoticeStack/>
        </div>
    }
}

/// Fetch project, milestones, and tasks for one project id.
fn load_detail(detail: RwSignal<ProjectDetailState>, project_id: String) {
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        detail.update(|d| d.loading = false);
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let project = crate::net::api::fetch_project(&project_id).await;
        let milestones = crate::net::api::fetch_milestones(&project_id).await;
        let tasks = crate::net::api::fetch_tasks(&project_id).await;
        detail.update(|d| {
            match project {
                Ok(project) => d.project = Some(project),
                Err(e) => d.error = Some(e),
            }
            d.milestones = milestones.unwrap_or_default();
            d.tasks = tasks.unwrap_or_default();
            d.loading = false;
        });
    });
}
