//! Project summary card for the projects grid.

use leptos::prelude::*;

/// Card linking to a project's detail page, with a delete affordance.
#[component]
pub fn ProjectCard(
    id: String,
    name: String,
    client_name: Option<String>,
    status: String,
    on_delete: Callback<String>,
) -> impl IntoView {
    let href = format!("/projects/{id}");
    let delete_id = id.clone();
    let status_class = format!("project-card__status project-card__status--{status}");

    view! {
        <div class="project-card">
            <a class="project-card__body" href=href>
                <span class="project-card__name">{name}</span>
                <span class="project-card__client">
                    {client_name.unwrap_or_else(|| "Internal".to_owned())}
                </span>
                <span class=status_class>{status}</span>
            </a>
            <button
                class="project-card__delete"
                title="Delete project"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(delete_id.clone());
                }
            >
                "×"
            </button>
        </div>
    }
}
