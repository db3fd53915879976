//! Roles page — role list plus the permission checkbox matrix.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selecting a role loads its permission set into a local working copy; the
//! matrix edits that copy and "Save" PATCHes the whole set back.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::notice_stack::NoticeStack;
use crate::state::auth::AuthState;
use crate::state::team::TeamState;
use crate::state::ui::UiState;
use crate::util::permissions::{group_by_resource, group_fully_selected, selected_in_catalog_order, toggle, toggle_group};
use crate::util::validate;

#[component]
pub fn RolesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let team = RwSignal::new(TeamState::default());
    let selected_role_id = RwSignal::new(None::<String>);
    let working_set = RwSignal::new(HashSet::<String>::new());
    let new_role_name = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        team.update(|t| t.loading = true);
        leptos::task::spawn_local(async move {
            let roles = crate::net::api::fetch_roles().await;
            let permissions = crate::net::api::fetch_permissions().await;
            team.update(|t| {
                match roles {
                    Ok(roles) => t.roles = roles,
                    Err(e) => t.error = Some(e),
                }
                t.permissions = permissions.unwrap_or_default();
                t.loading = false;
            });
        });
    }

    let on_select_role = Callback::new(move |role_id: String| {
        let state = team.get_untracked();
        let Some(role) = state.roles.iter().find(|r| r.id == role_id) else {
            return;
        };
        working_set.set(role.permissions.iter().cloned().collect());
        selected_role_id.set(Some(role_id));
    });

    let on_create_role = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = new_role_name.get().trim().to_owned();
        if validate::required("Role name", &name_value).is_some() {
            return;
        }
        new_role_name.set(String::new());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_role(&name_value).await {
                Ok(role) => team.update(|t| t.upsert_role(role)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not create role: {e}"));
                }),
            }
        });
    };

    let on_save = move |_| {
        let Some(role_id) = selected_role_id.get_untracked() else {
            return;
        };
        let payload = selected_in_catalog_order(&team.get_untracked().permissions, &working_set.get_untracked());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (role_id, payload);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_role_permissions(&role_id, &payload).await {
                Ok(role) => team.update(|t| t.upsert_role(role)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not save permissions: {e}"));
                }),
            }
        });
    };

    let groups = move || group_by_resource(&team.get().permissions);

    view! {
        <div class="roles-page">
            <NavBar/>
            <div class="roles-page__toolbar">
                <h2>"Roles & Permissions"</h2>
            </div>

            <Show when=move || team.get().error.is_some()>
                <p class="roles-page__error">{move || team.get().error.unwrap_or_default()}</p>
            </Show>

            <Show when=move || !team.get().loading fallback=move || view! { <p>"Loading roles..."</p> }>
                <div class="roles-page__columns">
                    <aside class="roles-page__list">
                        <ul>
                            {move || {
                                team.get()
                                    .roles
                                    .into_iter()
                                    .map(|role| {
                                        let id = role.id.clone();
                                        let selected = selected_role_id.get().as_deref() == Some(role.id.as_str());
                                        let class = if selected {
                                            "roles-page__role roles-page__role--selected"
                                        } else {
                                            "roles-page__role"
                                        };
                                        view! {
                                            <li class=class on:click=move |_| on_select_role.run(id.clone())>
                                                <span>{role.name.clone()}</span>
                                                <span class="roles-page__count">
                                                    {format!("{} perms", role.permissions.len())}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <form class="roles-page__add" on:submit=on_create_role>
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="New role"
                                prop:value=move || new_role_name.get()
                                on:input=move |ev| new_role_name.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit">"Add"</button>
                        </form>
                    </aside>

                    <section class="roles-page__matrix">
                        <Show
                            when=move || selected_role_id.get().is_some()
                            fallback=move || view! { <p>"Select a role to edit its permissions."</p> }
                        >
                            {move || {
                                groups()
                                    .into_iter()
                                    .map(|group| {
                                        let header_group = group.clone();
                                        let all_selected =
                                            move || group_fully_selected(&header_group, &working_set.get());
                                        let toggle_target = group.clone();
                                        view! {
                                            <fieldset class="roles-page__group">
                                                <legend>
                                                    <label>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=all_selected
                                                            on:change={
                                                                let toggle_target = toggle_target.clone();
                                                                move |_| working_set
                                                                    .update(|set| toggle_group(set, &toggle_target))
                                                            }
                                                        />
                                                        {group.resource.clone()}
                                                    </label>
                                                </legend>
                                                {group
                                                    .entries
                                                    .iter()
                                                    .map(|permission| {
                                                        let name = permission.name.clone();
                                                        let checked_name = permission.name.clone();
                                                        view! {
                                                            <label class="roles-page__permission">
                                                                <input
                                                                    type="checkbox"
                                                                    prop:checked=move || working_set.get().contains(&checked_name)
                                                                    on:change={
                                                                        let name = name.clone();
                                                                        move |_| working_set.update(|set| toggle(set, &name))
                                                                    }
                                                                />
                                                                {permission.name.clone()}
                                                            </label>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </fieldset>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                            <button class="btn btn--primary roles-page__save" on:click=on_save>
                                "Save Permissions"
                            </button>
                        </Show>
                    </section>
                </div>
            </Show>
            <NoticeStack/>
        </div>
    }
}
