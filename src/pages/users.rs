//! Users page — directory table with role assignment and deactivation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::notice_stack::NoticeStack;
use crate::state::auth::AuthState;
use crate::state::team::TeamState;
use crate::state::ui::UiState;
use crate::util::validate;

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let team = RwSignal::new(TeamState::default());

    #[cfg(feature = "hydrate")]
    {
        team.update(|t| t.loading = true);
        leptos::task::spawn_local(async move {
            let users = crate::net::api::fetch_users().await;
            let roles = crate::net::api::fetch_roles().await;
            team.update(|t| {
                match users {
                    Ok(users) => t.users = users,
                    Err(e) => t.error = Some(e),
                }
                t.roles = roles.unwrap_or_default();
                t.loading = false;
            });
        });
    }

    let show_create = RwSignal::new(false);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));

    let on_assign_role = Callback::new(move |(user_id, role): (String, String)| {
        let role_opt = if role.is_empty() { None } else { Some(role) };
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, role_opt);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fields = serde_json::json!({ "role": role_opt });
            match crate::net::api::update_user(&user_id, fields).await {
                Ok(user) => team.update(|t| t.upsert_user(user)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not update role: {e}"));
                }),
            }
        });
    });

    let on_toggle_active = Callback::new(move |(user_id, active): (String, bool)| {
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, active);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fields = serde_json::json!({ "active": active });
            match crate::net::api::update_user(&user_id, fields).await {
                Ok(user) => team.update(|t| t.upsert_user(user)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not update user: {e}"));
                }),
            }
        });
    });

    let role_names = move || {
        team.get()
            .roles
            .into_iter()
            .map(|role| role.name)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="users-page">
            <NavBar/>
            <div class="users-page__toolbar">
                <h2>"Users"</h2>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New User"
                </button>
            </div>

            <Show when=move || team.get().error.is_some()>
                <p class="users-page__error">{move || team.get().error.unwrap_or_default()}</p>
            </Show>

            <Show when=move || !team.get().loading fallback=move || view! { <p>"Loading users..."</p> }>
                <table class="users-page__table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            team.get()
                                .users
                                .into_iter()
                                .map(|user| {
                                    let assign_id = user.id.clone();
                                    let toggle_args = (user.id.clone(), !user.active);
                                    let current_role = user.role.clone().unwrap_or_default();
                                    view! {
                                        <tr class=if user.active { "" } else { "users-page__row--inactive" }>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>
                                                <select
                                                    class="users-page__role-select"
                                                    prop:value=current_role.clone()
                                                    on:change={
                                                        let assign_id = assign_id.clone();
                                                        move |ev| on_assign_role.run((assign_id.clone(), event_target_value(&ev)))
                                                    }
                                                >
                                                    <option value="">"(none)"</option>
                                                    {role_names()
                                                        .into_iter()
                                                        .map(|name| {
                                                            let selected = name == current_role;
                                                            view! {
                                                                <option value=name.clone() selected=selected>{name.clone()}</option>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--small"
                                                    on:click={
                                                        let toggle_args = toggle_args.clone();
                                                        move |_| on_toggle_active.run(toggle_args.clone())
                                                    }
                                                >
                                                    {if user.active { "Deactivate" } else { "Activate" }}
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
                <CreateUserDialog on_cancel=on_create_cancel team=team ui=ui/>
            </Show>
            <NoticeStack/>
        </div>
    }
}

/// Modal dialog for inviting a new user.
#[component]
fn CreateUserDialog(on_cancel: Callback<()>, team: RwSignal<TeamState>, ui: RwSignal<UiState>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let error = validate::first_error([
            validate::required("Name", &name_value),
            validate::required("Email", &email_value),
            validate::email(&email_value),
        ]);
        if let Some(message) = error {
            field_error.set(Some(message));
            return;
        }
        on_cancel.run(());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, team, ui);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_user(&name_value, &email_value, None).await {
                Ok(user) => team.update(|t| t.upsert_user(user)),
                Err(e) => ui.update(|u| {
                    u.push_notice(format!("Could not create user: {e}"));
                }),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Invite User"</h2>
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
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || field_error.get().is_some()>
                    <p class="dialog__error">{move || field_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>"Invite"</button>
                </div>
            </div>
        </div>
    }
}
