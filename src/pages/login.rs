//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::util::validate;

/// First validation failure for the login form, if any.
pub(crate) fn validate_login(email: &str, password: &str) -> Option<String> {
    validate::first_error([
        validate::required("Email", email),
        validate::email(email),
        validate::required("Password", password),
        validate::min_len("Password", password, 8),
    ])
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_context::<RwSignal<crate::state::auth::AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Some(message) = validate_login(&email_value, &password_value) {
            info.set(message);
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, auth);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(user) => {
                    if let Some(auth) = auth {
                        auth.update(|a| {
                            a.user = Some(user);
                            a.loading = false;
                        });
                    }
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Workdesk"</h1>
                <p class="login-card__subtitle">"Sign in to your workspace"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-card__back" href="/">"Back to site"</a>
            </div>
        </div>
    }
}
