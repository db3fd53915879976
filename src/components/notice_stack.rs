//! Transient notice toasts, fed by mutation failures.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Bottom-corner stack of dismissible notices.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notice-stack">
            {move || {
                ui.get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class="notice-stack__item">
                                <span class="notice-stack__message">{notice.message}</span>
                                <button
                                    class="notice-stack__dismiss"
                                    on:click=move |_| ui.update(|u| u.dismiss_notice(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
