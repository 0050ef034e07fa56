//! Dismissible banner for failed backend round-trips.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn ErrorBanner(notice: RwSignal<NoticeState>) -> impl IntoView {
    view! {
        <Show when=move || notice.with(|n| n.error.is_some())>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">{move || notice.with(|n| n.error.clone().unwrap_or_default())}</span>
                <button
                    class="error-banner__dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| notice.update(NoticeState::dismiss)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
