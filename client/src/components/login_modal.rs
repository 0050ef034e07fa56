//! Login gate (`#login-modal`, `#username-input`, `#login-btn`).
//!
//! Hidden, not removed, once a session is open so the element ids stay in the
//! document.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn LoginModal(session: RwSignal<SessionState>, on_login: Callback<String>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let busy = move || session.with(|s| s.busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        on_login.run(username.get_untracked());
    };

    view! {
        <div
            id="login-modal"
            class="login-modal"
            style:display=move || if session.with(SessionState::is_logged_in) { "none" } else { "flex" }
        >
            <form class="login-modal__card" on:submit=on_submit>
                <h1>"Vocabulary Trainer"</h1>
                <p class="login-modal__subtitle">"Pick a username to track your progress."</p>
                <input
                    id="username-input"
                    class="login-modal__input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <button id="login-btn" class="btn login-modal__button" type="submit" disabled=busy>
                    {move || if busy() { "Signing in..." } else { "Start" }}
                </button>
            </form>
        </div>
    }
}
