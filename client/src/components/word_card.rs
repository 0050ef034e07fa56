//! One flashcard: word label, status dot, manual color buttons, audio button,
//! translation input and Check button.
//!
//! DESIGN
//! ======
//! The card renders from its own derived state and reports every control
//! event through `on_action`; it performs no requests itself. Typing only
//! raises `CardAction::Input`, which never reaches the network.

use leptos::prelude::*;

use crate::actions::CardAction;
use crate::net::types::WordColor;
use crate::state::card::CardState;
use crate::state::deck::CardRef;
use crate::util::color::{indicator_class, status_dot_class};

/// A single vocabulary card.
#[component]
pub fn WordCard(card: CardRef, state: Memo<Option<CardState>>, on_action: Callback<CardAction>) -> impl IntoView {
    let english = card.english.clone();

    let color = move || state.get().map_or(WordColor::Gray, |c| c.color);
    let input = move || state.get().map(|c| c.input).unwrap_or_default();
    let can_check = move || state.get().is_some_and(|c| c.can_check());
    let checking = move || state.get().is_some_and(|c| c.phase.is_checking());
    let border = move || state.get().map_or("transparent", |c| c.border_color());
    let message = move || state.get().and_then(|c| c.message);

    let color_buttons = WordColor::MANUAL
        .into_iter()
        .map(|choice| {
            let card = card.clone();
            view! {
                <button
                    class=format!("color-btn {}", indicator_class(choice))
                    data-color=choice.as_str()
                    title=choice.label()
                    aria-label=format!("Mark {}", choice.label())
                    on:click=move |_| on_action.run(CardAction::Color(card.clone(), choice))
                ></button>
            }
        })
        .collect::<Vec<_>>();

    let audio_card = card.clone();
    let input_card = card.clone();
    let enter_card = card.clone();
    let check_card = card;

    view! {
        <div class="word-card" data-english=english.clone() style:border-color=border>
            <div class="word-card__row">
                <div class="word-card__head">
                    <h2 class="word-card__word">{english.clone()}</h2>
                    <span class=move || status_dot_class(color())></span>
                    <div class="word-card__colors">{color_buttons}</div>
                </div>
                <button
                    class="btn audio-btn"
                    title="Play pronunciation"
                    on:click=move |_| on_action.run(CardAction::Audio(audio_card.clone()))
                >
                    "🔊"
                </button>
            </div>
            <div class="word-card__row">
                <input
                    type="text"
                    class="french-input"
                    placeholder="Enter French"
                    prop:value=input
                    on:input=move |ev| {
                        on_action.run(CardAction::Input { card: input_card.clone(), text: event_target_value(&ev) });
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            on_action.run(CardAction::Check(enter_card.clone()));
                        }
                    }
                />
                <button
                    class="btn validate-btn"
                    class:validate-btn--disabled=move || !can_check()
                    disabled=move || !can_check()
                    on:click=move |_| on_action.run(CardAction::Check(check_card.clone()))
                >
                    {move || if checking() { "Checking..." } else { "Check" }}
                </button>
            </div>
            <p class=move || message().map_or("word-card__result", |m| m.tone.class())>
                {move || message().map(|m| m.text).unwrap_or_default()}
            </p>
        </div>
    }
}
