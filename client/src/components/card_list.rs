//! Card collection container (`#vocab-container`).
//!
//! DESIGN
//! ======
//! The list re-renders only when the deck roster changes, i.e. on a new
//! load. Typing into a card updates that card's memo without rebuilding the
//! list, and a new load rebuilds every card from scratch so no input value
//! or DOM node survives it.

use leptos::prelude::*;

use crate::actions::CardAction;
use crate::components::word_card::WordCard;
use crate::state::deck::DeckState;

/// Renders every card of the current deck in backend order.
#[component]
pub fn CardList(deck: RwSignal<DeckState>, on_action: Callback<CardAction>) -> impl IntoView {
    let roster = Memo::new(move |_| deck.with(DeckState::roster));

    view! {
        <div id="vocab-container" class="vocab-container">
            {move || {
                roster
                    .get()
                    .into_iter()
                    .map(|card| {
                        let lookup = card.clone();
                        let state = Memo::new(move |_| deck.with(|d| d.card(&lookup).cloned()));
                        view! { <WordCard card=card state=state on_action=on_action/> }
                    })
                    .collect::<Vec<_>>()
            }}
            <Show when=move || deck.with(|d| !d.loading && d.generation > 0 && d.is_empty())>
                <p class="vocab-container__empty">"No words to show."</p>
            </Show>
        </div>
    }
}
