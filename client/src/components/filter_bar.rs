//! Toolbar with the color filter (`#color-filter`) and refresh button
//! (`#refresh-btn`). Changing the filter takes effect on the next refresh.

use leptos::prelude::*;

use crate::net::types::ColorFilter;
use crate::state::deck::DeckState;

fn option_label(filter: ColorFilter) -> &'static str {
    match filter {
        ColorFilter::All => "All",
        ColorFilter::Only(color) => color.label(),
    }
}

#[component]
pub fn FilterBar(deck: RwSignal<DeckState>, on_refresh: Callback<()>) -> impl IntoView {
    let options = ColorFilter::OPTIONS
        .into_iter()
        .map(|filter| view! { <option value=filter.select_value()>{option_label(filter)}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="toolbar">
            <label class="toolbar__label" for="color-filter">"Filter"</label>
            <select
                id="color-filter"
                class="toolbar__select"
                prop:value=move || deck.with(|d| d.filter.select_value())
                on:change=move |ev| {
                    let filter = ColorFilter::from_select_value(&event_target_value(&ev));
                    deck.update(|d| d.filter = filter);
                }
            >
                {options}
            </select>
            <button
                id="refresh-btn"
                class="btn toolbar__refresh"
                disabled=move || deck.with(|d| d.loading)
                on:click=move |_| on_refresh.run(())
            >
                {move || if deck.with(|d| d.loading) { "Loading..." } else { "Refresh" }}
            </button>
        </div>
    }
}
