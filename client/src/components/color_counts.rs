//! Aggregate mastery counts (`#count-green`, `#count-amber`, `#count-red`,
//! `#count-gray`). Always shows the last fetched backend tally.

use leptos::prelude::*;

use crate::net::types::{ColorCounts, WordColor};
use crate::util::color::indicator_class;

/// Element id of the count label for `color`.
pub const fn count_element_id(color: WordColor) -> &'static str {
    match color {
        WordColor::Green => "count-green",
        WordColor::Amber => "count-amber",
        WordColor::Red => "count-red",
        WordColor::Gray => "count-gray",
    }
}

#[component]
pub fn ColorCountsPanel(counts: RwSignal<ColorCounts>) -> impl IntoView {
    let items = WordColor::ALL
        .into_iter()
        .map(|color| {
            view! {
                <span class="color-counts__item" title=color.label()>
                    <span class=format!("status-dot {}", indicator_class(color))></span>
                    <span id=count_element_id(color) class="color-counts__value">
                        {move || counts.get().get(color)}
                    </span>
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="color-counts">{items}</div> }
}
