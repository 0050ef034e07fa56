//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::ColorCounts;
use crate::pages::trainer::TrainerPage;
use crate::state::{deck::DeckState, notice::NoticeState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts read by the trainer page and its
/// components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let deck = RwSignal::new(DeckState::default());
    let counts = RwSignal::new(ColorCounts::default());
    let notice = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(deck);
    provide_context(counts);
    provide_context(notice);

    view! {
        <Stylesheet id="leptos" href="/pkg/vocab-trainer.css"/>
        <Title text="Vocabulary Trainer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TrainerPage/>
            </Routes>
        </Router>
    }
}
