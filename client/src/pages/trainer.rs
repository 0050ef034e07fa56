//! Trainer page: login gate, filter + refresh toolbar, counts and cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the view controller. It owns no data of its own: it wires the
//! shared signals into a `SignalSink`, routes card events to session actions,
//! and turns action failures into the error banner. Login failures use a
//! blocking alert instead and leave the gate in place.

use std::future::Future;

use leptos::prelude::*;

use crate::actions::{self, CardAction, TrainerSink};
use crate::components::card_list::CardList;
use crate::components::color_counts::ColorCountsPanel;
use crate::components::error_banner::ErrorBanner;
use crate::components::filter_bar::FilterBar;
use crate::components::login_modal::LoginModal;
use crate::net::api::HttpApi;
use crate::net::types::{ColorCounts, ColorFilter, VocabularyEntry, WordColor};
use crate::state::card::Verdict;
use crate::state::deck::{CardRef, DeckState};
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::util::audio::BrowserAudio;
use crate::util::dialog;

/// `TrainerSink` that writes into the app's context signals.
#[derive(Clone, Copy)]
pub struct SignalSink {
    pub session: RwSignal<SessionState>,
    pub deck: RwSignal<DeckState>,
    pub counts: RwSignal<ColorCounts>,
}

impl SignalSink {
    fn with_card(&self, card: &CardRef, f: impl FnOnce(&mut crate::state::card::CardState)) {
        self.deck.update(|d| {
            if let Some(state) = d.card_mut(card) {
                f(state);
            }
        });
    }
}

impl TrainerSink for SignalSink {
    fn logged_in(&self, username: &str) {
        self.session.update(|s| s.sign_in(username));
    }

    fn replace_cards(&self, entries: Vec<VocabularyEntry>) {
        self.deck.update(|d| d.replace(entries));
    }

    fn card_checking(&self, card: &CardRef, checking: bool) {
        self.with_card(card, |c| if checking { c.begin_check() } else { c.cancel_check() });
    }

    fn card_verdict(&self, card: &CardRef, verdict: &Verdict) {
        self.with_card(card, |c| c.apply_verdict(verdict));
    }

    fn card_warning(&self, card: &CardRef, message: &str) {
        self.with_card(card, |c| c.warn(message));
    }

    fn card_color(&self, card: &CardRef, color: WordColor) {
        self.with_card(card, |c| c.color = color);
    }

    fn counts(&self, counts: ColorCounts) {
        self.counts.set(counts);
    }
}

/// Load a word list with the deck's loading flag raised for the duration.
async fn load_deck(sink: SignalSink, filter: ColorFilter) -> Result<(), actions::ActionError> {
    sink.deck.update(DeckState::begin_load);
    let result = actions::load_words(&HttpApi, &sink, filter).await;
    sink.deck.update(DeckState::finish_load);
    result.map(|_| ())
}

/// Run an action in the browser event loop and surface its failure.
fn spawn_action<F>(notice: RwSignal<NoticeState>, action: F)
where
    F: Future<Output = Result<(), actions::ActionError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = action.await {
            log::warn!("action failed: {e}");
            notice.update(|n| n.show(e.to_string()));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notice, action);
    }
}

#[component]
pub fn TrainerPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let deck = expect_context::<RwSignal<DeckState>>();
    let counts = expect_context::<RwSignal<ColorCounts>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let sink = SignalSink { session, deck, counts };

    let reload = move || {
        let filter = deck.with_untracked(|d| d.filter);
        spawn_action(notice, load_deck(sink, filter));
    };

    let on_login = Callback::new(move |raw_username: String| {
        session.update(|s| s.busy = true);
        spawn_action(notice, async move {
            let api = HttpApi;
            let result = actions::login(&api, &sink, &raw_username).await;
            session.update(|s| s.busy = false);
            if let Err(e) = result {
                dialog::alert(&e.to_string());
                return Ok(());
            }
            let filter = deck.with_untracked(|d| d.filter);
            load_deck(sink, filter).await
        });
    });

    let on_refresh = Callback::new(move |()| reload());

    let on_action = Callback::new(move |action: CardAction| match action {
        CardAction::Input { card, text } => deck.update(|d| d.set_input(&card, text)),
        CardAction::Check(card) => {
            let input = deck.with_untracked(|d| d.card(&card).map(|c| c.input.clone())).unwrap_or_default();
            spawn_action(notice, async move {
                let api = HttpApi;
                actions::validate_translation(&api, &sink, &card, &input).await.map(|_| ())
            });
        }
        CardAction::Color(card, color) => {
            spawn_action(notice, async move {
                let api = HttpApi;
                actions::assign_color(&api, &sink, &card, color).await
            });
        }
        CardAction::Audio(card) => {
            spawn_action(notice, async move {
                let api = HttpApi;
                actions::play_audio(&api, &BrowserAudio, &card.english).await
            });
        }
    });

    view! {
        <div class="trainer-page">
            <LoginModal session=session on_login=on_login/>
            <header class="trainer-page__header">
                <h1 class="trainer-page__title">"Vocabulary Trainer"</h1>
                <span class="trainer-page__user">
                    {move || session.with(|s| s.username.clone().unwrap_or_default())}
                </span>
                <ColorCountsPanel counts=counts/>
            </header>
            <FilterBar deck=deck on_refresh=on_refresh/>
            <ErrorBanner notice=notice/>
            <CardList deck=deck on_action=on_action/>
        </div>
    }
}
