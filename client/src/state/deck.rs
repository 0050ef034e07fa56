//! Rendered deck: the ordered card set from the latest word-list load.
//!
//! DESIGN
//! ======
//! Every load replaces the whole card set and bumps `generation`. Cards are
//! addressed by [`CardRef`] (generation + english), so a response that
//! resolves after a newer load lands on a card that no longer exists and is
//! dropped, exactly like a handler writing into a detached DOM node.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use crate::net::types::{ColorFilter, VocabularyEntry};

use super::card::CardState;

/// Address of one card within one render.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardRef {
    pub generation: u64,
    pub english: String,
}

/// Cards currently on screen plus the filter used for the next load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckState {
    pub cards: Vec<CardState>,
    pub generation: u64,
    pub filter: ColorFilter,
    /// A word-list request is in flight.
    pub loading: bool,
}

impl DeckState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Clear the loading flag without touching the cards (failed load).
    pub fn finish_load(&mut self) {
        self.loading = false;
    }

    /// Replace the card set wholesale, preserving backend order.
    pub fn replace(&mut self, entries: Vec<VocabularyEntry>) {
        self.loading = false;
        self.generation += 1;
        self.cards = entries.into_iter().map(CardState::new).collect();
    }

    /// Identity of every card in the current render, in display order.
    pub fn roster(&self) -> Vec<CardRef> {
        self.cards
            .iter()
            .map(|card| CardRef { generation: self.generation, english: card.english.clone() })
            .collect()
    }

    pub fn card(&self, card: &CardRef) -> Option<&CardState> {
        if card.generation != self.generation {
            return None;
        }
        self.cards.iter().find(|c| c.english == card.english)
    }

    /// Mutable access to a card; `None` when the ref belongs to an older render.
    pub fn card_mut(&mut self, card: &CardRef) -> Option<&mut CardState> {
        if card.generation != self.generation {
            return None;
        }
        self.cards.iter_mut().find(|c| c.english == card.english)
    }

    pub fn set_input(&mut self, card: &CardRef, text: String) {
        if let Some(state) = self.card_mut(card) {
            state.set_input(text);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
