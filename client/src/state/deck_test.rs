use super::*;
use crate::net::types::WordColor;

fn entry(english: &str, color: WordColor) -> VocabularyEntry {
    VocabularyEntry { english: english.to_owned(), color, french: None }
}

#[test]
fn default_deck_is_empty_with_all_filter() {
    let deck = DeckState::default();
    assert!(deck.is_empty());
    assert_eq!(deck.generation, 0);
    assert_eq!(deck.filter, ColorFilter::All);
}

#[test]
fn replace_preserves_backend_order_and_bumps_generation() {
    let mut deck = DeckState::default();
    deck.replace(vec![entry("moon", WordColor::Red), entry("apple", WordColor::Gray), entry("book", WordColor::Green)]);
    assert_eq!(deck.generation, 1);
    let words: Vec<&str> = deck.cards.iter().map(|c| c.english.as_str()).collect();
    assert_eq!(words, ["moon", "apple", "book"]);
    assert_eq!(deck.cards[2].color, WordColor::Green);
}

#[test]
fn replace_with_empty_result_renders_zero_cards() {
    let mut deck = DeckState::default();
    deck.replace(vec![entry("cat", WordColor::Gray)]);
    deck.replace(Vec::new());
    assert!(deck.is_empty());
    assert!(deck.roster().is_empty());
    assert_eq!(deck.generation, 2);
}

#[test]
fn replace_discards_typed_input() {
    let mut deck = DeckState::default();
    deck.replace(vec![entry("cat", WordColor::Gray)]);
    let cat = deck.roster().remove(0);
    deck.set_input(&cat, "cha".to_owned());
    assert_eq!(deck.card(&cat).map(|c| c.input.as_str()), Some("cha"));

    deck.replace(vec![entry("cat", WordColor::Gray)]);
    let fresh = deck.roster().remove(0);
    assert_eq!(deck.card(&fresh).map(|c| c.input.as_str()), Some(""));
}

#[test]
fn stale_refs_do_not_touch_new_render() {
    let mut deck = DeckState::default();
    deck.replace(vec![entry("cat", WordColor::Gray)]);
    let stale = deck.roster().remove(0);
    deck.replace(vec![entry("cat", WordColor::Gray)]);

    assert!(deck.card(&stale).is_none());
    assert!(deck.card_mut(&stale).is_none());
    deck.set_input(&stale, "chat".to_owned());
    assert!(deck.cards[0].input.is_empty());
}

#[test]
fn roster_carries_current_generation() {
    let mut deck = DeckState::default();
    deck.replace(vec![entry("cat", WordColor::Gray), entry("dog", WordColor::Amber)]);
    deck.replace(vec![entry("sun", WordColor::Gray)]);
    let roster = deck.roster();
    assert_eq!(roster, vec![CardRef { generation: 2, english: "sun".to_owned() }]);
}

#[test]
fn unknown_english_is_not_found() {
    let mut deck = DeckState::default();
    deck.replace(vec![entry("cat", WordColor::Gray)]);
    let missing = CardRef { generation: deck.generation, english: "dog".to_owned() };
    assert!(deck.card(&missing).is_none());
}

#[test]
fn load_flag_is_cleared_by_replace() {
    let mut deck = DeckState::default();
    assert!(!deck.loading);
    deck.begin_load();
    assert!(deck.loading);
    deck.replace(vec![entry("cat", WordColor::Gray)]);
    assert!(!deck.loading);
}

#[test]
fn failed_load_clears_flag_and_keeps_cards() {
    let mut deck = DeckState::default();
    deck.replace(vec![entry("cat", WordColor::Gray)]);
    deck.begin_load();
    deck.finish_load();
    assert!(!deck.loading);
    assert_eq!(deck.generation, 1);
    assert_eq!(deck.cards.len(), 1);
}
