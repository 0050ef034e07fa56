//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the trainer chrome and cards from signals passed in by
//! the page and report user intent through callbacks.

pub mod card_list;
pub mod color_counts;
pub mod error_banner;
pub mod filter_bar;
pub mod login_modal;
pub mod word_card;
