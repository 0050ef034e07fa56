//! Client application state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Plain structs wrapped in `RwSignal` by `app::App`. Keeping them free of
//! reactive types lets the session actions and tests drive them directly.

pub mod card;
pub mod deck;
pub mod notice;
pub mod session;
