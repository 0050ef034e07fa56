//! Networking modules for the vocabulary backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and defines the `VocabApi` seam used by session
//! actions, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
