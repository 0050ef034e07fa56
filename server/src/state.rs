//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps nothing per user: it holds one pooled upstream HTTP client and
//! the parsed config. Session cookies travel through untouched.

use std::sync::Arc;

use crate::config::HostConfig;

/// Errors produced while building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Clone is required by Axum; the inner client is already reference counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<HostConfig>,
}

impl AppState {
    /// Build state with an upstream client that never follows redirects,
    /// so the browser sees backend redirects (and their cookies) verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: HostConfig) -> Result<Self, StateError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
