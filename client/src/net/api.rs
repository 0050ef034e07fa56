//! REST API helpers for communicating with the vocabulary backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against same-origin
//! paths; the host server forwards them to the backend.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed [`ApiError`] instead of panicking. Session
//! actions decide what a failure means for the UI; nothing here retries or
//! times out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CheckAnswerResponse, ColorCounts, ColorFilter, VocabularyEntry, WordColor};

/// Failure of a single backend round-trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Backend operations consumed by the session actions.
///
/// `HttpApi` is the browser implementation; tests supply in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait VocabApi {
    /// `POST /login` with form field `username`.
    async fn login(&self, username: &str) -> Result<(), ApiError>;

    /// `GET /api/get_random_words`, optionally filtered by color.
    async fn random_words(&self, filter: ColorFilter) -> Result<Vec<VocabularyEntry>, ApiError>;

    /// `POST /api/check_answer`.
    async fn check_answer(&self, english: &str, french: &str) -> Result<CheckAnswerResponse, ApiError>;

    /// `POST /api/update_color`.
    async fn update_color(&self, english: &str, color: WordColor) -> Result<(), ApiError>;

    /// `GET /api/play_audio`; returns the raw audio payload.
    async fn audio(&self, english: &str) -> Result<Vec<u8>, ApiError>;

    /// `GET /api/get_color_counts`.
    async fn color_counts(&self) -> Result<ColorCounts, ApiError>;
}

pub const LOGIN_ENDPOINT: &str = "/login";
pub const RANDOM_WORDS_ENDPOINT: &str = "/api/get_random_words";
pub const CHECK_ANSWER_ENDPOINT: &str = "/api/check_answer";
pub const UPDATE_COLOR_ENDPOINT: &str = "/api/update_color";
pub const PLAY_AUDIO_ENDPOINT: &str = "/api/play_audio";
pub const COLOR_COUNTS_ENDPOINT: &str = "/api/get_color_counts";

/// Query pairs for the word-list request. `All` sends no `color` parameter.
#[cfg(any(test, feature = "hydrate"))]
fn random_words_query(filter: ColorFilter) -> Vec<(&'static str, &'static str)> {
    filter.query_value().map(|color| ("color", color)).into_iter().collect()
}

#[cfg(any(test, feature = "hydrate"))]
fn status_result(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status })
    }
}

/// Same-origin HTTP implementation backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl VocabApi for HttpApi {
    async fn login(&self, username: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::UrlSearchParams::new().map_err(|e| js_error(&e))?;
            form.append("username", username);
            let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
                .body(form)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            status_result(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
            Err(ApiError::Unavailable)
        }
    }

    async fn random_words(&self, filter: ColorFilter) -> Result<Vec<VocabularyEntry>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(RANDOM_WORDS_ENDPOINT)
                .query(random_words_query(filter))
                .send()
                .await
                .map_err(network_error)?;
            status_result(resp.status())?;
            resp.json::<Vec<VocabularyEntry>>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filter;
            Err(ApiError::Unavailable)
        }
    }

    async fn check_answer(&self, english: &str, french: &str) -> Result<CheckAnswerResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::CheckAnswerRequest { english, french };
            let resp = gloo_net::http::Request::post(CHECK_ANSWER_ENDPOINT)
                .json(&payload)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            status_result(resp.status())?;
            resp.json::<CheckAnswerResponse>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (english, french);
            Err(ApiError::Unavailable)
        }
    }

    async fn update_color(&self, english: &str, color: WordColor) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::UpdateColorRequest { english, color };
            let resp = gloo_net::http::Request::post(UPDATE_COLOR_ENDPOINT)
                .json(&payload)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            status_result(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (english, color);
            Err(ApiError::Unavailable)
        }
    }

    async fn audio(&self, english: &str) -> Result<Vec<u8>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(PLAY_AUDIO_ENDPOINT)
                .query([("english", english)])
                .send()
                .await
                .map_err(network_error)?;
            status_result(resp.status())?;
            resp.binary().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = english;
            Err(ApiError::Unavailable)
        }
    }

    async fn color_counts(&self) -> Result<ColorCounts, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(COLOR_COUNTS_ENDPOINT)
                .send()
                .await
                .map_err(network_error)?;
            status_result(resp.status())?;
            resp.json::<ColorCounts>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
