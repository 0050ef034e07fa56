//! Session actions: the request/response chains behind every card control.
//!
//! ARCHITECTURE
//! ============
//! Each action receives the backend (`VocabApi`) and the view it reports to
//! (`TrainerSink`) explicitly. Nothing here reads global document state, so
//! the same chains run against signals in the browser and against recording
//! fakes in tests.
//!
//! ORDERING
//! ========
//! Chains are strictly sequential. A validate action issues the color update
//! only after the check response arrives, and the counts refresh only after
//! the color update completes. No action retries, times out or cancels.
//!
//! ERROR HANDLING
//! ==============
//! A failed step stops the chain and leaves the view as it was before that
//! step. The caller decides how to surface the returned `ActionError`.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::api::{ApiError, VocabApi};
use crate::net::types::{ColorCounts, ColorFilter, VocabularyEntry, WordColor};
use crate::state::card::{EMPTY_TRANSLATION_WARNING, Verdict, submission};
use crate::state::deck::CardRef;
use crate::state::session::validate_username;

/// The "on action" interface the actions write their results through.
pub trait TrainerSink {
    fn logged_in(&self, username: &str);
    fn replace_cards(&self, entries: Vec<VocabularyEntry>);
    fn card_checking(&self, card: &CardRef, checking: bool);
    fn card_verdict(&self, card: &CardRef, verdict: &Verdict);
    fn card_warning(&self, card: &CardRef, message: &str);
    fn card_color(&self, card: &CardRef, color: WordColor);
    fn counts(&self, counts: ColorCounts);
}

/// Plays a fetched pronunciation payload.
pub trait AudioPlayer {
    /// # Errors
    ///
    /// Returns a message when the payload cannot be played.
    fn play(&self, bytes: Vec<u8>) -> Result<(), String>;
}

/// Failure of a session action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("audio playback failed: {0}")]
    Playback(String),
}

/// Failure of the login gate. Display strings are the alert texts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Enter a username")]
    EmptyUsername,

    #[error("Login failed")]
    Rejected(ApiError),
}

/// A control event raised by a rendered card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    Input { card: CardRef, text: String },
    Check(CardRef),
    Color(CardRef, WordColor),
    Audio(CardRef),
}

/// Submit a username to the backend and open the session on success.
///
/// # Errors
///
/// [`LoginError::EmptyUsername`] without a request when the name is blank;
/// [`LoginError::Rejected`] when the backend refuses or is unreachable.
pub async fn login<A: VocabApi, S: TrainerSink>(api: &A, sink: &S, raw_username: &str) -> Result<String, LoginError> {
    let username = validate_username(raw_username).ok_or(LoginError::EmptyUsername)?;
    api.login(&username).await.map_err(LoginError::Rejected)?;
    sink.logged_in(&username);
    Ok(username)
}

/// Fetch a word list for `filter`, replace the card set, then refresh counts.
///
/// Returns the number of cards rendered.
///
/// # Errors
///
/// Returns the first failing request; a failed word fetch leaves the previous
/// cards on screen.
pub async fn load_words<A: VocabApi, S: TrainerSink>(
    api: &A,
    sink: &S,
    filter: ColorFilter,
) -> Result<usize, ActionError> {
    let entries = api.random_words(filter).await?;
    let rendered = entries.len();
    sink.replace_cards(entries);
    refresh_counts(api, sink).await?;
    Ok(rendered)
}

/// Check a typed translation and force the entry's color from the verdict.
///
/// Returns `None` when the input was blank and no request was made.
///
/// # Errors
///
/// Returns the first failing request. A failed check leaves the card's
/// message and color untouched.
pub async fn validate_translation<A: VocabApi, S: TrainerSink>(
    api: &A,
    sink: &S,
    card: &CardRef,
    input: &str,
) -> Result<Option<Verdict>, ActionError> {
    let Some(french) = submission(input) else {
        sink.card_warning(card, EMPTY_TRANSLATION_WARNING);
        return Ok(None);
    };

    sink.card_checking(card, true);
    let response = match api.check_answer(&card.english, &french).await {
        Ok(response) => response,
        Err(e) => {
            sink.card_checking(card, false);
            return Err(e.into());
        }
    };

    let verdict = Verdict::from(response);
    sink.card_verdict(card, &verdict);
    assign_color(api, sink, card, verdict.forced_color()).await?;
    Ok(Some(verdict))
}

/// Persist a color, then show it on the card, then refresh counts.
///
/// # Errors
///
/// Returns the first failing request. The card keeps its previous color when
/// the update itself fails.
pub async fn assign_color<A: VocabApi, S: TrainerSink>(
    api: &A,
    sink: &S,
    card: &CardRef,
    color: WordColor,
) -> Result<(), ActionError> {
    api.update_color(&card.english, color).await?;
    sink.card_color(card, color);
    refresh_counts(api, sink).await?;
    Ok(())
}

/// Fetch pronunciation audio and play it immediately.
///
/// # Errors
///
/// Returns the fetch or playback failure; nothing plays in either case.
pub async fn play_audio<A: VocabApi, P: AudioPlayer>(api: &A, player: &P, english: &str) -> Result<(), ActionError> {
    let bytes = api.audio(english).await?;
    player.play(bytes).map_err(ActionError::Playback)
}

/// Fetch the backend tally and overwrite all four displayed counts.
///
/// # Errors
///
/// Returns the request failure; displayed counts are left unchanged.
pub async fn refresh_counts<A: VocabApi, S: TrainerSink>(api: &A, sink: &S) -> Result<ColorCounts, ActionError> {
    let counts = api.color_counts().await?;
    sink.counts(counts);
    Ok(counts)
}
