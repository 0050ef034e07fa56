//! Per-card view state: typed translation, check status and result message.
//!
//! DESIGN
//! ======
//! A card is an ephemeral projection of one `VocabularyEntry`. It lives only
//! as long as the deck render that created it; nothing here is persisted.
//! The check control's enabled state is derived from the input on every read,
//! so it can never drift from what the user has typed.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::net::types::{CheckAnswerResponse, VocabularyEntry, WordColor};
use crate::util::color::{CORRECT_BORDER, INCORRECT_BORDER};

/// Inline warning shown when Check is submitted with an empty translation.
pub const EMPTY_TRANSLATION_WARNING: &str = "⚠️ Please enter a French word";

/// Outcome of a check request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { correct_answer: Option<String> },
}

impl Verdict {
    /// Color the backend entry is forced to after this verdict.
    pub const fn forced_color(&self) -> WordColor {
        match self {
            Self::Correct => WordColor::Green,
            Self::Incorrect { .. } => WordColor::Red,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Correct => "✅ Correct!".to_owned(),
            Self::Incorrect { correct_answer: Some(answer) } => format!("❌ Incorrect (correct: {answer})"),
            Self::Incorrect { correct_answer: None } => "❌ Incorrect".to_owned(),
        }
    }

    pub const fn tone(&self) -> MessageTone {
        match self {
            Self::Correct => MessageTone::Success,
            Self::Incorrect { .. } => MessageTone::Failure,
        }
    }
}

impl From<CheckAnswerResponse> for Verdict {
    fn from(resp: CheckAnswerResponse) -> Self {
        if resp.correct {
            Self::Correct
        } else {
            Self::Incorrect { correct_answer: resp.correct_answer }
        }
    }
}

/// Visual tone of the result line under a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Failure,
    Warning,
}

impl MessageTone {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "word-card__result word-card__result--success",
            Self::Failure => "word-card__result word-card__result--failure",
            Self::Warning => "word-card__result word-card__result--warning",
        }
    }
}

/// Where a card is in its check cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Unanswered,
    /// A check request is in flight. `previous` is restored if it fails.
    Checking { previous: Option<Verdict> },
    Answered(Verdict),
}

impl CardPhase {
    pub const fn is_checking(&self) -> bool {
        matches!(self, Self::Checking { .. })
    }

    /// Verdict currently shown on the card, if any.
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Unanswered => None,
            Self::Checking { previous } => previous.as_ref(),
            Self::Answered(verdict) => Some(verdict),
        }
    }
}

/// Result line text plus tone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardMessage {
    pub text: String,
    pub tone: MessageTone,
}

/// View state for one rendered card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardState {
    pub english: String,
    pub color: WordColor,
    pub input: String,
    pub phase: CardPhase,
    pub message: Option<CardMessage>,
}

impl CardState {
    pub fn new(entry: VocabularyEntry) -> Self {
        Self {
            english: entry.english,
            color: entry.color,
            input: String::new(),
            phase: CardPhase::Unanswered,
            message: None,
        }
    }

    /// Check is enabled exactly when the trimmed input is non-empty.
    pub fn can_check(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub fn begin_check(&mut self) {
        if self.phase.is_checking() {
            return;
        }
        let previous = self.phase.verdict().cloned();
        self.phase = CardPhase::Checking { previous };
    }

    /// Leave the checking phase without a verdict, restoring the prior one.
    pub fn cancel_check(&mut self) {
        if let CardPhase::Checking { previous } = &mut self.phase {
            let previous = previous.take();
            self.phase = previous.map_or(CardPhase::Unanswered, CardPhase::Answered);
        }
    }

    pub fn apply_verdict(&mut self, verdict: &Verdict) {
        self.message = Some(CardMessage { text: verdict.message(), tone: verdict.tone() });
        self.phase = CardPhase::Answered(verdict.clone());
    }

    pub fn warn(&mut self, text: &str) {
        self.message = Some(CardMessage { text: text.to_owned(), tone: MessageTone::Warning });
    }

    /// Inline border color; empty until the card has been answered.
    pub fn border_color(&self) -> &'static str {
        match self.phase.verdict() {
            Some(Verdict::Correct) => CORRECT_BORDER,
            Some(Verdict::Incorrect { .. }) => INCORRECT_BORDER,
            None => "transparent",
        }
    }
}

/// Trimmed translation ready to submit, or `None` when nothing was typed.
pub fn submission(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
