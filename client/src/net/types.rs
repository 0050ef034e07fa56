//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the vocabulary backend's JSON payloads. Decoding is
//! lenient where the backend is loose: an unknown, empty or `null` color is
//! read as `gray` rather than failing the whole word list. Colors decode
//! through [`WordColor::from_wire`] only, with exact lowercase matching.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Four-valued mastery status attached to each vocabulary entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordColor {
    /// Wrong or unknown.
    Red,
    /// Partially known.
    Amber,
    /// Mastered.
    Green,
    /// Not yet graded.
    #[default]
    Gray,
}

impl WordColor {
    /// Every status, in the order the count panel displays them.
    pub const ALL: [Self; 4] = [Self::Green, Self::Amber, Self::Red, Self::Gray];

    /// Statuses a user can assign by hand from a card.
    pub const MANUAL: [Self; 3] = [Self::Red, Self::Amber, Self::Green];

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Amber => "amber",
            Self::Green => "green",
            Self::Gray => "gray",
        }
    }

    /// Human-readable label for buttons and tooltips.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Amber => "Amber",
            Self::Green => "Green",
            Self::Gray => "Unset",
        }
    }

    /// Parse a raw wire value. Anything other than exactly `red`, `amber` or
    /// `green` is gray.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "red" => Self::Red,
            "amber" => Self::Amber,
            "green" => Self::Green,
            _ => Self::Gray,
        }
    }
}

impl<'de> Deserialize<'de> for WordColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Gray, Self::from_wire))
    }
}

/// Word-list filter selected in the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorFilter {
    #[default]
    All,
    Only(WordColor),
}

impl ColorFilter {
    /// Filter options in select order.
    pub const OPTIONS: [Self; 5] = [
        Self::All,
        Self::Only(WordColor::Red),
        Self::Only(WordColor::Amber),
        Self::Only(WordColor::Green),
        Self::Only(WordColor::Gray),
    ];

    /// Parse a `<select>` value; unknown values fall back to `All`.
    pub fn from_select_value(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "red" => Self::Only(WordColor::Red),
            "amber" => Self::Only(WordColor::Amber),
            "green" => Self::Only(WordColor::Green),
            "gray" => Self::Only(WordColor::Gray),
            _ => Self::All,
        }
    }

    /// Value used for the `<option>` element.
    pub const fn select_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(color) => color.as_str(),
        }
    }

    /// Value of the `color` query parameter; `All` sends none.
    pub const fn query_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(color) => Some(color.as_str()),
        }
    }
}

/// One vocabulary entry as returned by `/api/get_random_words`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Identity key within a displayed set.
    pub english: String,
    #[serde(default)]
    pub color: WordColor,
    /// Stored answer, when the backend includes it. Never shown before a check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub french: Option<String>,
}

/// Backend tally of entries per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorCounts {
    pub green: u32,
    pub amber: u32,
    pub red: u32,
    pub gray: u32,
}

impl ColorCounts {
    pub const fn get(&self, color: WordColor) -> u32 {
        match color {
            WordColor::Green => self.green,
            WordColor::Amber => self.amber,
            WordColor::Red => self.red,
            WordColor::Gray => self.gray,
        }
    }
}

/// Body of `POST /api/check_answer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckAnswerRequest<'a> {
    pub english: &'a str,
    pub french: &'a str,
}

/// Response of `POST /api/check_answer`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckAnswerResponse {
    pub correct: bool,
    #[serde(default)]
    pub correct_answer: Option<String>,
}

/// Body of `POST /api/update_color`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateColorRequest<'a> {
    pub english: &'a str,
    pub color: WordColor,
}
