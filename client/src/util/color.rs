//! Mastery-color to indicator-class mapping.
//!
//! Pure lookups with no error conditions: any value outside the three graded
//! colors renders as the neutral gray indicator.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::net::types::WordColor;

pub const RED_INDICATOR: &str = "bg-red-500";
pub const AMBER_INDICATOR: &str = "bg-yellow-400";
pub const GREEN_INDICATOR: &str = "bg-green-500";
pub const GRAY_INDICATOR: &str = "bg-gray-300";

/// Border color applied to a card after a correct answer.
pub const CORRECT_BORDER: &str = "#22c55e";
/// Border color applied to a card after an incorrect answer.
pub const INCORRECT_BORDER: &str = "#ef4444";

/// Indicator class for a decoded color.
pub const fn indicator_class(color: WordColor) -> &'static str {
    match color {
        WordColor::Red => RED_INDICATOR,
        WordColor::Amber => AMBER_INDICATOR,
        WordColor::Green => GREEN_INDICATOR,
        WordColor::Gray => GRAY_INDICATOR,
    }
}

/// Indicator class for a raw wire string.
pub fn indicator_class_for_wire(raw: &str) -> &'static str {
    indicator_class(WordColor::from_wire(raw))
}

/// Full class list for the round status dot on a card.
pub fn status_dot_class(color: WordColor) -> String {
    format!("status-dot {}", indicator_class(color))
}
