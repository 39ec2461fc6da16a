//! Digit classification and Thai <-> international conversion.
//!
//! Classification is by exact code point range, never by a locale-aware
//! "is digit" predicate:
//! - Thai digits: U+0E50..=U+0E59 (๐-๙)
//! - International digits: U+0030..=U+0039 (0-9)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

pub const THAI_DIGIT_FIRST: char = '\u{0E50}';
pub const THAI_DIGIT_LAST: char = '\u{0E59}';

/// Thai digits in numeric order, index == value.
pub const THAI_DIGITS: [char; 10] = ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙'];

/// International digits in numeric order, index == value.
pub const INTL_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

#[inline]
pub fn is_thai_digit(c: char) -> bool {
    (THAI_DIGIT_FIRST..=THAI_DIGIT_LAST).contains(&c)
}

#[inline]
pub fn is_intl_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Either digit class. Used for per-digit cost tracking.
#[inline]
pub fn is_any_digit(c: char) -> bool {
    is_intl_digit(c) || is_thai_digit(c)
}

/// `U+0E51` style label.
pub fn unicode_label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Thai digit -> international digit. Anything else passes through.
#[inline]
pub fn thai_to_intl(c: char) -> char {
    if is_thai_digit(c) {
        INTL_DIGITS[(c as u32 - THAI_DIGIT_FIRST as u32) as usize]
    } else {
        c
    }
}

/// International digit -> Thai digit. Anything else passes through.
#[inline]
pub fn intl_to_thai(c: char) -> char {
    if is_intl_digit(c) {
        THAI_DIGITS[(c as u32 - '0' as u32) as usize]
    } else {
        c
    }
}

/// Which digit script a text should be rewritten into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DigitTarget {
    Thai,
    International,
    #[default]
    None,
}

impl DigitTarget {
    /// Parses an exact lowercase target name. Anything else, including
    /// case variants such as `Thai`, is treated as `None` (no conversion).
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown digit target '{}', leaving digits unchanged", name);
            DigitTarget::None
        })
    }
}

/// The conversion policy recorded on a costed scenario.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DigitConversion {
    #[default]
    None,
    ToInternational,
    ToThai,
}

impl DigitConversion {
    pub fn target(self) -> DigitTarget {
        match self {
            Self::None => DigitTarget::None,
            Self::ToInternational => DigitTarget::International,
            Self::ToThai => DigitTarget::Thai,
        }
    }
}

/// Rewrites every digit of the other script into `target`.
pub fn convert_digits(text: &str, target: DigitTarget) -> String {
    match target {
        DigitTarget::Thai => text.chars().map(intl_to_thai).collect(),
        DigitTarget::International => text.chars().map(thai_to_intl).collect(),
        DigitTarget::None => text.to_string(),
    }
}

/// Name-based entry point; unknown target names return the text unchanged.
pub fn convert_digits_named(text: &str, target: &str) -> String {
    convert_digits(text, DigitTarget::from_name(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_exact() {
        assert!(is_thai_digit('\u{0E50}'));
        assert!(is_thai_digit('\u{0E59}'));
        assert!(!is_thai_digit('\u{0E4F}'));
        assert!(!is_thai_digit('\u{0E5A}'));
        assert!(is_intl_digit('0') && is_intl_digit('9'));
        // Arabic-Indic and fullwidth digits are not digits here.
        assert!(!is_any_digit('\u{0660}'));
        assert!(!is_any_digit('\u{FF10}'));
    }

    #[test]
    fn digit_tables_line_up() {
        for (thai, intl) in THAI_DIGITS.iter().zip(INTL_DIGITS.iter()) {
            assert_eq!(thai_to_intl(*thai), *intl);
            assert_eq!(intl_to_thai(*intl), *thai);
        }
    }

    #[test]
    fn unknown_target_is_passthrough() {
        let text = "ปี ๒๕๖๐ and 2017";
        assert_eq!(convert_digits_named(text, "klingon"), text);
        assert_eq!(convert_digits_named(text, "none"), text);
        assert_eq!(convert_digits_named(text, "international"), "ปี 2560 and 2017");
        assert_eq!(convert_digits_named(text, "thai"), "ปี ๒๕๖๐ and ๒๐๑๗");
    }

    #[test]
    fn unicode_labels() {
        assert_eq!(unicode_label('๑'), "U+0E51");
        assert_eq!(unicode_label('7'), "U+0037");
    }
}
