pub mod kedmanee;
pub mod pattajoti;

use crate::digits::{INTL_DIGITS, THAI_DIGITS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Cost multiplier applied to characters that need SHIFT.
pub const SHIFT_PENALTY: f64 = 2.0;

#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Kedmanee,
    Pattajoti,
}

#[derive(Debug, Clone, Copy, Display, EnumString, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
    Both,
    Unknown,
}

#[derive(Debug, Clone, Copy, Display, EnumString, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
    Unknown,
}

/// Physical keyboard rows, numbered from the space bar up.
#[derive(Debug, Clone, Copy, Display, EnumIter, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KeyRow {
    Bottom = 0,
    Home = 1,
    Top = 2,
    Number = 3,
}

impl KeyRow {
    pub fn from_index(row: u8) -> Option<Self> {
        KeyRow::iter().find(|r| *r as u8 == row)
    }
}

/// Typing characteristics of one character on one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    pub ch: char,
    pub requires_shift: bool,
    pub hand: Hand,
    pub finger: Finger,
    /// 0 = bottom, 1 = home, 2 = top, 3 = number row.
    pub row: u8,
}

impl KeyInfo {
    pub const fn new(ch: char, requires_shift: bool, hand: Hand, finger: Finger, row: u8) -> Self {
        Self {
            ch,
            requires_shift,
            hand,
            finger,
            row,
        }
    }

    pub fn key_row(&self) -> Option<KeyRow> {
        KeyRow::from_index(self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub layout_type: LayoutKind,
    pub total_mapped_keys: usize,
    pub shifted_keys: usize,
    pub non_shifted_keys: usize,
}

/// A read-only char -> KeyInfo table. Obtain instances with [`KeyboardLayout::get`].
#[derive(Debug)]
pub struct KeyboardLayout {
    pub kind: LayoutKind,
    keys: HashMap<char, KeyInfo>,
}

static KEDMANEE: LazyLock<KeyboardLayout> =
    LazyLock::new(|| KeyboardLayout::from_table(LayoutKind::Kedmanee, kedmanee::KEYS));
static PATTAJOTI: LazyLock<KeyboardLayout> =
    LazyLock::new(|| KeyboardLayout::from_table(LayoutKind::Pattajoti, pattajoti::KEYS));

impl KeyboardLayout {
    /// The process-wide instance for `kind`, built on first use.
    pub fn get(kind: LayoutKind) -> &'static KeyboardLayout {
        match kind {
            LayoutKind::Kedmanee => &KEDMANEE,
            LayoutKind::Pattajoti => &PATTAJOTI,
        }
    }

    pub fn kedmanee() -> &'static KeyboardLayout {
        Self::get(LayoutKind::Kedmanee)
    }

    pub fn pattajoti() -> &'static KeyboardLayout {
        Self::get(LayoutKind::Pattajoti)
    }

    fn from_table(kind: LayoutKind, table: &[KeyInfo]) -> Self {
        let mut keys = HashMap::with_capacity(table.len());
        for info in table {
            // Later entries win on duplicate characters.
            keys.insert(info.ch, *info);
        }
        debug!("Built {} layout with {} mapped keys", kind, keys.len());
        Self { kind, keys }
    }

    pub fn key_info(&self, ch: char) -> Option<&KeyInfo> {
        self.keys.get(&ch)
    }

    /// String lookup. Only a single-char string can be mapped; empty and
    /// multi-char strings are simply absent.
    pub fn key_info_str(&self, s: &str) -> Option<&KeyInfo> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.key_info(c),
            _ => None,
        }
    }

    /// Seconds to type `ch`. Unmapped characters cost one plain keystroke.
    /// Negative base times are multiplied through unchanged.
    #[inline]
    pub fn typing_cost(&self, ch: char, base_keystroke_time: f64) -> f64 {
        match self.key_info(ch) {
            Some(info) => cost_for(info, base_keystroke_time),
            None => base_keystroke_time,
        }
    }

    pub fn typing_cost_str(&self, s: &str, base_keystroke_time: f64) -> f64 {
        match self.key_info_str(s) {
            Some(info) => cost_for(info, base_keystroke_time),
            None => base_keystroke_time,
        }
    }

    pub fn layout_info(&self) -> LayoutInfo {
        let total = self.keys.len();
        let shifted = self.keys.values().filter(|k| k.requires_shift).count();
        LayoutInfo {
            layout_type: self.kind,
            total_mapped_keys: total,
            shifted_keys: shifted,
            non_shifted_keys: total - shifted,
        }
    }

    /// Mapped keys sorted by character, for stable listings.
    pub fn keys_sorted(&self) -> Vec<&KeyInfo> {
        let mut keys: Vec<&KeyInfo> = self.keys.values().collect();
        keys.sort_by_key(|k| k.ch);
        keys
    }
}

#[inline]
fn cost_for(info: &KeyInfo, base: f64) -> f64 {
    if info.requires_shift {
        base * SHIFT_PENALTY
    } else {
        base
    }
}

/// One row of the Kedmanee vs Pattajoti digit comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitComparison {
    pub digit: char,
    pub kedmanee_cost: f64,
    pub pattajoti_cost: f64,
    /// Kedmanee minus Pattajoti.
    pub difference: f64,
}

/// Costs of all twenty digits (Thai first, then international) on both layouts.
pub fn compare_digit_costs(base_keystroke_time: f64) -> Vec<DigitComparison> {
    let kedmanee = KeyboardLayout::kedmanee();
    let pattajoti = KeyboardLayout::pattajoti();

    THAI_DIGITS
        .iter()
        .chain(INTL_DIGITS.iter())
        .map(|&digit| {
            let kedmanee_cost = kedmanee.typing_cost(digit, base_keystroke_time);
            let pattajoti_cost = pattajoti.typing_cost(digit, base_keystroke_time);
            DigitComparison {
                digit,
                kedmanee_cost,
                pattajoti_cost,
                difference: kedmanee_cost - pattajoti_cost,
            }
        })
        .collect()
}

pub fn get_all_layouts() -> Vec<&'static KeyboardLayout> {
    LayoutKind::iter().map(KeyboardLayout::get).collect()
}
