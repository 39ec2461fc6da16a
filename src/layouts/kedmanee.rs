//! Kedmanee (TIS 820-2535), the standard Thai layout.
//!
//! Thai digits live on the shifted number row, so every Thai digit costs
//! two keystrokes here.

use super::{Finger as F, Hand as H, KeyInfo};

const fn k(ch: char, shift: bool, hand: H, finger: F, row: u8) -> KeyInfo {
    KeyInfo::new(ch, shift, hand, finger, row)
}

pub const KEYS: &[KeyInfo] = &[
    // Thai digits (shifted number row)
    k('๐', true, H::Right, F::Pinky, 3),
    k('๑', true, H::Left, F::Pinky, 3),
    k('๒', true, H::Left, F::Ring, 3),
    k('๓', true, H::Left, F::Middle, 3),
    k('๔', true, H::Left, F::Index, 3),
    k('๕', true, H::Left, F::Index, 3),
    k('๖', true, H::Right, F::Index, 3),
    k('๗', true, H::Right, F::Index, 3),
    k('๘', true, H::Right, F::Middle, 3),
    k('๙', true, H::Right, F::Ring, 3),
    // International digits
    k('0', false, H::Right, F::Pinky, 3),
    k('1', false, H::Left, F::Pinky, 3),
    k('2', false, H::Left, F::Ring, 3),
    k('3', false, H::Left, F::Middle, 3),
    k('4', false, H::Left, F::Index, 3),
    k('5', false, H::Left, F::Index, 3),
    k('6', false, H::Right, F::Index, 3),
    k('7', false, H::Right, F::Index, 3),
    k('8', false, H::Right, F::Middle, 3),
    k('9', false, H::Right, F::Ring, 3),
    // Top row (QWERTYUIOP)
    k('ไ', false, H::Left, F::Pinky, 2),
    k('ำ', false, H::Left, F::Ring, 2),
    k('พ', false, H::Left, F::Middle, 2),
    k('ะ', false, H::Left, F::Index, 2),
    k('ั', false, H::Left, F::Index, 2),
    k('ี', false, H::Right, F::Index, 2),
    k('ร', false, H::Right, F::Index, 2),
    k('น', false, H::Right, F::Middle, 2),
    k('ย', false, H::Right, F::Ring, 2),
    k('บ', false, H::Right, F::Pinky, 2),
    // Home row (ASDFGHJKL;)
    k('ฟ', false, H::Left, F::Pinky, 1),
    k('ห', false, H::Left, F::Ring, 1),
    k('ก', false, H::Left, F::Middle, 1),
    k('ด', false, H::Left, F::Index, 1),
    k('เ', false, H::Left, F::Index, 1),
    k('้', false, H::Right, F::Index, 1),
    k('่', false, H::Right, F::Index, 1),
    k('า', false, H::Right, F::Middle, 1),
    k('ส', false, H::Right, F::Ring, 1),
    k('ว', false, H::Right, F::Pinky, 1),
    // Bottom row (ZXCVBNM,./)
    k('ผ', false, H::Left, F::Pinky, 0),
    k('ป', false, H::Left, F::Ring, 0),
    k('แ', false, H::Left, F::Middle, 0),
    k('อ', false, H::Left, F::Index, 0),
    k('ิ', false, H::Left, F::Index, 0),
    k('ื', false, H::Right, F::Index, 0),
    k('ท', false, H::Right, F::Index, 0),
    k('ม', false, H::Right, F::Middle, 0),
    k('ใ', false, H::Right, F::Ring, 0),
    k('ฝ', false, H::Right, F::Pinky, 0),
    // Shifted consonants
    k('ช', true, H::Left, F::Middle, 1),
    k('ซ', true, H::Right, F::Ring, 1),
    k('ญ', true, H::Right, F::Middle, 2),
    k('ณ', true, H::Right, F::Index, 2),
    k('ค', true, H::Left, F::Index, 1),
    k('ต', true, H::Left, F::Index, 0),
    k('จ', true, H::Left, F::Index, 1),
    k('ข', true, H::Left, F::Ring, 1),
    k('ล', true, H::Right, F::Ring, 1),
    k('ง', true, H::Left, F::Ring, 0),
    // Shifted vowels and letters
    k('ุ', true, H::Right, F::Index, 0),
    k('ู', true, H::Right, F::Middle, 0),
    k('ึ', true, H::Left, F::Middle, 0),
    k('ฎ', true, H::Left, F::Middle, 2),
    k('ธ', true, H::Right, F::Index, 1),
    k('ศ', true, H::Right, F::Ring, 0),
    k('โ', true, H::Right, F::Pinky, 2),
    // Punctuation
    k(' ', false, H::Both, F::Thumb, 0),
    k('.', false, H::Right, F::Ring, 0),
    k(',', false, H::Right, F::Middle, 0),
    k('?', true, H::Right, F::Pinky, 0),
    k('!', true, H::Left, F::Pinky, 3),
    k('"', true, H::Left, F::Ring, 3),
    k('(', true, H::Right, F::Ring, 3),
    k(')', true, H::Right, F::Pinky, 3),
];
