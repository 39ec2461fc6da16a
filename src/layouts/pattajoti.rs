//! Pattajoti, the Thai-optimised layout. Thai digits need no SHIFT.

use super::{Finger as F, Hand as H, KeyInfo};

const fn k(ch: char, shift: bool, hand: H, finger: F, row: u8) -> KeyInfo {
    KeyInfo::new(ch, shift, hand, finger, row)
}

pub const KEYS: &[KeyInfo] = &[
    // Thai digits, physical left-to-right order ๒๓๔๕๗๘๙๐๑๖
    k('๒', false, H::Left, F::Pinky, 3),
    k('๓', false, H::Left, F::Ring, 3),
    k('๔', false, H::Left, F::Middle, 3),
    k('๕', false, H::Left, F::Index, 3),
    k('๗', false, H::Left, F::Index, 3),
    k('๘', false, H::Right, F::Index, 3),
    k('๙', false, H::Right, F::Index, 3),
    k('๐', false, H::Right, F::Middle, 3),
    k('๑', false, H::Right, F::Ring, 3),
    k('๖', false, H::Right, F::Pinky, 3),
    // International digits (same positions as Kedmanee)
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
    // Top row
    k('ข', false, H::Left, F::Pinky, 2),
    k('ฃ', false, H::Left, F::Ring, 2),
    k('ค', false, H::Left, F::Middle, 2),
    k('ฅ', false, H::Left, F::Index, 2),
    k('ฆ', false, H::Left, F::Index, 2),
    k('ง', false, H::Right, F::Index, 2),
    k('จ', false, H::Right, F::Index, 2),
    k('ฉ', false, H::Right, F::Middle, 2),
    k('ช', false, H::Right, F::Ring, 2),
    k('ซ', false, H::Right, F::Pinky, 2),
    // Home row
    k('ท', false, H::Left, F::Pinky, 1),
    k('ร', false, H::Left, F::Ring, 1),
    k('น', false, H::Left, F::Middle, 1),
    k('ย', false, H::Left, F::Index, 1),
    k('บ', false, H::Left, F::Index, 1),
    k('ล', false, H::Right, F::Index, 1),
    k('ว', false, H::Right, F::Index, 1),
    k('ส', false, H::Right, F::Middle, 1),
    k('ห', false, H::Right, F::Ring, 1),
    k('อ', false, H::Right, F::Pinky, 1),
    // Bottom row
    k('ผ', false, H::Left, F::Pinky, 0),
    k('ฝ', false, H::Left, F::Ring, 0),
    k('พ', false, H::Left, F::Middle, 0),
    k('ฟ', false, H::Left, F::Index, 0),
    k('ภ', false, H::Left, F::Index, 0),
    k('ม', false, H::Right, F::Index, 0),
    k('ด', false, H::Right, F::Index, 0),
    k('ต', false, H::Right, F::Middle, 0),
    k('ถ', false, H::Right, F::Ring, 0),
    k('ก', false, H::Right, F::Pinky, 0),
    // Vowels
    k('า', false, H::Right, F::Middle, 1),
    k('ิ', false, H::Left, F::Index, 0),
    k('ี', false, H::Right, F::Index, 2),
    k('ึ', false, H::Left, F::Middle, 0),
    k('ื', false, H::Right, F::Index, 0),
    k('ุ', false, H::Right, F::Ring, 0),
    k('ู', false, H::Right, F::Pinky, 0),
    k('เ', false, H::Left, F::Index, 1),
    k('แ', false, H::Left, F::Middle, 0),
    k('โ', false, H::Left, F::Ring, 2),
    k('ใ', false, H::Right, F::Ring, 0),
    k('ไ', false, H::Left, F::Pinky, 2),
    k('ำ', false, H::Left, F::Ring, 2),
    k('ะ', false, H::Left, F::Index, 2),
    k('ั', false, H::Left, F::Index, 2),
    // Tone marks
    k('่', false, H::Right, F::Index, 1),
    k('้', false, H::Right, F::Index, 1),
    k('๊', false, H::Right, F::Middle, 1),
    k('๋', false, H::Right, F::Ring, 1),
    k('์', false, H::Right, F::Pinky, 1),
    // Less common consonants
    k('ธ', false, H::Left, F::Middle, 1),
    k('ศ', false, H::Left, F::Ring, 1),
    k('ฎ', false, H::Left, F::Index, 1),
    k('ป', false, H::Left, F::Ring, 0),
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
