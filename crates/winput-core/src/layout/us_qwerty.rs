//! Static US-English (QWERTY) layout.
//!
//! Answers the same question `VkKeyScanExW` answers for the `00000409`
//! layout, for printable ASCII plus tab and line breaks.  Used to plan
//! batches off Windows and as a deterministic layout in tests.

use super::{KeyScan, KeyboardLayout};
use crate::domain::modifier::MASK_SHIFT;

const VK_BACK: u8 = 0x08;
const VK_TAB: u8 = 0x09;
const VK_RETURN: u8 = 0x0D;
const VK_SPACE: u8 = 0x20;

// OEM punctuation keys on the US layout.
const VK_OEM_1: u8 = 0xBA; // ;:
const VK_OEM_PLUS: u8 = 0xBB; // =+
const VK_OEM_COMMA: u8 = 0xBC; // ,<
const VK_OEM_MINUS: u8 = 0xBD; // -_
const VK_OEM_PERIOD: u8 = 0xBE; // .>
const VK_OEM_2: u8 = 0xBF; // /?
const VK_OEM_3: u8 = 0xC0; // `~
const VK_OEM_4: u8 = 0xDB; // [{
const VK_OEM_5: u8 = 0xDC; // \|
const VK_OEM_6: u8 = 0xDD; // ]}
const VK_OEM_7: u8 = 0xDE; // '"

/// Shifted characters on the digit row, indexed by digit.
const SHIFTED_DIGITS: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

/// The US-English keyboard layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsQwertyLayout;

impl UsQwertyLayout {
    pub fn new() -> Self {
        Self
    }
}

impl KeyboardLayout for UsQwertyLayout {
    fn key_scan(&self, ch: char) -> Option<KeyScan> {
        let plain = |vk| Some(KeyScan::new(0, vk));
        let shifted = |vk| Some(KeyScan::new(MASK_SHIFT, vk));

        match ch {
            'a'..='z' => plain(ch.to_ascii_uppercase() as u8),
            'A'..='Z' => shifted(ch as u8),
            '0'..='9' => plain(ch as u8),
            ' ' => plain(VK_SPACE),
            '\t' => plain(VK_TAB),
            '\n' | '\r' => plain(VK_RETURN),
            '\u{8}' => plain(VK_BACK),
            ';' => plain(VK_OEM_1),
            ':' => shifted(VK_OEM_1),
            '=' => plain(VK_OEM_PLUS),
            '+' => shifted(VK_OEM_PLUS),
            ',' => plain(VK_OEM_COMMA),
            '<' => shifted(VK_OEM_COMMA),
            '-' => plain(VK_OEM_MINUS),
            '_' => shifted(VK_OEM_MINUS),
            '.' => plain(VK_OEM_PERIOD),
            '>' => shifted(VK_OEM_PERIOD),
            '/' => plain(VK_OEM_2),
            '?' => shifted(VK_OEM_2),
            '`' => plain(VK_OEM_3),
            '~' => shifted(VK_OEM_3),
            '[' => plain(VK_OEM_4),
            '{' => shifted(VK_OEM_4),
            '\\' => plain(VK_OEM_5),
            '|' => shifted(VK_OEM_5),
            ']' => plain(VK_OEM_6),
            '}' => shifted(VK_OEM_6),
            '\'' => plain(VK_OEM_7),
            '"' => shifted(VK_OEM_7),
            _ => SHIFTED_DIGITS
                .iter()
                .position(|&c| c == ch)
                .and_then(|digit| shifted(b'0' + digit as u8)),
        }
    }
}
