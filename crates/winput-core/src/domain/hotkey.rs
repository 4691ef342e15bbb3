//! Named editing shortcuts and their fixed key bindings.
//!
//! Every [`HotKey`] maps to one base virtual key plus at most one modifier.
//! The mapping is static data ([`HOTKEY_TABLE`]) indexed by the enum
//! discriminant, so it never depends on the active keyboard layout:
//! letter virtual keys (`VK_A`..`VK_Z`) name the logical letter on every
//! layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::event::KeyCode;
use super::modifier::ModifierKind;

/// Returned when a hotkey name or numeric id is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hotkey: {0}")]
pub struct UnknownHotKey(pub String);

/// A named editing action.
///
/// The discriminants are stable numeric ids (`1..=15`) accepted by
/// `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HotKey {
    Copy = 1,
    Paste = 2,
    Cut = 3,
    SelectAll = 4,
    Save = 5,
    Redo = 6,
    Undo = 7,
    /// Move the caret one position left.
    CaretStart = 8,
    /// Move the caret one position right.
    CaretEnd = 9,
    Alt = 10,
    Backspace = 11,
    Space = 12,
    Tab = 13,
    Enter = 14,
    /// Toggles Caps Lock.
    CapsLock = 15,
}

/// The key combination a [`HotKey`] presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotKeyBinding {
    pub key: KeyCode,
    pub modifier: ModifierKind,
}

const fn ctrl(vk: u8) -> HotKeyBinding {
    HotKeyBinding {
        key: KeyCode::Virtual(vk),
        modifier: ModifierKind::Control,
    }
}

const fn bare(vk: u8) -> HotKeyBinding {
    HotKeyBinding {
        key: KeyCode::Virtual(vk),
        modifier: ModifierKind::None,
    }
}

/// Bindings in discriminant order (`HOTKEY_TABLE[id - 1]`).
pub const HOTKEY_TABLE: [HotKeyBinding; 15] = [
    ctrl(b'C'), // Copy
    ctrl(b'V'), // Paste
    ctrl(b'X'), // Cut
    ctrl(b'A'), // SelectAll
    ctrl(b'S'), // Save
    ctrl(b'Y'), // Redo
    ctrl(b'Z'), // Undo
    bare(0x25), // CaretStart: VK_LEFT
    bare(0x27), // CaretEnd: VK_RIGHT
    bare(0x12), // Alt: VK_MENU
    bare(0x08), // Backspace: VK_BACK
    bare(0x20), // Space: VK_SPACE
    bare(0x09), // Tab: VK_TAB
    bare(0x0D), // Enter: VK_RETURN
    bare(0x14), // CapsLock: VK_CAPITAL
];

impl HotKey {
    /// All hotkeys in id order.
    pub const ALL: [HotKey; 15] = [
        HotKey::Copy,
        HotKey::Paste,
        HotKey::Cut,
        HotKey::SelectAll,
        HotKey::Save,
        HotKey::Redo,
        HotKey::Undo,
        HotKey::CaretStart,
        HotKey::CaretEnd,
        HotKey::Alt,
        HotKey::Backspace,
        HotKey::Space,
        HotKey::Tab,
        HotKey::Enter,
        HotKey::CapsLock,
    ];

    /// Returns the fixed key combination for this hotkey.
    pub fn binding(self) -> HotKeyBinding {
        HOTKEY_TABLE[self.id() as usize - 1]
    }

    /// Stable numeric id.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Canonical kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            HotKey::Copy => "copy",
            HotKey::Paste => "paste",
            HotKey::Cut => "cut",
            HotKey::SelectAll => "select-all",
            HotKey::Save => "save",
            HotKey::Redo => "redo",
            HotKey::Undo => "undo",
            HotKey::CaretStart => "caret-start",
            HotKey::CaretEnd => "caret-end",
            HotKey::Alt => "alt",
            HotKey::Backspace => "backspace",
            HotKey::Space => "space",
            HotKey::Tab => "tab",
            HotKey::Enter => "enter",
            HotKey::CapsLock => "caps-lock",
        }
    }
}

impl TryFrom<u8> for HotKey {
    type Error = UnknownHotKey;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=15 => Ok(HotKey::ALL[value as usize - 1]),
            other => Err(UnknownHotKey(other.to_string())),
        }
    }
}

impl FromStr for HotKey {
    type Err = UnknownHotKey;

    /// Parses a hotkey name, ignoring case and `-`/`_`/space separators, so
    /// `select-all`, `select_all`, and `SelectAll` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        HotKey::ALL
            .into_iter()
            .find(|hk| hk.name().replace('-', "") == folded)
            .ok_or_else(|| UnknownHotKey(s.to_string()))
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
