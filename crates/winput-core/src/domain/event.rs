//! Primitive keyboard events and the key codes they carry.
//!
//! A [`PrimitiveEvent`] is one hardware-level key transition, shaped after
//! the Win32 `KEYBDINPUT` structure: a virtual key code, a scan code, and a
//! flag word.  Exactly one of the two codes is meaningful:
//!
//! | Encoding      | `key_code`        | `scan_code`       | `flags`                 |
//! |---------------|-------------------|-------------------|-------------------------|
//! | Virtual key   | VK (e.g. `0x41`)  | `0`               | `KEY_DOWN` or `KEY_UP`  |
//! | Unicode       | `0`               | UTF-16 code unit  | `UNICODE` (`| KEY_UP`)  |
//!
//! Virtual keys are interpreted by the OS through the active layout.
//! Unicode events bypass the layout entirely, which is how characters with
//! no physical key (e.g. CJK text on a US keyboard) get typed.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Key codes at or above this value cannot be sent as virtual keys.
///
/// Virtual key codes are single bytes and `0xFF` is reserved, so anything
/// `>= 255` takes the Unicode path.
pub const MAX_ASCII: u16 = 255;

/// Input device class of a [`PrimitiveEvent`].  Only keyboards are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Keyboard,
}

/// Key transition flags, using the Win32 `KEYEVENTF_*` bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EventFlags(pub u32);

impl EventFlags {
    /// Key press.  Zero on Win32, so it is the absence of `KEY_UP`.
    pub const KEY_DOWN: EventFlags = EventFlags(0x0000);
    /// Key release.
    pub const KEY_UP: EventFlags = EventFlags(0x0002);
    /// `scan_code` carries a UTF-16 code unit instead of a hardware scan code.
    pub const UNICODE: EventFlags = EventFlags(0x0004);

    /// Returns the raw flag word.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if the release bit is set.
    pub fn is_key_up(self) -> bool {
        self.0 & Self::KEY_UP.0 != 0
    }

    /// Returns `true` if the event carries a Unicode code unit.
    pub fn is_unicode(self) -> bool {
        self.0 & Self::UNICODE.0 != 0
    }
}

impl BitOr for EventFlags {
    type Output = EventFlags;

    fn bitor(self, rhs: EventFlags) -> EventFlags {
        EventFlags(self.0 | rhs.0)
    }
}

/// Which half of a key press to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyPhase {
    Down,
    Up,
}

impl KeyPhase {
    fn flags(self) -> EventFlags {
        match self {
            KeyPhase::Down => EventFlags::KEY_DOWN,
            KeyPhase::Up => EventFlags::KEY_UP,
        }
    }
}

/// A key as the sequencer sees it: either a layout virtual key or a raw
/// UTF-16 code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A virtual key code below [`MAX_ASCII`].
    Virtual(u8),
    /// A UTF-16 code unit injected without layout translation.
    Unicode(u16),
}

impl KeyCode {
    /// Classifies a raw key value by the ASCII threshold.
    ///
    /// Values below [`MAX_ASCII`] are virtual keys; everything else is
    /// treated as a Unicode code unit.
    pub fn from_raw(raw: u16) -> Self {
        if raw < MAX_ASCII {
            KeyCode::Virtual(raw as u8)
        } else {
            KeyCode::Unicode(raw)
        }
    }

    /// Returns the numeric value carried by this key, regardless of encoding.
    pub fn raw(self) -> u16 {
        match self {
            KeyCode::Virtual(vk) => vk as u16,
            KeyCode::Unicode(unit) => unit,
        }
    }

    /// Returns `true` for keys that take the Unicode path.
    pub fn is_unicode(self) -> bool {
        matches!(self, KeyCode::Unicode(_))
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Virtual(vk) => write!(f, "VK 0x{vk:02X}"),
            KeyCode::Unicode(unit) => write!(f, "U+{unit:04X}"),
        }
    }
}

/// One key transition, ready for injection.
///
/// Immutable once built.  Use [`PrimitiveEvent::for_key`] (or the
/// sequencer) rather than filling the fields by hand so the
/// "one meaningful code" rule always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveEvent {
    kind: EventKind,
    key_code: u16,
    scan_code: u16,
    flags: EventFlags,
}

impl PrimitiveEvent {
    /// Builds the event for one phase of `key`.
    ///
    /// Unicode keys always carry [`EventFlags::UNICODE`]; the release bit is
    /// added for [`KeyPhase::Up`].
    pub fn for_key(key: KeyCode, phase: KeyPhase) -> Self {
        match key {
            KeyCode::Virtual(vk) => Self {
                kind: EventKind::Keyboard,
                key_code: vk as u16,
                scan_code: 0,
                flags: phase.flags(),
            },
            KeyCode::Unicode(unit) => Self {
                kind: EventKind::Keyboard,
                key_code: 0,
                scan_code: unit,
                flags: EventFlags::UNICODE | phase.flags(),
            },
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Virtual key code; zero for Unicode events.
    pub fn key_code(&self) -> u16 {
        self.key_code
    }

    /// UTF-16 code unit for Unicode events; zero otherwise.
    pub fn scan_code(&self) -> u16 {
        self.scan_code
    }

    pub fn flags(&self) -> EventFlags {
        self.flags
    }

    /// The logical key this event presses or releases.
    pub fn key(&self) -> KeyCode {
        if self.flags.is_unicode() {
            KeyCode::Unicode(self.scan_code)
        } else {
            KeyCode::Virtual(self.key_code as u8)
        }
    }

    pub fn phase(&self) -> KeyPhase {
        if self.flags.is_key_up() {
            KeyPhase::Up
        } else {
            KeyPhase::Down
        }
    }
}

impl fmt::Display for PrimitiveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase() {
            KeyPhase::Down => "down",
            KeyPhase::Up => "up",
        };
        write!(f, "{} {phase}", self.key())
    }
}
