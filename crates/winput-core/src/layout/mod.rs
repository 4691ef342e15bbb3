//! Keyboard layout resolution.
//!
//! The OS knows which key (and which shift state) produces a character on
//! the active layout; on Windows that question is answered by
//! `VkKeyScanExW`.  This module wraps that raw lookup behind the
//! [`KeyboardLayout`] capability so the sequencer can be driven by a real
//! layout in production and a deterministic one in tests.
//!
//! [`resolve`] normalizes the raw answer:
//!
//! - the shift-state mask becomes a [`ModifierKind`] (unsupported masks
//!   degrade to no modifier), and
//! - a failed lookup, or a key code at or above [`MAX_ASCII`], becomes a
//!   [`LayoutMiss`].  The caller types a miss through the Unicode path.

mod us_qwerty;

pub use us_qwerty::UsQwertyLayout;

use thiserror::Error;
use tracing::debug;

use crate::domain::event::{KeyCode, MAX_ASCII};
use crate::domain::modifier::ModifierKind;

/// Raw result of a layout lookup: shift-state mask and key byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyScan {
    pub shift_state: u8,
    pub virtual_key: u8,
}

impl KeyScan {
    pub const fn new(shift_state: u8, virtual_key: u8) -> Self {
        Self {
            shift_state,
            virtual_key,
        }
    }

    /// Splits a packed `VkKeyScanExW` result (high byte shift state, low
    /// byte key).  `-1` means the layout has no key for the character.
    pub fn from_raw(raw: i16) -> Option<Self> {
        if raw == -1 {
            return None;
        }
        let bits = raw as u16;
        Some(Self::new((bits >> 8) as u8, (bits & 0xFF) as u8))
    }
}

/// Query capability over one keyboard layout.
///
/// Implementations must be pure lookups.  They are shared across threads by
/// the session, hence the `Send + Sync` bound.
#[cfg_attr(test, mockall::automock)]
pub trait KeyboardLayout: Send + Sync {
    /// Returns the raw shift state and key for `ch`, or `None` if no key on
    /// this layout produces it.
    fn key_scan(&self, ch: char) -> Option<KeyScan>;
}

/// A character that the layout can type natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedKey {
    pub modifier: ModifierKind,
    pub key: KeyCode,
}

/// The layout has no native key for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("no key on the active layout produces {ch:?}")]
pub struct LayoutMiss {
    pub ch: char,
}

impl LayoutMiss {
    /// The Unicode keys that type the missed character: one per UTF-16
    /// code unit, so supplementary-plane characters yield a surrogate pair.
    pub fn unicode_keys(&self) -> Vec<KeyCode> {
        let mut units = [0u16; 2];
        self.ch
            .encode_utf16(&mut units)
            .iter()
            .map(|&unit| KeyCode::Unicode(unit))
            .collect()
    }
}

/// Resolves `ch` against `layout`.
///
/// # Errors
///
/// Returns [`LayoutMiss`] when the layout has no key for `ch` or reports a
/// key code the virtual-key encoding cannot carry.
pub fn resolve<L: KeyboardLayout + ?Sized>(layout: &L, ch: char) -> Result<ResolvedKey, LayoutMiss> {
    let scan = layout.key_scan(ch).ok_or(LayoutMiss { ch })?;

    if scan.virtual_key as u16 >= MAX_ASCII {
        return Err(LayoutMiss { ch });
    }

    if ModifierKind::is_unsupported_mask(scan.shift_state) {
        debug!(
            "shift state {:#04x} for {ch:?} is not supported; typing without modifier",
            scan.shift_state
        );
    }

    Ok(ResolvedKey {
        modifier: ModifierKind::from_mask(scan.shift_state),
        key: KeyCode::Virtual(scan.virtual_key),
    })
}

/// A layout with no keys at all.
///
/// Used when the OS reports no active layout: every character misses and is
/// typed as its own code point with no modifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnmappedLayout;

impl KeyboardLayout for UnmappedLayout {
    fn key_scan(&self, _ch: char) -> Option<KeyScan> {
        None
    }
}
