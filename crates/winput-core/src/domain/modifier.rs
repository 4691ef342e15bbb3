//! Modifier keys and normalization of raw layout shift-state masks.
//!
//! A layout lookup reports the shift state a character needs as a small
//! bitmask (the high byte of `VkKeyScanExW`'s result).  Only three masks
//! are modelled; every other value, including the Hankaku marker and the
//! two reserved bits, degrades to [`ModifierKind::None`].  Layouts that need
//! a combined modifier (AltGr is Ctrl+Alt) are therefore typed without one.

use serde::{Deserialize, Serialize};

use super::event::KeyCode;

/// Shift-state mask for Shift.
pub const MASK_SHIFT: u8 = 1;
/// Shift-state mask for Control.
pub const MASK_CONTROL: u8 = 2;
/// Shift-state mask for Alt.
pub const MASK_ALT: u8 = 4;
/// East-Asian Hankaku marker.  Unsupported.
pub const MASK_HANKAKU: u8 = 6;
/// Reserved by the layout driver.  Unsupported.
pub const MASK_RESERVED_1: u8 = 16;
/// Reserved by the layout driver.  Unsupported.
pub const MASK_RESERVED_2: u8 = 32;

/// Virtual key code of the Shift key (`VK_SHIFT`).
pub const VK_SHIFT: u8 = 0x10;
/// Virtual key code of the Control key (`VK_CONTROL`).
pub const VK_CONTROL: u8 = 0x11;
/// Virtual key code of the Alt key (`VK_MENU`).
pub const VK_ALT: u8 = 0x12;

/// The modifier held around a base key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModifierKind {
    #[default]
    None,
    Shift,
    Control,
    Alt,
}

impl ModifierKind {
    /// Normalizes a raw layout shift-state mask by exact match.
    ///
    /// Never fails: unknown masks yield [`ModifierKind::None`].
    pub fn from_mask(mask: u8) -> Self {
        match mask {
            MASK_SHIFT => ModifierKind::Shift,
            MASK_CONTROL => ModifierKind::Control,
            MASK_ALT => ModifierKind::Alt,
            MASK_HANKAKU | MASK_RESERVED_1 | MASK_RESERVED_2 => ModifierKind::None,
            _ => ModifierKind::None,
        }
    }

    /// Returns `true` when `mask` is something other than "no modifier" but
    /// does not normalize to a modelled modifier.
    pub fn is_unsupported_mask(mask: u8) -> bool {
        mask != 0 && Self::from_mask(mask) == ModifierKind::None
    }

    /// The virtual key pressed for this modifier, or `None` for no modifier.
    pub fn key(self) -> Option<KeyCode> {
        match self {
            ModifierKind::None => None,
            ModifierKind::Shift => Some(KeyCode::Virtual(VK_SHIFT)),
            ModifierKind::Control => Some(KeyCode::Virtual(VK_CONTROL)),
            ModifierKind::Alt => Some(KeyCode::Virtual(VK_ALT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mask_recognizes_three_modifiers() {
        assert_eq!(ModifierKind::from_mask(1), ModifierKind::Shift);
        assert_eq!(ModifierKind::from_mask(2), ModifierKind::Control);
        assert_eq!(ModifierKind::from_mask(4), ModifierKind::Alt);
    }

    #[test]
    fn test_from_mask_degrades_unsupported_values_to_none() {
        for mask in [0u8, 3, 5, 6, 7, 8, 16, 32, 0xFF] {
            assert_eq!(ModifierKind::from_mask(mask), ModifierKind::None, "mask {mask}");
        }
    }

    #[test]
    fn test_is_unsupported_mask_ignores_zero() {
        assert!(!ModifierKind::is_unsupported_mask(0));
        assert!(!ModifierKind::is_unsupported_mask(MASK_SHIFT));
        assert!(ModifierKind::is_unsupported_mask(MASK_HANKAKU));
        assert!(ModifierKind::is_unsupported_mask(MASK_RESERVED_2));
    }

    #[test]
    fn test_modifier_keys_use_generic_virtual_keys() {
        assert_eq!(ModifierKind::None.key(), None);
        assert_eq!(ModifierKind::Shift.key(), Some(KeyCode::Virtual(0x10)));
        assert_eq!(ModifierKind::Control.key(), Some(KeyCode::Virtual(0x11)));
        assert_eq!(ModifierKind::Alt.key(), Some(KeyCode::Virtual(0x12)));
    }
}
