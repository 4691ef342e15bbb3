//! Windows keyboard layout via `GetKeyboardLayout` and `VkKeyScanExW`.
//!
//! The layout handle (HKL) is captured once, when the adapter is created,
//! for the calling thread.  Lookups afterwards always use that handle, even
//! if the user switches layouts while the session is alive.

#![cfg(target_os = "windows")]

use std::ffi::c_void;
use std::sync::Arc;

use tracing::{debug, warn};
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyboardLayout, VkKeyScanExW};
use windows::Win32::UI::TextServices::HKL;
use winput_core::{KeyScan, KeyboardLayout, UnmappedLayout};

/// The active keyboard layout of the thread that created it.
pub struct WindowsKeyboardLayout {
    // HKL wraps a raw pointer, which is neither Send nor Sync.  The handle is
    // an opaque identifier that is never dereferenced, so it is kept as an
    // integer.
    hkl: usize,
}

impl WindowsKeyboardLayout {
    /// Captures the current thread's layout.
    ///
    /// Returns `None` when the OS reports no layout.
    pub fn current() -> Option<Self> {
        // SAFETY: GetKeyboardLayout(0) queries the calling thread and has no
        // preconditions.
        let hkl = unsafe { GetKeyboardLayout(0) };
        if hkl.0.is_null() {
            return None;
        }
        debug!("captured keyboard layout {:#x}", hkl.0 as usize);
        Some(Self {
            hkl: hkl.0 as usize,
        })
    }

    /// Captures the current thread's layout, degrading to
    /// [`UnmappedLayout`] when none is available.
    pub fn current_or_unmapped() -> Arc<dyn KeyboardLayout> {
        match Self::current() {
            Some(layout) => Arc::new(layout),
            None => {
                warn!("no active keyboard layout; all characters will be typed as unicode");
                Arc::new(UnmappedLayout)
            }
        }
    }

    fn handle(&self) -> HKL {
        HKL(self.hkl as *mut c_void)
    }
}

impl KeyboardLayout for WindowsKeyboardLayout {
    fn key_scan(&self, ch: char) -> Option<KeyScan> {
        // VkKeyScanExW takes a single UTF-16 unit; supplementary-plane
        // characters never have a key.
        let unit = u16::try_from(ch as u32).ok()?;
        // SAFETY: VkKeyScanExW only reads its arguments.
        let raw = unsafe { VkKeyScanExW(unit, self.handle()) };
        KeyScan::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplementary_characters_have_no_key() {
        if let Some(layout) = WindowsKeyboardLayout::current() {
            assert_eq!(layout.key_scan('\u{1F600}'), None);
        }
    }

    #[test]
    fn test_space_has_a_key_on_every_layout() {
        if let Some(layout) = WindowsKeyboardLayout::current() {
            let scan = layout.key_scan(' ').expect("space must be mapped");
            assert_eq!(scan.virtual_key, 0x20);
        }
    }
}
