//! Windows injector via the SendInput API.
//!
//! Each [`PrimitiveEvent`] becomes one `INPUT` of type `INPUT_KEYBOARD`.
//! The event's codes and flag word already use the `KEYBDINPUT` layout, so
//! the conversion is a field-by-field copy.  The whole batch goes to one
//! `SendInput` call, which the OS inserts into the input stream without
//! interleaving events from other sources.

#![cfg(target_os = "windows")]

use tracing::warn;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, VIRTUAL_KEY,
};
use winput_core::PrimitiveEvent;

use crate::application::injection::{InjectionError, InputInjector};

/// Windows implementation of [`InputInjector`] using SendInput.
pub struct WindowsInjector;

impl WindowsInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputInjector for WindowsInjector {
    fn send(&self, events: &[PrimitiveEvent]) -> Result<u32, InjectionError> {
        let inputs: Vec<INPUT> = events.iter().map(to_input).collect();

        // SAFETY: `inputs` is a contiguous slice of fully initialized INPUT
        // structures and cbsize matches their size.
        let accepted = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };

        if (accepted as usize) < inputs.len() {
            // UIPI or a locked desktop blocks injection; the reason is only
            // available through GetLastError.
            let reason = windows::core::Error::from_win32();
            warn!("SendInput accepted {accepted}/{}: {reason}", inputs.len());
        }
        Ok(accepted)
    }
}

fn to_input(event: &PrimitiveEvent) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(event.key_code()),
                wScan: event.scan_code(),
                dwFlags: KEYBD_EVENT_FLAGS(event.flags().bits()),
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winput_core::{KeyCode, KeyPhase};
    use windows::Win32::UI::Input::KeyboardAndMouse::{KEYEVENTF_KEYUP, KEYEVENTF_UNICODE};

    #[test]
    fn test_virtual_key_event_converts_to_keybdinput() {
        let event = PrimitiveEvent::for_key(KeyCode::Virtual(0x41), KeyPhase::Up);

        let input = to_input(&event);

        assert_eq!(input.r#type, INPUT_KEYBOARD);
        // SAFETY: the union was initialized through `ki`
        let ki = unsafe { input.Anonymous.ki };
        assert_eq!(ki.wVk, VIRTUAL_KEY(0x41));
        assert_eq!(ki.wScan, 0);
        assert_eq!(ki.dwFlags, KEYEVENTF_KEYUP);
    }

    #[test]
    fn test_unicode_event_flag_bits_match_win32() {
        let event = PrimitiveEvent::for_key(KeyCode::Unicode(0x3053), KeyPhase::Down);

        let input = to_input(&event);

        // SAFETY: the union was initialized through `ki`
        let ki = unsafe { input.Anonymous.ki };
        assert_eq!(ki.wVk, VIRTUAL_KEY(0));
        assert_eq!(ki.wScan, 0x3053);
        assert_eq!(ki.dwFlags, KEYEVENTF_UNICODE);
    }
}
