//! Event sequencer: turns keys, hotkeys, and text into ordered event batches.
//!
//! Every press is bracketed the same way:
//!
//! ```text
//! [modifier down] key down | key up [modifier up]
//! \_____ KeyPhase::Down ___/ \___ KeyPhase::Up ___/
//! ```
//!
//! Batches preserve program order.  Nothing is reordered or coalesced across
//! characters, so a string is typed exactly as written once the batch is
//! injected.
//!
//! # Unicode keys and the missing release
//!
//! Characters the layout cannot produce are typed as Unicode events.  By
//! default [`text_events`] emits only the down half for those characters
//! ([`UnicodeRelease::Omit`]) and relies on the OS to synthesize the
//! release.  [`UnicodeRelease::Emit`] adds the explicit up event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::event::{KeyCode, KeyPhase, PrimitiveEvent};
use crate::domain::hotkey::HotKey;
use crate::domain::modifier::ModifierKind;
use crate::layout::{resolve, KeyboardLayout};

/// Whether Unicode-encoded characters get an explicit key-up when typing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnicodeRelease {
    /// Down event only.
    #[default]
    Omit,
    /// Down followed by up, like any other key.
    Emit,
}

impl From<bool> for UnicodeRelease {
    fn from(release: bool) -> Self {
        if release {
            UnicodeRelease::Emit
        } else {
            UnicodeRelease::Omit
        }
    }
}

/// Builds one phase of a key press.
///
/// Produces one to three events:
///
/// - `Down` with a modifier: modifier down, then key down.
/// - `Up` with a modifier: key up, then modifier up.
/// - Without a modifier: the key event alone.
///
/// The key is encoded as a virtual key or a Unicode event according to
/// its [`KeyCode`] variant.
pub fn build_key_events(key: KeyCode, modifier: ModifierKind, phase: KeyPhase) -> Vec<PrimitiveEvent> {
    let mut events = Vec::with_capacity(3);
    let modifier_key = modifier.key();

    if let (KeyPhase::Down, Some(mod_key)) = (phase, modifier_key) {
        events.push(PrimitiveEvent::for_key(mod_key, KeyPhase::Down));
    }

    events.push(PrimitiveEvent::for_key(key, phase));

    if let (KeyPhase::Up, Some(mod_key)) = (phase, modifier_key) {
        events.push(PrimitiveEvent::for_key(mod_key, KeyPhase::Up));
    }

    events
}

/// Shorthand for `build_key_events(key, modifier, KeyPhase::Down)`.
pub fn key_down(key: KeyCode, modifier: ModifierKind) -> Vec<PrimitiveEvent> {
    build_key_events(key, modifier, KeyPhase::Down)
}

/// Shorthand for `build_key_events(key, modifier, KeyPhase::Up)`.
pub fn key_up(key: KeyCode, modifier: ModifierKind) -> Vec<PrimitiveEvent> {
    build_key_events(key, modifier, KeyPhase::Up)
}

/// Builds a full press (down then up) of `key` held with `modifier`.
pub fn tap_events(key: KeyCode, modifier: ModifierKind) -> Vec<PrimitiveEvent> {
    let mut events = key_down(key, modifier);
    events.extend(key_up(key, modifier));
    events
}

/// Builds the batch for a hotkey from its static binding.
///
/// Does not consult the keyboard layout.
pub fn hotkey_events(hotkey: HotKey) -> Vec<PrimitiveEvent> {
    let binding = hotkey.binding();
    tap_events(binding.key, binding.modifier)
}

/// Builds the batch that types `text`, one character at a time.
///
/// Each character is resolved against `layout`.  Characters the layout can
/// produce are pressed and released with their modifier.  Characters it
/// cannot produce are typed as Unicode events (one per UTF-16 code unit)
/// with no modifier, and are released only under [`UnicodeRelease::Emit`].
pub fn text_events<L: KeyboardLayout + ?Sized>(
    layout: &L,
    text: &str,
    release: UnicodeRelease,
) -> Vec<PrimitiveEvent> {
    let mut events = Vec::with_capacity(text.len() * 4);
    let mut misses = 0usize;

    for ch in text.chars() {
        match resolve(layout, ch) {
            Ok(resolved) => {
                events.extend(tap_events(resolved.key, resolved.modifier));
            }
            Err(miss) => {
                misses += 1;
                for key in miss.unicode_keys() {
                    events.extend(key_down(key, ModifierKind::None));
                    if release == UnicodeRelease::Emit {
                        events.extend(key_up(key, ModifierKind::None));
                    }
                }
            }
        }
    }

    debug!(
        "sequenced {} chars into {} events ({misses} typed as unicode)",
        text.chars().count(),
        events.len()
    );
    events
}
