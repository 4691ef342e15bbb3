//! # winput-core
//!
//! OS-free building blocks for synthesizing keyboard input: the primitive
//! key event model, keyboard layout resolution, and the event sequencer that
//! turns characters and editing shortcuts into ordered key-down/key-up
//! batches.
//!
//! # Architecture overview
//!
//! Synthetic typing goes through three steps:
//!
//! - **`layout`** – Asks the active keyboard layout which virtual key (and
//!   which modifier) produces a character.  Characters the layout cannot
//!   produce are reported as a miss and typed as raw Unicode instead.
//!
//! - **`sequencer`** – Builds the ordered event batch: modifier down, key
//!   down, key up, modifier up, repeated per character.
//!
//! - **`domain`** – The value types shared by both: [`PrimitiveEvent`],
//!   [`KeyCode`], [`ModifierKind`], and the static [`HotKey`] table.
//!
//! Delivering a batch to the OS is not this crate's job; see the `winput`
//! crate for the injector seam and the platform adapters.

pub mod domain;
pub mod layout;
pub mod sequencer;

pub use domain::event::{EventFlags, EventKind, KeyCode, KeyPhase, PrimitiveEvent, MAX_ASCII};
pub use domain::hotkey::{HotKey, HotKeyBinding, UnknownHotKey};
pub use domain::modifier::ModifierKind;
pub use layout::{
    resolve, KeyScan, KeyboardLayout, LayoutMiss, ResolvedKey, UnmappedLayout, UsQwertyLayout,
};
pub use sequencer::{
    build_key_events, hotkey_events, key_down, key_up, tap_events, text_events, UnicodeRelease,
};
