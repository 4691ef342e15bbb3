//! Value types for synthetic keyboard input.
//!
//! Nothing in here talks to the OS.  Events, key codes, modifiers, and the
//! hotkey table are plain data that the sequencer assembles and the
//! injector (in the `winput` crate) consumes read-only.

pub mod event;
pub mod hotkey;
pub mod modifier;
