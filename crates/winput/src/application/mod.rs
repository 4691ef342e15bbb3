//! Application layer: the input session and the injector seam it drives.
//!
//! **Dependency rule**: this layer depends only on `winput_core`.  OS
//! adapters live in `infrastructure` and plug in through the
//! [`injection::InputInjector`] and `winput_core::KeyboardLayout` traits.

/// Batch submission: `InputInjector`, `press`, and injection errors.
pub mod injection;

/// `InputSession`: typing text, sending hotkeys, tapping keys.
pub mod input_session;
