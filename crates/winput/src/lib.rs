//! winput library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does winput do?
//!
//! It types text and sends editing shortcuts by injecting key events into
//! the system-wide input stream, exactly as if they came from a physical
//! keyboard.  The receiving application cannot tell the difference.
//!
//! 1. [`application::input_session::InputSession`] turns a string or a
//!    [`winput_core::HotKey`] into an ordered batch of key events, using
//!    the keyboard layout captured when the session was created.
//! 2. The batch is handed to an
//!    [`application::injection::InputInjector`] in one call.  On Windows
//!    that is `SendInput`.
//! 3. The call succeeds only if the OS accepted every event.

/// Application layer: input session and injector seam.
pub mod application;

/// Infrastructure layer: OS adapters, recording injector, config storage.
pub mod infrastructure;

pub use application::injection::{press, InjectionError, InjectionReport, InputInjector};
pub use application::input_session::{InputSession, SessionOptions};
