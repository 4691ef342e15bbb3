//! Injector implementations.
//!
//! The Windows implementation is selected at compile time via
//! `#[cfg(target_os = "windows")]`.  The recording injector is available on
//! every platform for tests and dry runs.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
