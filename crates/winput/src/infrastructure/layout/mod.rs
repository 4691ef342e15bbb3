//! Keyboard layout adapters.
//!
//! Off Windows there is no OS layout to query; callers fall back to
//! `winput_core::UsQwertyLayout`.

#[cfg(target_os = "windows")]
pub mod windows;
