//! Persistent storage for the winput CLI.
//!
//! # Sub-modules
//!
//! - **`config`** – Reads and writes `AppConfig` as TOML in the
//!   platform-appropriate configuration directory.

pub mod config;
