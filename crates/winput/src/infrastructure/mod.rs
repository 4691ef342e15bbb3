//! Infrastructure layer for winput.
//!
//! Contains OS-facing adapters and storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `winput_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`injection`** – [`InputInjector`] implementations.  `SendInput` on
//!   Windows; a `RecordingInjector` everywhere, for tests and dry runs.
//!
//! - **`layout`** – The Windows keyboard layout adapter
//!   (`GetKeyboardLayout` + `VkKeyScanExW`).
//!
//! - **`storage`** – TOML configuration file.

pub mod injection;
pub mod layout;
pub mod storage;

use std::sync::Arc;

use winput_core::KeyboardLayout;

use crate::application::injection::{InjectionError, InputInjector};
use crate::application::input_session::{InputSession, SessionOptions};

/// The keyboard layout of the calling thread.
///
/// On Windows this captures the active layout, degrading to
/// `UnmappedLayout` when there is none.  Elsewhere it is the static
/// US-English layout.
pub fn platform_layout() -> Arc<dyn KeyboardLayout> {
    #[cfg(target_os = "windows")]
    {
        layout::windows::WindowsKeyboardLayout::current_or_unmapped()
    }

    #[cfg(not(target_os = "windows"))]
    {
        Arc::new(winput_core::UsQwertyLayout)
    }
}

/// The injector that delivers events to the system input stream.
///
/// # Errors
///
/// Returns [`InjectionError::Platform`] on targets without an injector.
pub fn platform_injector() -> Result<Arc<dyn InputInjector>, InjectionError> {
    #[cfg(target_os = "windows")]
    {
        Ok(Arc::new(injection::windows::WindowsInjector::new()))
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(InjectionError::Platform(format!(
            "synthetic keyboard input is not supported on {}",
            std::env::consts::OS
        )))
    }
}

/// Opens a session on the calling thread's layout with the OS injector.
///
/// # Errors
///
/// See [`platform_injector`].
pub fn platform_session(options: SessionOptions) -> Result<InputSession, InjectionError> {
    Ok(InputSession::with_options(
        platform_layout(),
        platform_injector()?,
        options,
    ))
}

/// Opens a session on the calling thread's layout that records batches
/// instead of injecting them.
pub fn dry_run_session(
    options: SessionOptions,
) -> (InputSession, Arc<injection::mock::RecordingInjector>) {
    let recorder = Arc::new(injection::mock::RecordingInjector::new());
    let session = InputSession::with_options(platform_layout(), recorder.clone(), options);
    (session, recorder)
}
